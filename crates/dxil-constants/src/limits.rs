use core::fmt;

use bitflags::bitflags;

bitflags! {
    /// Global shader flags, bit compatible with the DXBC `GLOBAL_FLAG_*` bits.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct ShaderFlags: u32 {
        const DISABLE_OPTIMIZATIONS = 0x0000_0001;
        /// Set when math refactoring is *not* allowed (inverse of the DXBC bit).
        const DISABLE_MATH_REFACTORING = 0x0000_0002;
        const ENABLE_DOUBLE_PRECISION = 0x0000_0004;
        const FORCE_EARLY_DEPTH_STENCIL = 0x0000_0008;
        const ENABLE_RAW_AND_STRUCTURED_BUFFERS = 0x0000_0010;
        const ENABLE_MIN_PRECISION = 0x0000_0020;
        const ENABLE_DOUBLE_EXTENSIONS = 0x0000_0040;
        const ENABLE_MSAD = 0x0000_0080;
        const ALL_RESOURCES_BOUND = 0x0000_0100;
    }
}

pub const NUM_OUTPUT_STREAMS: u32 = 4;
pub const NUM_CLIP_PLANES: u32 = 6;

/// Only meaningful for DXBC; DXIL has no temp register file.
pub const MAX_TEMP_REG_COUNT: u32 = 4096;
pub const MAX_CBUFFER_SIZE: u32 = 4096;
pub const MAX_STRUCT_BUFFER_STRIDE: u32 = 2048;
pub const MAX_HS_OUTPUT_CONTROL_POINTS_TOTAL_SCALARS: u32 = 3968;
pub const MAX_HS_OUTPUT_PATCH_CONSTANT_TOTAL_SCALARS: u32 = 32 * 4;
pub const MAX_SIGNATURE_TOTAL_VECTORS: u32 = 32;
pub const MAX_OUTPUT_TOTAL_SCALARS: u32 = MAX_SIGNATURE_TOTAL_VECTORS * 4;
pub const MAX_INPUT_TOTAL_SCALARS: u32 = MAX_SIGNATURE_TOTAL_VECTORS * 4;
pub const MAX_CLIP_OR_CULL_DISTANCE_ELEMENT_COUNT: u32 = 2;
pub const MAX_CLIP_OR_CULL_DISTANCE_COUNT: u32 = 2 * 4;
pub const MAX_GS_OUTPUT_VERTEX_COUNT: u32 = 1024;
pub const MAX_GS_INSTANCE_COUNT: u32 = 32;
pub const MAX_IA_PATCH_CONTROL_POINT_COUNT: u32 = 32;
pub const HS_MAX_TESS_FACTOR_LOWER_BOUND: f32 = 1.0;
pub const HS_MAX_TESS_FACTOR_UPPER_BOUND: f32 = 64.0;
pub const HS_DEFAULT_INPUT_CONTROL_POINT_COUNT: u32 = 1;

pub const MAX_CS_THREADS_PER_GROUP: u32 = 1024;
pub const MAX_CS_THREAD_GROUP_X: u32 = 1024;
pub const MAX_CS_THREAD_GROUP_Y: u32 = 1024;
pub const MAX_CS_THREAD_GROUP_Z: u32 = 64;
pub const MIN_CS_THREAD_GROUP_X: u32 = 1;
pub const MIN_CS_THREAD_GROUP_Y: u32 = 1;
pub const MIN_CS_THREAD_GROUP_Z: u32 = 1;
/// Compute limits on shader model 4.x hardware.
pub const MAX_CS4X_THREADS_PER_GROUP: u32 = 768;
pub const MAX_CS4X_THREAD_GROUP_X: u32 = 768;
pub const MAX_CS4X_THREAD_GROUP_Y: u32 = 768;
/// Thread-group shared memory, in bytes.
pub const MAX_TGSM_SIZE: u32 = 8192 * 4;
pub const MAX_GS_OUTPUT_TOTAL_SCALARS: u32 = 1024;

pub const MAX_MIP_LOD_BIAS: f32 = 15.99;
pub const MIN_MIP_LOD_BIAS: f32 = -16.0;

/// Position of the status component in a resource-return struct.
pub const RES_RET_STATUS_INDEX: u32 = 4;

/// Data layout of modules written with 32-bit storage for small scalars.
pub const LEGACY_LAYOUT_STRING: &str =
    "e-m:e-p:32:32-i1:32-i8:32-i16:32-i32:32-i64:64-f16:32-f32:32-f64:64-n8:16:32:64";
/// Data layout with native 8- and 16-bit scalar storage.
pub const NEW_LAYOUT_STRING: &str =
    "e-m:e-p:32:32-i1:32-i8:8-i16:16-i32:32-i64:64-f16:16-f32:32-f64:64-n8:16:32:64";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LimitValue {
    Unsigned(u32),
    Float(f32),
}

impl fmt::Display for LimitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
        }
    }
}

macro_rules! limit_table {
    ($($kind:ident $name:ident),+ $(,)?) => {
        /// Every numeric limit, by constant name.
        pub const ALL: &[(&str, LimitValue)] = &[
            $((stringify!($name), LimitValue::$kind($name)),)+
        ];
    };
}

limit_table! {
    Unsigned NUM_OUTPUT_STREAMS,
    Unsigned NUM_CLIP_PLANES,
    Unsigned MAX_TEMP_REG_COUNT,
    Unsigned MAX_CBUFFER_SIZE,
    Unsigned MAX_STRUCT_BUFFER_STRIDE,
    Unsigned MAX_HS_OUTPUT_CONTROL_POINTS_TOTAL_SCALARS,
    Unsigned MAX_HS_OUTPUT_PATCH_CONSTANT_TOTAL_SCALARS,
    Unsigned MAX_SIGNATURE_TOTAL_VECTORS,
    Unsigned MAX_OUTPUT_TOTAL_SCALARS,
    Unsigned MAX_INPUT_TOTAL_SCALARS,
    Unsigned MAX_CLIP_OR_CULL_DISTANCE_ELEMENT_COUNT,
    Unsigned MAX_CLIP_OR_CULL_DISTANCE_COUNT,
    Unsigned MAX_GS_OUTPUT_VERTEX_COUNT,
    Unsigned MAX_GS_INSTANCE_COUNT,
    Unsigned MAX_IA_PATCH_CONTROL_POINT_COUNT,
    Float HS_MAX_TESS_FACTOR_LOWER_BOUND,
    Float HS_MAX_TESS_FACTOR_UPPER_BOUND,
    Unsigned HS_DEFAULT_INPUT_CONTROL_POINT_COUNT,
    Unsigned MAX_CS_THREADS_PER_GROUP,
    Unsigned MAX_CS_THREAD_GROUP_X,
    Unsigned MAX_CS_THREAD_GROUP_Y,
    Unsigned MAX_CS_THREAD_GROUP_Z,
    Unsigned MIN_CS_THREAD_GROUP_X,
    Unsigned MIN_CS_THREAD_GROUP_Y,
    Unsigned MIN_CS_THREAD_GROUP_Z,
    Unsigned MAX_CS4X_THREADS_PER_GROUP,
    Unsigned MAX_CS4X_THREAD_GROUP_X,
    Unsigned MAX_CS4X_THREAD_GROUP_Y,
    Unsigned MAX_TGSM_SIZE,
    Unsigned MAX_GS_OUTPUT_TOTAL_SCALARS,
    Float MAX_MIP_LOD_BIAS,
    Float MIN_MIP_LOD_BIAS,
    Unsigned RES_RET_STATUS_INDEX,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_flags_are_contiguous_low_bits() {
        assert_eq!(ShaderFlags::all().bits(), 0x1FF);
        assert_eq!(ShaderFlags::ALL_RESOURCES_BOUND.bits(), 0x100);
        for (name, flag) in ShaderFlags::all().iter_names() {
            assert_eq!(flag.bits().count_ones(), 1, "{name}");
        }
    }

    #[test]
    fn derived_limits() {
        assert_eq!(MAX_OUTPUT_TOTAL_SCALARS, 128);
        assert_eq!(MAX_INPUT_TOTAL_SCALARS, 128);
        assert_eq!(MAX_HS_OUTPUT_PATCH_CONSTANT_TOTAL_SCALARS, 128);
        assert_eq!(MAX_CLIP_OR_CULL_DISTANCE_COUNT, 8);
        assert_eq!(MAX_TGSM_SIZE, 32768);
        assert!(MAX_CS_THREAD_GROUP_Z < MAX_CS_THREADS_PER_GROUP);
        assert!(HS_MAX_TESS_FACTOR_LOWER_BOUND < HS_MAX_TESS_FACTOR_UPPER_BOUND);
        assert!(MIN_MIP_LOD_BIAS < MAX_MIP_LOD_BIAS);
    }

    #[test]
    fn layouts_differ_only_in_small_scalar_storage() {
        let legacy: Vec<&str> = LEGACY_LAYOUT_STRING.split('-').collect();
        let new: Vec<&str> = NEW_LAYOUT_STRING.split('-').collect();
        assert_eq!(legacy.len(), new.len());
        let differing: Vec<(&str, &str)> = legacy
            .iter()
            .zip(&new)
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (*a, *b))
            .collect();
        assert_eq!(
            differing,
            [("i8:32", "i8:8"), ("i16:32", "i16:16"), ("f16:32", "f16:16")]
        );
    }

    #[test]
    fn limit_table_is_complete_and_unique() {
        assert_eq!(ALL.len(), 33);
        let mut names: Vec<&str> = ALL.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
        assert!(ALL.contains(&("MAX_CS_THREADS_PER_GROUP", LimitValue::Unsigned(1024))));
        assert!(ALL.contains(&("MIN_MIP_LOD_BIAS", LimitValue::Float(-16.0))));
    }

    #[test]
    fn float_limits_print_with_a_decimal_point() {
        assert_eq!(LimitValue::Float(64.0).to_string(), "64.0");
        assert_eq!(LimitValue::Float(15.99).to_string(), "15.99");
        assert_eq!(LimitValue::Unsigned(4).to_string(), "4");
    }
}

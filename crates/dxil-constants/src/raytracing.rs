use bitflags::bitflags;

use crate::macros::dxil_enum;

bitflags! {
    /// Ray flags passed to `OpCode::TraceRay` and returned by `OpCode::RayFlags`.
    ///
    /// Mirrors the HLSL `RAY_FLAG_*` values. `NONE` is the empty set.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct RayFlag: u8 {
        const NONE = 0x00;
        const FORCE_OPAQUE = 0x01;
        const FORCE_NON_OPAQUE = 0x02;
        const ACCEPT_FIRST_HIT_AND_END_SEARCH = 0x04;
        const SKIP_CLOSEST_HIT_SHADER = 0x08;
        const CULL_BACK_FACING_TRIANGLES = 0x10;
        const CULL_FRONT_FACING_TRIANGLES = 0x20;
        const CULL_OPAQUE = 0x40;
        const CULL_NON_OPAQUE = 0x80;
    }
}

dxil_enum! {
    /// Mirrors the HLSL `HIT_KIND_*` values reported by `OpCode::HitKind`.
    pub enum HitKind: u8 {
        None = 0x00,
        TriangleFrontFace = 0xFE,
        TriangleBackFace = 0xFF,
    }
}

impl HitKind {
    pub const fn is_triangle(self) -> bool {
        matches!(self, Self::TriangleFrontFace | Self::TriangleBackFace)
    }
}

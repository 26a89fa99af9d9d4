//! Constant tables for the DXIL shader intermediate representation.
//!
//! Everything here is a compile-time value: operation and operation-class
//! identifiers, operand positions, type tags, signature vocabulary, resource
//! classes, barrier and ray flags, primitive/tessellation enumerations, wave
//! operation kinds, address spaces, shader flags and numeric limits.
//!
//! The numbers are the serialized encoding used by DXIL modules and must not
//! change. Each enumeration therefore spells out every discriminant, and the
//! golden tests under `tests/` pin them.
//!
//! The only behavior is the packed version codec in [`version`] and a few
//! conversions derived directly from the tables.

#![forbid(unsafe_code)]

mod macros;

mod error;
/// Cross-lane (wave and quad) operation kinds.
pub mod wave;
/// Control-flow hints.
pub mod flow;
/// Shader flags, numeric limits and data-layout strings.
pub mod limits;
/// XYZW component masks.
pub mod mask;
/// Atomic operation kinds, barrier modes and address spaces.
pub mod memory;
/// Operation and operation-class identifiers.
pub mod opcode;
pub mod operand_index;
/// Input primitives, topologies and tessellator configuration.
pub mod primitive;
/// Ray flags and hit kinds.
pub mod raytracing;
/// Resource classes, kinds and sampler kinds.
pub mod resource;
/// Shader kinds and signature vocabulary.
pub mod shader;
/// DXIL version packing.
pub mod version;

pub use crate::error::{DxilError, Result};
pub use crate::flow::ControlFlowHint;
pub use crate::limits::ShaderFlags;
pub use crate::mask::ComponentMask;
pub use crate::memory::{AddressSpace, AtomicBinOpCode, BarrierMode};
pub use crate::opcode::{OpCode, OpCodeClass};
pub use crate::primitive::{
    InputPrimitive, PrimitiveTopology, TessellatorDomain, TessellatorOutputPrimitive,
    TessellatorPartitioning,
};
pub use crate::raytracing::{HitKind, RayFlag};
pub use crate::resource::{ResourceClass, ResourceKind, SamplerKind};
pub use crate::shader::{
    ComponentType, Float32DenormMode, InterpolationMode, LowPrecisionMode, PackingKind,
    PackingStrategy, SemanticInterpretationKind, SemanticKind, ShaderKind, SigPointKind,
    SignatureDataWidth, SignatureKind,
};
pub use crate::version::{
    get_current_dxil_version, get_dxil_version_major, get_dxil_version_minor, make_dxil_version,
    DxilVersion, DXIL_MAJOR, DXIL_MINOR,
};
pub use crate::wave::{QuadOpKind, SignedOpKind, WaveBitOpKind, WaveOpKind};

/// Uniform view over every explicitly numbered enumeration in this crate.
///
/// Lets tooling walk a table generically (name and encoded value of each tag)
/// without knowing its concrete type.
pub trait DxilEnum: Copy + Sized + 'static {
    /// The enumeration's type name, e.g. `"OpCode"`.
    const KIND: &'static str;

    fn all() -> &'static [Self];

    fn name(self) -> &'static str;

    /// The encoded value widened to `u32`.
    fn value(self) -> u32;
}

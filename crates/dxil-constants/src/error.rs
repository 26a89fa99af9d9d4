use thiserror::Error;

pub type Result<T> = std::result::Result<T, DxilError>;

/// Errors produced when converting raw numbers or names into DXIL tags.
///
/// The tables themselves are infallible; only the checked conversions
/// (`TryFrom`, `FromStr`, [`crate::DxilVersion::from_packed_checked`]) can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DxilError {
    #[error("{value} (0x{value:x}) is not a valid {kind} value")]
    UnknownValue { kind: &'static str, value: u32 },

    #[error("unknown {kind} name {name:?}")]
    UnknownName { kind: &'static str, name: String },

    #[error("packed DXIL version 0x{packed:08x} has bits set above bit 15")]
    NonCanonicalVersion { packed: u32 },

    #[error("malformed DXIL version string: {0}")]
    MalformedVersion(String),
}

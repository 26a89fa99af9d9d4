use core::fmt;
use core::str::FromStr;

use crate::DxilError;

pub const DXIL_MAJOR: u32 = 1;
pub const DXIL_MINOR: u32 = 3;

/// Packs a version as `(major << 8) | minor`.
///
/// Inputs are not range checked: a `minor` above 255 spills into the major
/// byte and high `major` bits shift past bit 15, exactly like the
/// serialized form has always been produced.
pub const fn make_dxil_version(major: u32, minor: u32) -> u32 {
    (major << 8) | minor
}

pub const fn get_current_dxil_version() -> u32 {
    make_dxil_version(DXIL_MAJOR, DXIL_MINOR)
}

pub const fn get_dxil_version_major(version: u32) -> u32 {
    (version >> 8) & 0xFF
}

pub const fn get_dxil_version_minor(version: u32) -> u32 {
    version & 0xFF
}

/// A decoded `major.minor` DXIL version.
///
/// Ordering compares major first, then minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DxilVersion {
    pub major: u8,
    pub minor: u8,
}

impl DxilVersion {
    pub const CURRENT: Self = Self::new(DXIL_MAJOR as u8, DXIL_MINOR as u8);

    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    pub const fn packed(self) -> u32 {
        make_dxil_version(self.major as u32, self.minor as u32)
    }

    /// Decodes the low 16 bits of `packed`; anything above bit 15 is ignored.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            major: get_dxil_version_major(packed) as u8,
            minor: get_dxil_version_minor(packed) as u8,
        }
    }

    /// Like [`DxilVersion::from_packed`], but rejects words that carry bits
    /// above the 16-bit version field.
    pub fn from_packed_checked(packed: u32) -> Result<Self, DxilError> {
        if packed > 0xFFFF {
            return Err(DxilError::NonCanonicalVersion { packed });
        }
        Ok(Self::from_packed(packed))
    }

    /// True for versions this table set describes: same major, minor no newer
    /// than [`DxilVersion::CURRENT`].
    pub const fn is_supported(self) -> bool {
        self.major == Self::CURRENT.major && self.minor <= Self::CURRENT.minor
    }
}

impl Default for DxilVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for DxilVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for DxilVersion {
    type Err = DxilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((major, minor)) = s.trim().split_once('.') else {
            return Err(DxilError::MalformedVersion(format!(
                "expected <major>.<minor>, got {s:?}"
            )));
        };
        let major = major
            .parse::<u8>()
            .map_err(|e| DxilError::MalformedVersion(format!("major {major:?}: {e}")))?;
        let minor = minor
            .parse::<u8>()
            .map_err(|e| DxilError::MalformedVersion(format!("minor {minor:?}: {e}")))?;
        Ok(Self::new(major, minor))
    }
}

impl From<DxilVersion> for u32 {
    fn from(value: DxilVersion) -> Self {
        value.packed()
    }
}

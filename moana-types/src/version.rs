//! Versioning for exported dashboard documents.

use crate::EXPORT_VERSION;

/// Version information embedded in exported documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExportVersion {
    /// Bumped on breaking layout changes.
    pub major: u32,
    /// Bumped when fields are added.
    pub minor: u32,
}

impl ExportVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// The version written by this library.
    pub const fn current() -> Self {
        Self::new(EXPORT_VERSION, 0)
    }
}

impl Default for ExportVersion {
    fn default() -> Self {
        Self::current()
    }
}


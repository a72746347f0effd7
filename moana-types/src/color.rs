//! Plain RGB colors carried by the data model.

use core::fmt;

/// A 24-bit RGB color.
///
/// Kept free of any terminal library so the data model can be shared
/// between renderers; the UI converts it to its own color type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u32() {
        let c = Rgb::from_u32(0x10B981);
        assert_eq!(c, Rgb::new(0x10, 0xB9, 0x81));
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(Rgb::from_u32(0xF59E0B).to_string(), "#F59E0B");
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
    }
}

//! Slice colours.

use serde::{Deserialize, Serialize};

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pure white, used for slice labels.
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    /// Format as `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse `#RRGGBB` or `RRGGBB`.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// The muted synthwave palette, assigned cyclically to every slice.
pub const SYNTH_PALETTE: [Rgb; 5] = [
    Rgb::new(0x43, 0x61, 0xEE), // blue
    Rgb::new(0x3F, 0x37, 0xC9), // indigo
    Rgb::new(0x72, 0x09, 0xB7), // purple
    Rgb::new(0xB5, 0x17, 0x9E), // grape
    Rgb::new(0x48, 0x95, 0xEF), // light blue
];

/// Palette colour for a slice index.
pub fn color_for(index: usize) -> Rgb {
    SYNTH_PALETTE[index % SYNTH_PALETTE.len()]
}

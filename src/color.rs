//! Color sampling for round generation.
//!
//! Targets are drawn away from the near-black / near-white extremes so every
//! swatch stays readable against the board chrome. Decoys are jittered copies
//! of the target; the jitter radius (`spread`) is the difficulty knob.

use rand::Rng;

/// Inclusive channel range targets are sampled from.
pub const TARGET_CHANNEL_MIN: u8 = 40;
pub const TARGET_CHANNEL_MAX: u8 = 220;

/// An sRGB color with 8-bit channels. Equality is channel equality, which is
/// the same thing as equality of the canonical `#RRGGBB` strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical uppercase `#RRGGBB` form, the representation the frontend
    /// feeds straight into CSS.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parses a `#RRGGBB` string (case-insensitive). Inverse of [`Color::hex`].
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

/// Samples a round's target color, each channel uniform in
/// [`TARGET_CHANNEL_MIN`, `TARGET_CHANNEL_MAX`].
pub fn pick_target(rng: &mut impl Rng) -> Color {
    Color {
        r: rng.gen_range(TARGET_CHANNEL_MIN..=TARGET_CHANNEL_MAX),
        g: rng.gen_range(TARGET_CHANNEL_MIN..=TARGET_CHANNEL_MAX),
        b: rng.gen_range(TARGET_CHANNEL_MIN..=TARGET_CHANNEL_MAX),
    }
}

/// Produces a color near `target`: every channel gets an independent uniform
/// offset in `[-spread, spread]` and is clamped back into `[0, 255]`.
pub fn make_decoy(target: Color, spread: i32, rng: &mut impl Rng) -> Color {
    let mut jitter = |channel: u8| -> u8 {
        let offset = rng.gen_range(-spread..=spread);
        (i32::from(channel) + offset).clamp(0, 255) as u8
    };
    let (r, g, b) = (jitter(target.r), jitter(target.g), jitter(target.b));
    Color { r, g, b }
}

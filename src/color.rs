// src/color.rs

//! Defines the 8-bit RGBA `Color` value type and its float-channel
//! counterpart `ColorF`.

use serde::{Deserialize, Serialize};

/// A 4-channel, 8-bit color in R, G, B, A order.
///
/// This is the pixel format of `PixelBuffer`; `#[repr(C)]` keeps the layout
/// stable so a frame can be handed to an upload collaborator as raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    /// Transparent black.
    pub const CLEAR: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Opaque color; alpha is fixed at 255.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Quantizes normalized float channels to 8 bits.
    /// Inputs are clamped to [0, 1] before scaling, so any float is accepted.
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color {
            r: quantize(r),
            g: quantize(g),
            b: quantize(b),
            a: quantize(a),
        }
    }

    /// Same as [`Color::from_f32`] with alpha fixed at 255.
    pub fn from_f32_rgb(r: f32, g: f32, b: f32) -> Self {
        Color {
            r: quantize(r),
            g: quantize(g),
            b: quantize(b),
            a: 255,
        }
    }
}

impl Default for Color {
    /// Returns `Color::CLEAR` (transparent black).
    fn default() -> Self {
        Color::CLEAR
    }
}

fn quantize(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A 4-channel `f32` color, exchanged with collaborators that work in float
/// channels (normalized textures, shader-style parameters). Pure data; the
/// 8-bit `Color` is the only format the buffer stores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct ColorF {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorF {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        ColorF { r, g, b, a }
    }

    /// Three-channel constructor. Alpha is filled with 255.0, the byte-range
    /// opaque value, so callers mixing byte and unit conventions read it as
    /// fully opaque either way.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        ColorF { r, g, b, a: 255.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_constructor_is_opaque() {
        // Contract: the three-channel constructor always yields alpha 255.
        let c = Color::rgb(10, 20, 30);
        assert_eq!(c, Color::new(10, 20, 30, 255));
    }

    #[test]
    fn default_is_transparent_black() {
        assert_eq!(Color::default(), Color::CLEAR);
        assert_eq!(Color::CLEAR, Color::new(0, 0, 0, 0));
    }

    #[test]
    fn from_f32_clamps_and_rounds() {
        // Contract: out-of-range floats clamp to [0, 1] before quantizing,
        // and in-range values round to the nearest 8-bit level.
        let c = Color::from_f32(-0.5, 0.5, 1.5, 1.0);
        assert_eq!(c, Color::new(0, 128, 255, 255));
        assert_eq!(Color::from_f32_rgb(0.0, 1.0, 0.25), Color::new(0, 255, 64, 255));
    }

    #[test]
    fn named_constants_match_channel_values() {
        assert_eq!(Color::WHITE, Color::new(255, 255, 255, 255));
        assert_eq!(Color::MAGENTA, Color::new(255, 0, 255, 255));
        assert_eq!(Color::CYAN, Color::new(0, 255, 255, 255));
    }

    #[test]
    fn color_serde_round_trip() {
        let c = Color::new(1, 2, 3, 4);
        let json = serde_json::to_string(&c).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn colorf_rgb_alpha_is_byte_opaque() {
        // Contract: the float color's three-channel constructor uses the
        // byte-range opaque alpha, not 1.0.
        let c = ColorF::rgb(0.1, 0.2, 0.3);
        assert_eq!(c.a, 255.0);
        let json = serde_json::to_string(&c).unwrap();
        let back: ColorF = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}

// src/blend.rs

//! Blend factors and the per-channel arithmetic behind
//! [`PixelBuffer::set_pixel_blended`](crate::buffer::PixelBuffer::set_pixel_blended).
//!
//! The arithmetic is deliberately the raw byte form, not normalized alpha
//! blending: a channel factor multiplies by the raw 0-255 channel value, and
//! the summed result saturates at 255. `One`/`Zero` pass the operand through
//! unchanged or zero it, so `(One, Zero)` is a plain overwrite and
//! `(Zero, One)` keeps the stored pixel.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Weight applied to one operand of a blended write.
///
/// The factor is evaluated against a *target* operand: the incoming color
/// when weighting the source term, the stored color when weighting the
/// destination term. `Source*`/`Destination*` factors read their multiplier
/// from the incoming/stored color respectively, regardless of which operand
/// they are weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlendFactor {
    Zero,
    One,
    SourceColor,
    OneMinusSourceColor,
    SourceAlpha,
    OneMinusSourceAlpha,
    DestinationColor,
    OneMinusDestinationColor,
    DestinationAlpha,
    OneMinusDestinationAlpha,
}

impl BlendFactor {
    /// Weighted channels of `target`, widened to `u32` so the caller can sum
    /// two terms without overflow (max term is 255 * 255).
    fn weigh(self, target: Color, source: Color, destination: Color) -> [u32; 4] {
        let t = channels(target);
        let s = channels(source);
        let d = channels(destination);
        match self {
            BlendFactor::Zero => [0, 0, 0, 0],
            BlendFactor::One => t,
            BlendFactor::SourceColor => mul(t, s),
            BlendFactor::OneMinusSourceColor => mul(t, inv(s)),
            BlendFactor::SourceAlpha => scale(t, s[3]),
            BlendFactor::OneMinusSourceAlpha => scale(t, 255 - s[3]),
            BlendFactor::DestinationColor => mul(t, d),
            BlendFactor::OneMinusDestinationColor => mul(t, inv(d)),
            BlendFactor::DestinationAlpha => scale(t, d[3]),
            BlendFactor::OneMinusDestinationAlpha => scale(t, 255 - d[3]),
        }
    }
}

/// Blends `source` over `destination`: per channel, the factor-weighted
/// source and destination terms are summed and saturated at 255.
pub fn blend(
    source: Color,
    destination: Color,
    source_factor: BlendFactor,
    destination_factor: BlendFactor,
) -> Color {
    let s = source_factor.weigh(source, source, destination);
    let d = destination_factor.weigh(destination, source, destination);
    Color::new(
        saturate(s[0] + d[0]),
        saturate(s[1] + d[1]),
        saturate(s[2] + d[2]),
        saturate(s[3] + d[3]),
    )
}

fn channels(c: Color) -> [u32; 4] {
    [c.r as u32, c.g as u32, c.b as u32, c.a as u32]
}

fn mul(t: [u32; 4], m: [u32; 4]) -> [u32; 4] {
    [t[0] * m[0], t[1] * m[1], t[2] * m[2], t[3] * m[3]]
}

fn inv(m: [u32; 4]) -> [u32; 4] {
    [255 - m[0], 255 - m[1], 255 - m[2], 255 - m[3]]
}

fn scale(t: [u32; 4], m: u32) -> [u32; 4] {
    [t[0] * m, t[1] * m, t[2] * m, t[3] * m]
}

fn saturate(v: u32) -> u8 {
    v.min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_zero_is_overwrite() {
        // Contract: (One, Zero) yields the source color exactly.
        let src = Color::new(12, 34, 56, 78);
        let dst = Color::new(200, 100, 50, 25);
        assert_eq!(blend(src, dst, BlendFactor::One, BlendFactor::Zero), src);
    }

    #[test]
    fn zero_one_keeps_destination() {
        // Contract: (Zero, One) leaves the stored pixel untouched.
        let src = Color::new(12, 34, 56, 78);
        let dst = Color::new(200, 100, 50, 25);
        assert_eq!(blend(src, dst, BlendFactor::Zero, BlendFactor::One), dst);
    }

    #[test]
    fn channel_products_saturate() {
        // Raw channel products blow far past the byte range; the sum clamps.
        let out = blend(
            Color::WHITE,
            Color::WHITE,
            BlendFactor::SourceColor,
            BlendFactor::DestinationColor,
        );
        assert_eq!(out, Color::WHITE);
    }

    #[test]
    fn source_alpha_weights_every_channel() {
        // Source alpha of 2 doubles each source channel; destination dropped.
        let src = Color::new(100, 3, 0, 2);
        let dst = Color::new(10, 10, 10, 10);
        let out = blend(src, dst, BlendFactor::SourceAlpha, BlendFactor::Zero);
        assert_eq!(out, Color::new(200, 6, 0, 4));
    }

    #[test]
    fn one_minus_destination_alpha_weights_source() {
        let src = Color::new(1, 2, 3, 4);
        let dst = Color::new(9, 9, 9, 254);
        let out = blend(src, dst, BlendFactor::OneMinusDestinationAlpha, BlendFactor::Zero);
        assert_eq!(out, Color::new(1, 2, 3, 4));
    }

    #[test]
    fn one_minus_source_color_inverts_per_channel() {
        // Weighting the destination by (255 - source channel), source dropped.
        let src = Color::new(255, 0, 254, 0);
        let dst = Color::new(1, 1, 1, 1);
        let out = blend(src, dst, BlendFactor::Zero, BlendFactor::OneMinusSourceColor);
        assert_eq!(out, Color::new(0, 255, 1, 255));
    }

    #[test]
    fn factor_serde_round_trip() {
        let factor = BlendFactor::OneMinusSourceAlpha;
        let json = serde_json::to_string(&factor).unwrap();
        assert_eq!(json, "\"OneMinusSourceAlpha\"");
        let back: BlendFactor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, factor);
    }
}

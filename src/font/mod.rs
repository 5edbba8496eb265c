// src/font/mod.rs

//! Bitmap glyph tables and the capability trait the text rasterizer draws
//! through.
//!
//! A glyph table maps each printable ASCII character (`' '` through `'~'`)
//! to a bit-packed bitmap plus fixed per-table metrics. Bitmaps are packed
//! LSB first with bit index `y * glyph_width + x`, 1 = ink. Spare high bits
//! of an entry may carry a per-glyph downward shift ("extra bits"); the
//! rasterizer only walks `glyph_width * glyph_height` bitmap bits, so the
//! spare bits are never read as ink.

mod font3x5;
mod font5x6;

/// Read-only glyph data source consumed by
/// [`TextBlitter`](crate::text::TextBlitter).
pub trait GlyphFont {
    /// Glyph width in pixels, before scaling.
    fn glyph_width(&self) -> usize;

    /// Glyph height in pixels, before scaling. Excludes the descender rows.
    fn glyph_height(&self) -> usize;

    /// Rows reserved below the baseline for shifted glyphs.
    fn descender(&self) -> usize;

    /// Packed bitmap for `ch`. Characters outside `[' ', '~']` yield a blank
    /// bitmap; callers that want visible fallback substitute a space first.
    fn bitmap(&self, ch: char) -> u32;

    /// Downward shift in pixels encoded in a packed glyph's spare bits.
    ///
    /// Table invariant: never exceeds [`descender`](GlyphFont::descender).
    /// The rasterizer's bounds checks rely on it.
    fn extra_bits(&self, glyph: u32) -> usize;
}

/// Built-in 3x5 font: 15 bitmap bits per entry, bit 15 flags a one-pixel
/// downward shift (descender of 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct Font3x5;

impl GlyphFont for Font3x5 {
    fn glyph_width(&self) -> usize {
        3
    }

    fn glyph_height(&self) -> usize {
        5
    }

    fn descender(&self) -> usize {
        1
    }

    fn bitmap(&self, ch: char) -> u32 {
        let index = (ch as usize).wrapping_sub(' ' as usize);
        font3x5::GLYPHS_3X5.get(index).map_or(0, |&g| u32::from(g))
    }

    fn extra_bits(&self, glyph: u32) -> usize {
        ((glyph >> 15) & 1) as usize
    }
}

/// Built-in 5x6 font: 30 bitmap bits per entry, bits 30-31 hold a 0-2 pixel
/// downward shift (descender of 2).
#[derive(Debug, Clone, Copy, Default)]
pub struct Font5x6;

impl GlyphFont for Font5x6 {
    fn glyph_width(&self) -> usize {
        5
    }

    fn glyph_height(&self) -> usize {
        6
    }

    fn descender(&self) -> usize {
        2
    }

    fn bitmap(&self, ch: char) -> u32 {
        let index = (ch as usize).wrapping_sub(' ' as usize);
        font5x6::GLYPHS_5X6.get(index).copied().unwrap_or(0)
    }

    fn extra_bits(&self, glyph: u32) -> usize {
        ((glyph >> 30) & 0b11) as usize
    }
}

// src/text.rs

//! Cursor-driven text layout and rasterization.
//!
//! [`TextBlitter`] walks a string character by character, consults its
//! [`GlyphFont`] for packed bitmaps and metrics, and writes scaled glyph
//! pixels straight into a [`PixelBuffer`]. Control characters steer the
//! cursor: `\n` and `\r` reset the column, `\t` jumps four advances, and
//! backspace steps one advance left. Text past the right edge is either
//! dropped or broken onto a new line depending on [`WrapMode`].

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::font::GlyphFont;

/// Policy for characters whose glyph cell would cross the buffer's right
/// edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapMode {
    /// Drop the character; the line ends at the boundary.
    Clip,
    /// Break the line and draw the character at the start of the next one.
    Wrap,
}

impl Default for WrapMode {
    fn default() -> Self {
        WrapMode::Clip
    }
}

/// Draws strings of packed bitmap glyphs into a pixel buffer.
///
/// The glyph table is injected once and resolved at compile time. The
/// blitter itself carries only layout settings, so a single instance can
/// serve any number of buffers and draw calls.
#[derive(Debug, Clone)]
pub struct TextBlitter<F: GlyphFont> {
    font: F,
    scale: usize,
    wrap: WrapMode,
}

impl<F: GlyphFont> TextBlitter<F> {
    /// Scale 1, [`WrapMode::Clip`].
    pub fn new(font: F) -> Self {
        TextBlitter {
            font,
            scale: 1,
            wrap: WrapMode::default(),
        }
    }

    pub fn with_scale(mut self, scale: usize) -> Self {
        self.set_scale(scale);
        self
    }

    pub fn with_wrap_mode(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn font(&self) -> &F {
        &self.font
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Integer upscale factor applied to every glyph pixel. A scale of 0 is
    /// clamped to 1.
    pub fn set_scale(&mut self, scale: usize) {
        if scale == 0 {
            warn!("font scale 0 clamped to 1");
            self.scale = 1;
        } else {
            self.scale = scale;
        }
    }

    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap
    }

    pub fn set_wrap_mode(&mut self, wrap: WrapMode) {
        self.wrap = wrap;
    }

    /// Width of one scaled glyph in pixels.
    pub fn glyph_width(&self) -> usize {
        self.font.glyph_width() * self.scale
    }

    /// Height of one scaled glyph in pixels, not counting the descender.
    pub fn glyph_height(&self) -> usize {
        self.font.glyph_height() * self.scale
    }

    /// Pixels the cursor moves right per character: one glyph plus one
    /// column of spacing, scaled.
    pub fn glyph_advance(&self) -> usize {
        (self.font.glyph_width() + 1) * self.scale
    }

    /// Pixels the cursor moves down per line: glyph height plus descender
    /// plus one row of spacing, scaled.
    pub fn row_advance(&self) -> usize {
        (self.font.glyph_height() + self.font.descender() + 1) * self.scale
    }

    /// Renders `text` into `buffer` starting at `(start_x, start_y)` and
    /// returns the number of visual lines produced, starting at 1 and
    /// counting every newline, explicit or wrap-induced.
    ///
    /// The call is total: it never fails and never writes out of bounds.
    /// Characters outside `' '..='~'` render as spaces. Negative start
    /// coordinates are legal; characters keep advancing the cursor without
    /// drawing until it comes on screen. Once a character's vertical extent
    /// reaches past the bottom edge the whole call stops, since nothing
    /// below it could be drawn either.
    pub fn draw_text(
        &self,
        buffer: &mut PixelBuffer,
        color: Color,
        start_x: i32,
        start_y: i32,
        text: &str,
    ) -> usize {
        trace!(
            "draw_text: {} bytes at ({}, {}), scale {}, wrap {:?}",
            text.len(),
            start_x,
            start_y,
            self.scale,
            self.wrap
        );

        let width = buffer.width() as i32;
        let height = buffer.height() as i32;
        let advance = self.glyph_advance() as i32;
        let row_advance = self.row_advance() as i32;
        // Full vertical extent of one glyph cell: scaled height plus the
        // descender rows a shifted glyph may reach into.
        let glyph_span = ((self.font.glyph_height() + self.font.descender()) * self.scale) as i32;
        let wrap = self.wrap == WrapMode::Wrap;

        let mut x = start_x;
        let mut y = start_y;
        let mut lines_printed = 1;

        // A wrap-induced line break re-examines the same character on the
        // next pass so it lands at the start of the new line.
        let mut replay: Option<char> = None;
        let mut chars = text.chars();

        loop {
            let mut current = match replay.take().or_else(|| chars.next()) {
                Some(c) => c,
                None => break,
            };

            if y + glyph_span >= height || y >= height {
                // No line at or below this one is drawable.
                break;
            }

            let mut end_x = match current {
                '\n' | '\r' => start_x,
                '\t' => x + 4 * advance,
                '\u{0008}' => x - advance,
                _ => x + advance,
            };
            let past_right_edge = end_x >= width;

            if !past_right_edge || wrap || current == '\n' {
                if past_right_edge && current != '\n' {
                    // Break the line here and draw this character on the
                    // next one.
                    replay = Some(current);
                    current = '\n';
                    end_x = start_x;
                } else if x < 0 || (y < 0 && current != '\n') {
                    // Off-screen cursor: step past the character without
                    // drawing. Newlines still run while only y is negative,
                    // otherwise the row could never come on screen.
                    current = ' ';
                }

                match current {
                    '\r' | '\u{0008}' | '\t' | ' ' => {}
                    '\n' => {
                        y += row_advance;
                        lines_printed += 1;
                    }
                    c => {
                        let printable = if (' '..='~').contains(&c) { c } else { ' ' };
                        self.draw_glyph(buffer, color, x as usize, y as usize, printable);
                    }
                }

                x = end_x;
            }
        }

        lines_printed
    }

    /// Writes one scaled glyph with its top-left corner at `(x, y)`.
    ///
    /// Callers guarantee the cursor is on screen and the glyph cell fits:
    /// `x + (glyph_width+1)*scale <= width` and
    /// `y + (glyph_height+descender)*scale < height`. Together with the
    /// table invariant `extra_bits <= descender` every write below lands in
    /// bounds, so pixels go through the raw slice.
    fn draw_glyph(&self, buffer: &mut PixelBuffer, color: Color, x: usize, y: usize, ch: char) {
        let glyph = self.font.bitmap(ch);
        let glyph_width = self.font.glyph_width();
        let glyph_height = self.font.glyph_height();
        let offset_y = y + self.font.extra_bits(glyph) * self.scale;

        let width = buffer.width();
        let pixels = buffer.as_mut_slice();
        let mut row_start = offset_y * width + x;

        for bit_row in 0..glyph_height {
            for _ in 0..self.scale {
                let mut index = row_start;
                row_start += width;
                for bit_col in 0..glyph_width {
                    if (glyph >> (bit_row * glyph_width + bit_col)) & 1 != 0 {
                        for _ in 0..self.scale {
                            pixels[index] = color;
                            index += 1;
                        }
                    } else {
                        index += self.scale;
                    }
                }
            }
        }
    }
}

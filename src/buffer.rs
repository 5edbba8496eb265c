// src/buffer.rs

//! Row-major CPU pixel storage with bounds-checked access and bulk clear,
//! copy and blend primitives.

use log::trace;

use crate::blend::{blend, BlendFactor};
use crate::color::Color;
use crate::error::{BlitError, Result};
use crate::geom::Rect;

/// A `width x height` surface of [`Color`] pixels.
///
/// Storage is one flat row-major vector of exactly `width * height` entries
/// with the origin at the top-left corner: x grows right, y grows down, and
/// `index = x + y * width`. That convention is shared by every operation
/// here and by the text rasterizer's row advance.
///
/// A buffer is exclusively owned and mutated in place; only `new` and
/// `resize` allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Allocates a buffer filled with [`Color::CLEAR`]. A `width` or
    /// `height` of 0 is legal and yields an empty buffer.
    pub fn new(width: usize, height: usize) -> Self {
        PixelBuffer {
            width,
            height,
            pixels: vec![Color::CLEAR; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of stored pixels, always `width * height`.
    pub fn num_pixels(&self) -> usize {
        self.pixels.len()
    }

    /// Row-major view of the pixel data, e.g. for handing a finished frame
    /// to an upload collaborator.
    pub fn as_slice(&self) -> &[Color] {
        &self.pixels
    }

    /// Mutable row-major view of the pixel data.
    pub fn as_mut_slice(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Reallocates to the new dimensions, discarding all prior content.
    pub fn resize(&mut self, width: usize, height: usize) {
        trace!(
            "resize: {}x{} -> {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        self.width = width;
        self.height = height;
        self.pixels = vec![Color::CLEAR; width * height];
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width {
            return Err(BlitError::XOutOfBounds {
                x,
                width: self.width,
            });
        }
        if y >= self.height {
            return Err(BlitError::YOutOfBounds {
                y,
                height: self.height,
            });
        }
        Ok(x + y * self.width)
    }

    fn check_index(&self, index: usize) -> Result<usize> {
        if index >= self.pixels.len() {
            return Err(BlitError::IndexOutOfBounds {
                index,
                num_pixels: self.pixels.len(),
            });
        }
        Ok(index)
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Color> {
        let index = self.index_of(x, y)?;
        Ok(self.pixels[index])
    }

    pub fn get_pixel_at(&self, index: usize) -> Result<Color> {
        let index = self.check_index(index)?;
        Ok(self.pixels[index])
    }

    /// Overwrites one pixel. O(1), no allocation.
    pub fn set_pixel(&mut self, color: Color, x: usize, y: usize) -> Result<()> {
        let index = self.index_of(x, y)?;
        self.pixels[index] = color;
        Ok(())
    }

    pub fn set_pixel_at(&mut self, color: Color, index: usize) -> Result<()> {
        let index = self.check_index(index)?;
        self.pixels[index] = color;
        Ok(())
    }

    /// Writes `color` blended against the stored pixel; see
    /// [`blend`](crate::blend::blend) for the arithmetic.
    pub fn set_pixel_blended(
        &mut self,
        color: Color,
        x: usize,
        y: usize,
        source_factor: BlendFactor,
        destination_factor: BlendFactor,
    ) -> Result<()> {
        let index = self.index_of(x, y)?;
        self.pixels[index] = blend(color, self.pixels[index], source_factor, destination_factor);
        Ok(())
    }

    pub fn set_pixel_blended_at(
        &mut self,
        color: Color,
        index: usize,
        source_factor: BlendFactor,
        destination_factor: BlendFactor,
    ) -> Result<()> {
        let index = self.check_index(index)?;
        self.pixels[index] = blend(color, self.pixels[index], source_factor, destination_factor);
        Ok(())
    }

    /// Fills every pixel with `color`.
    ///
    /// Doubling fill: slot 0 is written directly, then the already-filled
    /// prefix is copied onto the region right after it, doubling the filled
    /// length each step; the last copy is clipped to the remainder. O(log n)
    /// bulk copies instead of n single writes.
    pub fn clear(&mut self, color: Color) {
        trace!("clear: {}x{} to {:?}", self.width, self.height, color);
        if self.pixels.is_empty() {
            return;
        }
        self.pixels[0] = color;
        let mut filled = 1;
        while filled < self.pixels.len() {
            let count = filled.min(self.pixels.len() - filled);
            let (head, tail) = self.pixels.split_at_mut(filled);
            tail[..count].copy_from_slice(&head[..count]);
            filled += count;
        }
    }

    /// Copies the `source_rect` region of a row-major pixel array into this
    /// buffer at `(target_x, target_y)`.
    ///
    /// `source` is `source_width` wide and `source_height` tall and must
    /// hold exactly `source_width * source_height` pixels. Checked in order,
    /// each failing with the error naming the violated bound: the slice
    /// length, then the rect origin and far edges against the source
    /// dimensions, then the target origin and the copied region's far edges
    /// against this buffer. Nothing is written unless every check passes.
    pub fn copy_from_slice_rect(
        &mut self,
        source: &[Color],
        source_width: usize,
        source_height: usize,
        source_rect: Rect,
        target_x: usize,
        target_y: usize,
    ) -> Result<()> {
        if source.len() != source_width * source_height {
            return Err(BlitError::SourceLengthMismatch {
                len: source.len(),
                expected: source_width * source_height,
            });
        }
        if source_rect.x >= source_width {
            return Err(BlitError::SourceRectX {
                x: source_rect.x,
                source_width,
            });
        }
        if source_rect.y >= source_height {
            return Err(BlitError::SourceRectY {
                y: source_rect.y,
                source_height,
            });
        }
        if source_rect.right() > source_width {
            return Err(BlitError::SourceRectRight {
                right: source_rect.right(),
                source_width,
            });
        }
        if source_rect.bottom() > source_height {
            return Err(BlitError::SourceRectBottom {
                bottom: source_rect.bottom(),
                source_height,
            });
        }
        if target_x >= self.width {
            return Err(BlitError::TargetX {
                target_x,
                width: self.width,
            });
        }
        if target_y >= self.height {
            return Err(BlitError::TargetY {
                target_y,
                height: self.height,
            });
        }
        if target_x + source_rect.width > self.width {
            return Err(BlitError::TargetRight {
                right: target_x + source_rect.width,
                width: self.width,
            });
        }
        if target_y + source_rect.height > self.height {
            return Err(BlitError::TargetBottom {
                bottom: target_y + source_rect.height,
                height: self.height,
            });
        }

        trace!(
            "copy: {}x{} rect at ({}, {}) of {}x{} source -> ({}, {})",
            source_rect.width,
            source_rect.height,
            source_rect.x,
            source_rect.y,
            source_width,
            source_height,
            target_x,
            target_y
        );

        // Fast path: the rect spans full rows of an identically-strided
        // source (the bound checks above then force source_rect.x == 0 and
        // target_x == 0), so the region is one contiguous run in both
        // arrays.
        if source_width == self.width && source_rect.width == self.width {
            let count = source_rect.height * self.width;
            let src_start = source_rect.y * source_width;
            let dst_start = target_y * self.width;
            self.pixels[dst_start..dst_start + count]
                .copy_from_slice(&source[src_start..src_start + count]);
            return Ok(());
        }

        // Strides differ: one contiguous copy per row.
        for row in 0..source_rect.height {
            let src_start = (source_rect.y + row) * source_width + source_rect.x;
            let dst_start = (target_y + row) * self.width + target_x;
            self.pixels[dst_start..dst_start + source_rect.width]
                .copy_from_slice(&source[src_start..src_start + source_rect.width]);
        }
        Ok(())
    }

    /// Copies the `source_rect` region of another buffer into this one.
    pub fn copy_from_buffer_rect(
        &mut self,
        source: &PixelBuffer,
        source_rect: Rect,
        target_x: usize,
        target_y: usize,
    ) -> Result<()> {
        self.copy_from_slice_rect(
            source.as_slice(),
            source.width,
            source.height,
            source_rect,
            target_x,
            target_y,
        )
    }

    /// Copies all of `source` into this buffer at `(target_x, target_y)`.
    pub fn copy_from_buffer(
        &mut self,
        source: &PixelBuffer,
        target_x: usize,
        target_y: usize,
    ) -> Result<()> {
        self.copy_from_buffer_rect(
            source,
            Rect::new(0, 0, source.width, source.height),
            target_x,
            target_y,
        )
    }

    /// Replaces the whole contents from a slice of exactly
    /// `width * height` pixels.
    pub fn copy_from_slice_exact(&mut self, source: &[Color]) -> Result<()> {
        if source.len() != self.pixels.len() {
            return Err(BlitError::SourceLengthMismatch {
                len: source.len(),
                expected: self.pixels.len(),
            });
        }
        self.pixels.copy_from_slice(source);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(width: usize, height: usize, color: Color) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height);
        buffer.clear(color);
        buffer
    }

    /// Source buffer where every pixel encodes its own coordinates.
    fn coordinate_pattern(width: usize, height: usize) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                buffer
                    .set_pixel(Color::new(x as u8, y as u8, 0, 255), x, y)
                    .unwrap();
            }
        }
        buffer
    }

    #[test]
    fn num_pixels_tracks_dimensions() {
        assert_eq!(PixelBuffer::new(4, 3).num_pixels(), 12);
        assert_eq!(PixelBuffer::new(0, 5).num_pixels(), 0);
        assert_eq!(PixelBuffer::new(5, 0).num_pixels(), 0);
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.resize(7, 3);
        assert_eq!(buffer.num_pixels(), 21);
    }

    #[test]
    fn set_get_round_trip() {
        let mut buffer = PixelBuffer::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                let color = Color::new(x as u8, y as u8, 7, 255);
                buffer.set_pixel(color, x, y).unwrap();
                assert_eq!(buffer.get_pixel(x, y).unwrap(), color);
            }
        }
    }

    #[test]
    fn coordinate_errors_name_the_bound() {
        let mut buffer = PixelBuffer::new(4, 3);
        assert_eq!(
            buffer.set_pixel(Color::WHITE, 4, 0),
            Err(BlitError::XOutOfBounds { x: 4, width: 4 })
        );
        assert_eq!(
            buffer.set_pixel(Color::WHITE, 0, 3),
            Err(BlitError::YOutOfBounds { y: 3, height: 3 })
        );
        assert_eq!(
            buffer.get_pixel(9, 0),
            Err(BlitError::XOutOfBounds { x: 9, width: 4 })
        );
        // x is validated before y, matching the error a caller observes when
        // both are out of range.
        assert_eq!(
            buffer.get_pixel(5, 5),
            Err(BlitError::XOutOfBounds { x: 5, width: 4 })
        );
    }

    #[test]
    fn index_overloads_round_trip_and_bound() {
        let mut buffer = PixelBuffer::new(3, 2);
        buffer.set_pixel_at(Color::RED, 5).unwrap();
        assert_eq!(buffer.get_pixel_at(5).unwrap(), Color::RED);
        // index = x + y * width
        assert_eq!(buffer.get_pixel(2, 1).unwrap(), Color::RED);
        assert_eq!(
            buffer.set_pixel_at(Color::RED, 6),
            Err(BlitError::IndexOutOfBounds {
                index: 6,
                num_pixels: 6
            })
        );
        assert_eq!(
            buffer.get_pixel_at(100),
            Err(BlitError::IndexOutOfBounds {
                index: 100,
                num_pixels: 6
            })
        );
    }

    #[test]
    fn clear_fills_every_pixel() {
        // Sizes chosen to exercise the doubling fill: empty, single,
        // non-power-of-two (final clipped block) and power-of-two.
        for (width, height) in [(0, 3), (1, 1), (7, 1), (32, 32)] {
            let mut buffer = PixelBuffer::new(width, height);
            buffer.clear(Color::CYAN);
            assert!(buffer.as_slice().iter().all(|&p| p == Color::CYAN));
            // A second clear must fully overwrite the first.
            buffer.clear(Color::YELLOW);
            assert!(buffer.as_slice().iter().all(|&p| p == Color::YELLOW));
        }
    }

    #[test]
    fn resize_discards_contents() {
        let mut buffer = filled(4, 4, Color::GREEN);
        buffer.resize(2, 5);
        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 5);
        assert!(buffer.as_slice().iter().all(|&p| p == Color::CLEAR));
    }

    #[test]
    fn full_buffer_copy_reproduces_source() {
        let source = coordinate_pattern(6, 4);
        let mut target = PixelBuffer::new(6, 4);
        target.copy_from_buffer(&source, 0, 0).unwrap();
        assert_eq!(target.as_slice(), source.as_slice());
    }

    #[test]
    fn subrect_copy_lands_at_target() {
        let source = coordinate_pattern(5, 5);
        let mut target = filled(7, 6, Color::BLACK);
        target
            .copy_from_buffer_rect(&source, Rect::new(1, 2, 2, 2), 3, 2)
            .unwrap();
        // The 2x2 block from source (1,2) sits at target (3,2).
        assert_eq!(target.get_pixel(3, 2).unwrap(), Color::new(1, 2, 0, 255));
        assert_eq!(target.get_pixel(4, 2).unwrap(), Color::new(2, 2, 0, 255));
        assert_eq!(target.get_pixel(3, 3).unwrap(), Color::new(1, 3, 0, 255));
        assert_eq!(target.get_pixel(4, 3).unwrap(), Color::new(2, 3, 0, 255));
        // Neighbors untouched.
        assert_eq!(target.get_pixel(2, 2).unwrap(), Color::BLACK);
        assert_eq!(target.get_pixel(5, 2).unwrap(), Color::BLACK);
        assert_eq!(target.get_pixel(3, 4).unwrap(), Color::BLACK);
    }

    #[test]
    fn copy_flush_with_the_edge_succeeds_one_past_fails() {
        let source = coordinate_pattern(4, 4);
        let mut target = PixelBuffer::new(8, 8);
        // target_x + width == 8: flush with the right edge.
        target
            .copy_from_buffer_rect(&source, Rect::new(0, 0, 2, 2), 6, 0)
            .unwrap();
        assert_eq!(
            target.copy_from_buffer_rect(&source, Rect::new(0, 0, 2, 2), 7, 0),
            Err(BlitError::TargetRight { right: 9, width: 8 })
        );
        assert_eq!(
            target.copy_from_buffer_rect(&source, Rect::new(0, 0, 2, 2), 0, 7),
            Err(BlitError::TargetBottom {
                bottom: 9,
                height: 8
            })
        );
    }

    #[test]
    fn failed_copy_leaves_target_untouched() {
        let source = coordinate_pattern(4, 4);
        let mut target = filled(8, 8, Color::MAGENTA);
        let before = target.clone();
        assert!(target
            .copy_from_buffer_rect(&source, Rect::new(0, 0, 2, 2), 7, 0)
            .is_err());
        assert_eq!(target, before);
    }

    #[test]
    fn copy_validation_order() {
        let source = coordinate_pattern(4, 4);
        let mut target = PixelBuffer::new(2, 2);
        // Rect origin is checked before the rect's far edges and before any
        // target bound, even when several constraints are violated at once.
        assert_eq!(
            target.copy_from_buffer_rect(&source, Rect::new(4, 9, 3, 3), 5, 5),
            Err(BlitError::SourceRectX {
                x: 4,
                source_width: 4
            })
        );
        assert_eq!(
            target.copy_from_buffer_rect(&source, Rect::new(0, 9, 3, 3), 5, 5),
            Err(BlitError::SourceRectY {
                y: 9,
                source_height: 4
            })
        );
        assert_eq!(
            target.copy_from_buffer_rect(&source, Rect::new(2, 0, 3, 3), 5, 5),
            Err(BlitError::SourceRectRight {
                right: 5,
                source_width: 4
            })
        );
        assert_eq!(
            target.copy_from_buffer_rect(&source, Rect::new(0, 2, 3, 3), 5, 5),
            Err(BlitError::SourceRectBottom {
                bottom: 5,
                source_height: 4
            })
        );
        assert_eq!(
            target.copy_from_buffer_rect(&source, Rect::new(0, 0, 2, 2), 5, 5),
            Err(BlitError::TargetX {
                target_x: 5,
                width: 2
            })
        );
        assert_eq!(
            target.copy_from_buffer_rect(&source, Rect::new(0, 0, 2, 2), 0, 5),
            Err(BlitError::TargetY {
                target_y: 5,
                height: 2
            })
        );
    }

    #[test]
    fn fast_path_copies_only_the_requested_rows() {
        // Full-row rect of an identically-strided source: the single bulk
        // copy must start at the rect's row and span only the rect's rows.
        let mut source = PixelBuffer::new(4, 5);
        for y in 0..5 {
            for x in 0..4 {
                source.set_pixel(Color::new(y as u8, 0, 0, 255), x, y).unwrap();
            }
        }
        let mut target = filled(4, 3, Color::MAGENTA);
        target
            .copy_from_buffer_rect(&source, Rect::new(0, 1, 4, 2), 0, 0)
            .unwrap();
        for x in 0..4 {
            assert_eq!(target.get_pixel(x, 0).unwrap(), Color::new(1, 0, 0, 255));
            assert_eq!(target.get_pixel(x, 1).unwrap(), Color::new(2, 0, 0, 255));
            // The row below the copied region keeps its old contents.
            assert_eq!(target.get_pixel(x, 2).unwrap(), Color::MAGENTA);
        }
    }

    #[test]
    fn raw_slice_copy_checks_length_first() {
        let mut target = PixelBuffer::new(4, 4);
        let short = vec![Color::WHITE; 7];
        assert_eq!(
            target.copy_from_slice_rect(&short, 4, 2, Rect::new(9, 9, 9, 9), 9, 9),
            Err(BlitError::SourceLengthMismatch {
                len: 7,
                expected: 8
            })
        );
    }

    #[test]
    fn copy_from_slice_exact_requires_exact_length() {
        let mut target = PixelBuffer::new(2, 2);
        let source = vec![Color::BLUE; 4];
        target.copy_from_slice_exact(&source).unwrap();
        assert!(target.as_slice().iter().all(|&p| p == Color::BLUE));
        assert_eq!(
            target.copy_from_slice_exact(&vec![Color::BLUE; 5]),
            Err(BlitError::SourceLengthMismatch {
                len: 5,
                expected: 4
            })
        );
    }

    #[test]
    fn blended_set_identities() {
        let mut buffer = filled(2, 2, Color::new(10, 20, 30, 40));
        let incoming = Color::new(200, 150, 100, 50);
        buffer
            .set_pixel_blended(incoming, 0, 0, BlendFactor::One, BlendFactor::Zero)
            .unwrap();
        assert_eq!(buffer.get_pixel(0, 0).unwrap(), incoming);
        buffer
            .set_pixel_blended(incoming, 1, 1, BlendFactor::Zero, BlendFactor::One)
            .unwrap();
        assert_eq!(buffer.get_pixel(1, 1).unwrap(), Color::new(10, 20, 30, 40));
        assert!(buffer
            .set_pixel_blended(incoming, 2, 0, BlendFactor::One, BlendFactor::Zero)
            .is_err());
    }

    #[test]
    fn blended_set_saturates_per_channel() {
        let mut buffer = filled(1, 1, Color::new(200, 1, 0, 255));
        buffer
            .set_pixel_blended_at(
                Color::new(100, 1, 3, 0),
                0,
                BlendFactor::One,
                BlendFactor::One,
            )
            .unwrap();
        // 100+200 saturates, 1+1 and 3+0 do not, 0+255 stays exact.
        assert_eq!(buffer.get_pixel_at(0).unwrap(), Color::new(255, 2, 3, 255));
    }

    #[test]
    fn single_red_pixel_on_black() {
        let mut buffer = filled(10, 10, Color::BLACK);
        buffer.set_pixel(Color::RED, 5, 5).unwrap();
        for y in 0..10 {
            for x in 0..10 {
                let expected = if (x, y) == (5, 5) {
                    Color::RED
                } else {
                    Color::BLACK
                };
                assert_eq!(buffer.get_pixel(x, y).unwrap(), expected);
            }
        }
    }
}

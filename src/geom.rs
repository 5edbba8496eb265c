// src/geom.rs

//! Axis-aligned integer rectangle used to address sub-regions of a buffer.

use serde::{Deserialize, Serialize};

/// A sub-region of a pixel array: origin plus extent, in pixels.
///
/// `Rect` itself enforces nothing; the operation it is applied to validates
/// it against the array it addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column covered by the rect.
    pub const fn right(&self) -> usize {
        self.x + self.width
    }

    /// One past the bottom row covered by the rect.
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }
}

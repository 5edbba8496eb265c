// src/lib.rs

//! # softblit
//!
//! A CPU-side pixel framebuffer with a packed-bitmap text rasterizer.
//!
//! [`PixelBuffer`] owns a row-major `width x height` array of [`Color`]s
//! with the origin at the top-left corner (x right, y down) and offers
//! bounds-checked access, blended writes, an O(log n) doubling clear and
//! row-aware bulk copies. [`TextBlitter`] draws integer-scaled text into a
//! buffer from either built-in face, the 3x5 [`Font3x5`] or the 5x6
//! [`Font5x6`], with clip or wrap behavior at the right edge. Finished
//! frames leave the crate through the [`PresentSink`] boundary.
//!
//! # Example
//!
//! ```rust
//! use softblit::{Color, Font5x6, PixelBuffer, TextBlitter};
//!
//! let mut frame = PixelBuffer::new(160, 24);
//! frame.clear(Color::BLACK);
//!
//! let text = TextBlitter::new(Font5x6).with_scale(2);
//! let lines = text.draw_text(&mut frame, Color::GREEN, 4, 4, "hello, world");
//! assert_eq!(lines, 1);
//! ```

pub mod blend;
pub mod buffer;
pub mod color;
pub mod error;
pub mod font;
pub mod geom;
pub mod present;
pub mod text;

pub use blend::{blend, BlendFactor};
pub use buffer::PixelBuffer;
pub use color::{Color, ColorF};
pub use error::{BlitError, Result};
pub use font::{Font3x5, Font5x6, GlyphFont};
pub use geom::Rect;
pub use present::{OutputHandle, PresentSink};
pub use text::{TextBlitter, WrapMode};

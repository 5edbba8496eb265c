// src/error.rs

//! Error type for buffer operations.
//!
//! Every failure in this crate is a precondition violation: a coordinate,
//! index, rectangle or slice length that does not fit the buffer it is
//! applied to. Each variant names the offending argument and the bound it
//! violated so callers can log the message as-is.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlitError {
    #[error("x ({x}) must be less than the buffer width ({width})")]
    XOutOfBounds { x: usize, width: usize },
    #[error("y ({y}) must be less than the buffer height ({height})")]
    YOutOfBounds { y: usize, height: usize },
    #[error("pixel index ({index}) must be less than the pixel count ({num_pixels})")]
    IndexOutOfBounds { index: usize, num_pixels: usize },
    #[error("source rect x ({x}) must be less than the source width ({source_width})")]
    SourceRectX { x: usize, source_width: usize },
    #[error("source rect y ({y}) must be less than the source height ({source_height})")]
    SourceRectY { y: usize, source_height: usize },
    #[error("source rect right edge ({right}) must not exceed the source width ({source_width})")]
    SourceRectRight { right: usize, source_width: usize },
    #[error(
        "source rect bottom edge ({bottom}) must not exceed the source height ({source_height})"
    )]
    SourceRectBottom { bottom: usize, source_height: usize },
    #[error("target x ({target_x}) must be less than the buffer width ({width})")]
    TargetX { target_x: usize, width: usize },
    #[error("target y ({target_y}) must be less than the buffer height ({height})")]
    TargetY { target_y: usize, height: usize },
    #[error("copied region right edge ({right}) must not exceed the buffer width ({width})")]
    TargetRight { right: usize, width: usize },
    #[error("copied region bottom edge ({bottom}) must not exceed the buffer height ({height})")]
    TargetBottom { bottom: usize, height: usize },
    #[error("source slice holds {len} pixels but {expected} (width * height) were expected")]
    SourceLengthMismatch { len: usize, expected: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BlitError>;

// src/present.rs

//! Boundary between finished frames and whatever displays or uploads them.
//!
//! The crate renders into [`PixelBuffer`]s and hands them off through
//! [`PresentSink`]; the hosting side owns windows, textures and swapchains
//! and identifies each destination by an opaque [`OutputHandle`].

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;

/// Opaque identifier for one render output owned by the hosting side.
///
/// Handles are compared by value and carry no lifetime; `next()` hands out
/// process-wide unique ids starting at 1, leaving 0 as the reserved
/// [`INVALID`](OutputHandle::INVALID) sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutputHandle(u32);

static NEXT_HANDLE: AtomicU32 = AtomicU32::new(1);

impl OutputHandle {
    /// The reserved never-allocated handle.
    pub const INVALID: OutputHandle = OutputHandle(0);

    /// Allocates a fresh unique handle. Safe to call from any thread.
    pub fn next() -> OutputHandle {
        OutputHandle(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl Default for OutputHandle {
    fn default() -> Self {
        OutputHandle::INVALID
    }
}

impl fmt::Display for OutputHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "output#{}", self.0)
    }
}

/// Implemented by the hosting engine; the rendering side calls it to manage
/// output surfaces and deliver finished frames.
///
/// All methods are fire-and-forget from the caller's perspective; a sink
/// that wants to reject a frame does so on its own side of the boundary.
pub trait PresentSink {
    /// Registers a named output surface and returns its handle.
    fn create_output(&mut self, name: &str) -> OutputHandle;

    /// Releases the output; the handle must not be presented to again.
    fn destroy_output(&mut self, handle: OutputHandle);

    /// Drops any frame the output is still holding, e.g. across a resize.
    fn reset_output(&mut self, handle: OutputHandle);

    /// Delivers one finished frame for the given output. The buffer is
    /// borrowed for the duration of the call only; sinks that need the
    /// pixels afterwards copy them out.
    fn frame_ready(&mut self, target: OutputHandle, frame: &PixelBuffer);
}

//! Pixelweave drives arrays of addressable LEDs spread across heterogeneous
//! hardware buses as one logically contiguous strand, overlays 2D row/column
//! grids onto arbitrary (including zig-zag) physical wiring, and replays
//! decoded video as grid animations.
//!
//! # Pipeline overview
//!
//! 1. **Sink**: hardware drivers (or [`MemoryStrand`]) expose the
//!    [`PixelSink`] capability: set-by-index, read-back, flush.
//! 2. **Compose**: [`CompositeStrand`] concatenates several sinks into one
//!    index space.
//! 3. **Map**: [`PixelGrid`] resolves `(row, column)` coordinates onto
//!    strand indices once, at construction, from a [`Segment`] list.
//! 4. **Replay**: [`AnimationPlayer`] decodes a source fully into a
//!    [`FrameBuffer`] and streams it to the grid, one flush per frame.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Degrade, never abort**: out-of-range writes drop silently, failed
//!   loads play black. A live display should go dark in places, not crash.
//! - **No IO during playback**: sources are decoded fully up front;
//!   playback is pure buffer copying plus flushes.
//! - **Single writer**: no internal locking; the host serializes access to
//!   a grid/strand itself.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;
mod grid;
mod layout;
mod media;
mod playback;
mod strand;

/// Strand test-pattern animations (wipes, chases, rainbows).
pub mod effects;

pub use foundation::color::{BLACK, Color, colors, colors_from_rgb, colors_from_rgba};
pub use foundation::core::{Fps, Shape};
pub use foundation::error::{WeaveError, WeaveResult};
pub use grid::PixelGrid;
pub use grid::segment::Segment;
pub use layout::LayoutConfig;
pub use media::ffmpeg::probe_video;
pub use media::{DecodedAnimation, SourceInfo, decode_animation};
pub use playback::buffer::FrameBuffer;
pub use playback::player::AnimationPlayer;
pub use strand::composite::CompositeStrand;
pub use strand::memory::MemoryStrand;
pub use strand::smart::SmartLedStrand;
pub use strand::PixelSink;

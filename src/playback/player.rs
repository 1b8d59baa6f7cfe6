use std::path::Path;
use std::time::Duration;

use crate::foundation::core::{Fps, Shape};
use crate::grid::PixelGrid;
use crate::media::{self, DecodedAnimation};
use crate::playback::buffer::FrameBuffer;
use crate::strand::PixelSink;

/// Replays a decoded animation onto a grid, one flush per frame.
///
/// The player borrows its target grid for its whole lifetime: ownership of
/// the grid stays with the caller, and nothing else can write to it while a
/// player exists. Loading decodes the entire source into a [`FrameBuffer`]
/// sized to the grid's shape; playback is then pure buffer copying.
///
/// Playback is synchronous and non-preemptible: `play` returns only after
/// the last frame has been flushed. A host that wants to interrupt a long
/// animation must simply not start it.
#[derive(Debug)]
pub struct AnimationPlayer<'g, S: PixelSink> {
    grid: &'g mut PixelGrid<S>,
    buffer: FrameBuffer,
    source_fps: Option<Fps>,
}

impl<'g, S: PixelSink> AnimationPlayer<'g, S> {
    /// Decode `source` and build a player for `grid`, best-effort.
    ///
    /// A source that fails to open or decode is reported through the
    /// diagnostic log and degrades to an empty frame buffer: the player is
    /// still valid, and [`play`](Self::play) becomes a no-op. Callers must
    /// not assume a successful-looking construction implies a non-empty
    /// buffer.
    pub fn load(grid: &'g mut PixelGrid<S>, source: impl AsRef<Path>) -> Self {
        let source = source.as_ref();
        match media::decode_animation(source) {
            Ok(anim) => Self::from_animation(grid, &anim),
            Err(err) => {
                tracing::error!(
                    source = %source.display(),
                    %err,
                    "animation load failed; playback will be empty"
                );
                let shape = grid.shape();
                Self {
                    grid,
                    buffer: FrameBuffer::zeroed(0, shape),
                    source_fps: None,
                }
            }
        }
    }

    /// Build a player from an already decoded animation.
    pub fn from_animation(grid: &'g mut PixelGrid<S>, anim: &DecodedAnimation) -> Self {
        let mut buffer = FrameBuffer::zeroed(anim.frames.len(), grid.shape());
        buffer.copy_frames(anim);
        Self {
            grid,
            buffer,
            source_fps: anim.info.fps,
        }
    }

    /// Number of frames ready to play.
    pub fn frame_count(&self) -> usize {
        self.buffer.frame_count()
    }

    /// Shape of the target grid (and of each buffered frame).
    pub fn shape(&self) -> Shape {
        self.grid.shape()
    }

    /// Play every buffered frame in order, blocking until done.
    ///
    /// Each frame writes all of its cells to the grid, then flushes exactly
    /// once; batching the writes behind a single flush is what keeps
    /// playback tear-free. With `frame_delay` set, the player sleeps that
    /// long after each flush; otherwise frames go out as fast as the
    /// write/flush path allows.
    pub fn play(&mut self, frame_delay: Option<Duration>) {
        for frame in 0..self.buffer.frame_count() {
            for row in 0..self.buffer.rows() {
                for column in 0..self.buffer.cols() {
                    self.grid
                        .set_cell(row, column, self.buffer.get(frame, row, column));
                }
            }
            self.grid.show();
            if let Some(delay) = frame_delay {
                std::thread::sleep(delay);
            }
        }
    }

    /// Play at the source's native frame rate, when the source reported one;
    /// unpaced otherwise.
    pub fn play_paced(&mut self) {
        self.play(self.source_fps.map(Fps::frame_duration));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/player.rs"]
mod tests;

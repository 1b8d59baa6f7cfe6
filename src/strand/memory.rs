use crate::foundation::color::{BLACK, Color};
use crate::strand::PixelSink;

/// A strand backed by plain memory, with an explicit latched copy.
///
/// `set_pixel` stages into a working buffer; [`show`](PixelSink::show)
/// snapshots the working buffer into the latched one, the way a hardware
/// strand latches its shift registers. Useful as a simulation target and as
/// the reference implementation of the sink contract in tests.
#[derive(Clone, Debug)]
pub struct MemoryStrand {
    staged: Vec<Color>,
    shown: Vec<Color>,
}

impl MemoryStrand {
    /// Create a strand of `len` pixels, all black.
    pub fn new(len: usize) -> Self {
        Self {
            staged: vec![BLACK; len],
            shown: vec![BLACK; len],
        }
    }

    /// The staged (not yet shown) pixel colors.
    pub fn staged(&self) -> &[Color] {
        &self.staged
    }

    /// The pixel colors as of the last [`show`](PixelSink::show).
    pub fn shown(&self) -> &[Color] {
        &self.shown
    }
}

impl PixelSink for MemoryStrand {
    fn len(&self) -> usize {
        self.staged.len()
    }

    fn begin(&mut self) {
        self.staged.fill(BLACK);
        self.show();
    }

    fn show(&mut self) {
        self.shown.copy_from_slice(&self.staged);
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        if let Some(px) = self.staged.get_mut(index) {
            *px = color;
        }
    }

    fn pixel(&self, index: usize) -> Color {
        self.staged.get(index).copied().unwrap_or(BLACK)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strand/memory.rs"]
mod tests;

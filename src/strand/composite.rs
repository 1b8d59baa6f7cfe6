use crate::foundation::color::{BLACK, Color};
use crate::strand::PixelSink;

/// Several physical strands concatenated into one logical index space.
///
/// Child `k` owns the index range `[starts[k], starts[k] + len_k)`, where
/// `starts` are cumulative child lengths in construction order. A write is
/// mirrored to exactly one child at the corresponding local index; reads are
/// answered from a composite-level cache, never from hardware.
pub struct CompositeStrand {
    children: Vec<Box<dyn PixelSink>>,
    starts: Vec<usize>,
    cache: Vec<Color>,
}

impl CompositeStrand {
    /// Concatenate `children` in order. Construction never fails; zero
    /// children yield a zero-length strand.
    pub fn new(children: Vec<Box<dyn PixelSink>>) -> Self {
        let mut starts = Vec::with_capacity(children.len());
        let mut total = 0usize;
        for child in &children {
            starts.push(total);
            total += child.len();
        }
        Self {
            children,
            starts,
            cache: vec![BLACK; total],
        }
    }

    /// Number of child strands.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Map a composite index to `(child, local_index)`.
    fn locate(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.cache.len() {
            return None;
        }
        // Last child whose start is <= index. Zero-length children share a
        // start with their successor and can never win this search.
        let child = self.starts.partition_point(|&start| start <= index) - 1;
        Some((child, index - self.starts[child]))
    }
}

impl PixelSink for CompositeStrand {
    fn len(&self) -> usize {
        self.cache.len()
    }

    fn begin(&mut self) {
        for child in &mut self.children {
            child.begin();
        }
        self.show();
    }

    fn show(&mut self) {
        // Sequential and blocking, in construction order. The buses are
        // physically independent, so no cross-child ordering is promised
        // beyond "every child has flushed by the time this returns".
        for child in &mut self.children {
            child.show();
        }
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        let Some((child, local)) = self.locate(index) else {
            return;
        };
        self.cache[index] = color;
        self.children[child].set_pixel(local, color);
    }

    fn pixel(&self, index: usize) -> Color {
        self.cache.get(index).copied().unwrap_or(BLACK)
    }
}

impl std::fmt::Debug for CompositeStrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeStrand")
            .field("children", &self.children.len())
            .field("len", &self.cache.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strand/composite.rs"]
mod tests;

use rayon::prelude::*;

use crate::foundation::color::{BLACK, Color};
use crate::foundation::core::Shape;
use crate::media::DecodedAnimation;

/// A time-indexed `[frame][row][column]` color buffer sized to a grid shape.
///
/// Allocated zeroed (all black) and filled by [`copy_frames`](Self::copy_frames)
/// with asymmetric clipping: source pixels outside the buffer are ignored,
/// and buffer cells the source never covers stay black. Playback then reads
/// every cell of every frame, so uncovered cells are driven to black rather
/// than left at their pre-play state.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    frame_count: usize,
    rows: usize,
    cols: usize,
    data: Vec<Color>,
}

impl FrameBuffer {
    /// Allocate an all-black buffer of `frame_count` frames shaped `shape`.
    pub fn zeroed(frame_count: usize, shape: Shape) -> Self {
        Self {
            frame_count,
            rows: shape.rows,
            cols: shape.max_width,
            data: vec![BLACK; frame_count * shape.cell_count()],
        }
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Rows per frame.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Columns per row.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Color at `(frame, row, column)`; black when out of bounds.
    pub fn get(&self, frame: usize, row: usize, column: usize) -> Color {
        if frame >= self.frame_count || row >= self.rows || column >= self.cols {
            return BLACK;
        }
        self.data[(frame * self.rows + row) * self.cols + column]
    }

    /// Copy decoded frames into the buffer, clipping asymmetrically.
    ///
    /// For each frame present in both: rows `0..min(rows, src_height)` and
    /// columns `0..min(cols, src_width)` are copied from the same position.
    /// Extra source rows/columns/frames never land anywhere; buffer regions
    /// beyond the source stay black.
    pub fn copy_frames(&mut self, anim: &DecodedAnimation) {
        let frame_cells = self.rows * self.cols;
        if frame_cells == 0 {
            return;
        }
        let src_w = anim.info.width as usize;
        let src_h = anim.info.height as usize;
        let cols = self.cols;
        let copy_rows = self.rows.min(src_h);
        let copy_cols = cols.min(src_w);

        self.data
            .par_chunks_mut(frame_cells)
            .zip(anim.frames.par_iter())
            .for_each(|(dst, src)| {
                for row in 0..copy_rows {
                    for col in 0..copy_cols {
                        // A frame shorter than its declared dimensions just
                        // leaves the remainder black.
                        if let Some(&px) = src.get(row * src_w + col) {
                            dst[row * cols + col] = px;
                        }
                    }
                }
            });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/buffer.rs"]
mod tests;

/// Strand index a cell resolves to when its walk leaves the strand entirely.
///
/// No sink can contain this index, so the drop policy turns such cells into
/// permanently dark no-ops instead of a crash.
pub(crate) const UNWIRED: usize = usize::MAX;

/// Specification of one grid row: a starting strand index plus a signed run.
///
/// The sign of `len` picks the walk direction along the underlying strand
/// (positive forward, negative backward); `len.abs()` is the row's column
/// count. `(10, 5)` resolves to indices `10..=14`; `(14, -5)` resolves to
/// `14, 13, 12, 11, 10`. Zig-zag wiring alternates signs row by row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// Strand index of the row's first column.
    pub start: usize,
    /// Signed run length; must be non-zero.
    pub len: i32,
}

impl Segment {
    /// Build a segment. `len == 0` is accepted and resolves to an empty row.
    pub fn new(start: usize, len: i32) -> Self {
        Self { start, len }
    }

    /// Column count of the row this segment describes.
    pub fn width(self) -> usize {
        self.len.unsigned_abs() as usize
    }

    /// Resolve every column to a concrete strand index, walking from `start`
    /// in the segment's direction.
    ///
    /// A walk that leaves the strand's index space (backward past zero, or
    /// forward past `usize::MAX`) resolves the remaining cells to
    /// [`UNWIRED`]; writes to those cells are silently dropped downstream.
    pub(crate) fn resolve(self) -> Vec<usize> {
        let width = self.width();
        let backward = self.len < 0;
        (0..width)
            .map(|step| {
                if backward {
                    self.start.checked_sub(step).unwrap_or(UNWIRED)
                } else {
                    self.start.checked_add(step).unwrap_or(UNWIRED)
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/segment.rs"]
mod tests;

use std::time::Duration;

use crate::foundation::error::{WeaveError, WeaveResult};

/// Nominal shape of a grid: row count and the widest row's column count.
///
/// Rows narrower than `max_width` simply have trailing cells that are never
/// addressed; consumers (notably the animation player) size their buffers
/// from this shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    /// Number of rows.
    pub rows: usize,
    /// Column count of the widest row.
    pub max_width: usize,
}

impl Shape {
    /// Total cell count of a `rows x max_width` buffer.
    pub fn cell_count(self) -> usize {
        self.rows * self.max_width
    }
}

/// Rational frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Frames.
    pub num: u32,
    /// Per seconds; must be > 0.
    pub den: u32,
}

impl Fps {
    /// Validated constructor; both terms must be non-zero.
    pub fn new(num: u32, den: u32) -> WeaveResult<Self> {
        if num == 0 {
            return Err(WeaveError::validation("Fps num must be > 0"));
        }
        if den == 0 {
            return Err(WeaveError::validation("Fps den must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Wall-clock duration of a single frame.
    pub fn frame_duration(self) -> Duration {
        Duration::from_secs_f64(f64::from(self.den) / f64::from(self.num))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

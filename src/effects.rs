//! Strand test-pattern animations.
//!
//! Small, self-contained effects that exercise any [`PixelSink`] directly,
//! with no grid or media involvement. All pacing is explicit: pass
//! [`Duration::ZERO`] to run a pattern as fast as the flush path allows.

use std::time::Duration;

use crate::foundation::color::{BLACK, Color};
use crate::strand::PixelSink;

fn step(strand: &mut impl PixelSink, wait: Duration) {
    strand.show();
    if !wait.is_zero() {
        std::thread::sleep(wait);
    }
}

/// Wipe `color` across the strand one pixel at a time.
pub fn color_wipe<S: PixelSink>(strand: &mut S, color: Color, wait: Duration) {
    for i in 0..strand.len() {
        strand.set_pixel(i, color);
        step(strand, wait);
    }
}

/// Movie-theater marquee chaser: every third pixel lit, walking one step per
/// tick.
pub fn theater_chase<S: PixelSink>(
    strand: &mut S,
    color: Color,
    wait: Duration,
    iterations: usize,
) {
    for _ in 0..iterations {
        for q in 0..3 {
            // Writes past the end fall under the sink's drop policy.
            for i in (0..strand.len()).step_by(3) {
                strand.set_pixel(i + q, color);
            }
            step(strand, wait);
            for i in (0..strand.len()).step_by(3) {
                strand.set_pixel(i + q, BLACK);
            }
        }
    }
}

/// Map a position on a 0..=255 wheel to a rainbow color.
pub fn wheel(pos: u8) -> Color {
    let pos = u16::from(pos);
    if pos < 85 {
        Color::new((pos * 3) as u8, (255 - pos * 3) as u8, 0)
    } else if pos < 170 {
        let pos = pos - 85;
        Color::new((255 - pos * 3) as u8, 0, (pos * 3) as u8)
    } else {
        let pos = pos - 170;
        Color::new(0, (pos * 3) as u8, (255 - pos * 3) as u8)
    }
}

/// Rainbow that fades across all pixels at once.
pub fn rainbow<S: PixelSink>(strand: &mut S, wait: Duration, iterations: usize) {
    for j in 0..256 * iterations {
        for i in 0..strand.len() {
            strand.set_pixel(i, wheel(((i + j) % 255) as u8));
        }
        step(strand, wait);
    }
}

/// Rainbow that distributes one full wheel revolution across the strand.
pub fn rainbow_cycle<S: PixelSink>(strand: &mut S, wait: Duration, iterations: usize) {
    let len = strand.len();
    if len == 0 {
        return;
    }
    for j in 0..256 * iterations {
        for i in 0..len {
            strand.set_pixel(i, wheel(((i * 256 / len + j) % 255) as u8));
        }
        step(strand, wait);
    }
}

/// Theater chase with rainbow-wheel colors.
pub fn theater_chase_rainbow<S: PixelSink>(strand: &mut S, wait: Duration) {
    for j in 0..256 {
        for q in 0..3 {
            for i in (0..strand.len()).step_by(3) {
                strand.set_pixel(i + q, wheel(((i + j) % 255) as u8));
            }
            step(strand, wait);
            for i in (0..strand.len()).step_by(3) {
                strand.set_pixel(i + q, BLACK);
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/effects.rs"]
mod tests;

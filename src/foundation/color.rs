//! Pixel color type and decode-boundary conversions.
//!
//! The canonical channel order everywhere in this crate is RGB. Sources that
//! deliver RGBA or BGR data are converted here, at the decode boundary, so no
//! other module ever has to reason about channel order.

/// An RGB pixel color with 8-bit channels.
///
/// This is the `smart-leds` color type, which is what the hardware driver
/// ecosystem (ws2812, apa102, ...) consumes directly. Equality is
/// component-wise.
pub use smart_leds::RGB8 as Color;

/// Named color constants (CSS set) from `smart_leds`.
pub use smart_leds::colors;

/// All channels off.
pub use smart_leds::colors::BLACK;

/// Convert a row-major RGBA8 byte buffer into colors, dropping alpha.
pub fn colors_from_rgba(bytes: &[u8]) -> Vec<Color> {
    bytes
        .chunks_exact(4)
        .map(|px| Color::new(px[0], px[1], px[2]))
        .collect()
}

/// Convert a row-major RGB8 byte buffer into colors.
pub fn colors_from_rgb(bytes: &[u8]) -> Vec<Color> {
    bytes
        .chunks_exact(3)
        .map(|px| Color::new(px[0], px[1], px[2]))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;

use smart_leds::SmartLedsWrite;

use crate::foundation::color::{BLACK, Color};
use crate::strand::PixelSink;

/// Adapter that exposes any [`smart_leds`] driver as a [`PixelSink`].
///
/// This is the bridge to real transports: a ws2812 PWM/SPI writer, an apa102
/// clocked-serial writer, or anything else implementing [`SmartLedsWrite`]
/// becomes a strand with a fixed pixel count. Colors are staged in memory and
/// streamed to the driver on [`show`](PixelSink::show).
///
/// Flushes are fire-and-forget: a driver write error is logged and dropped,
/// never propagated. The staged buffer keeps the intended state either way.
pub struct SmartLedStrand<W> {
    writer: W,
    staged: Vec<Color>,
}

impl<W> SmartLedStrand<W>
where
    W: SmartLedsWrite<Color = Color>,
    W::Error: std::fmt::Debug,
{
    /// Wrap `writer` as a strand of `len` pixels, all black.
    pub fn new(writer: W, len: usize) -> Self {
        Self {
            writer,
            staged: vec![BLACK; len],
        }
    }

    /// Consume the adapter and return the underlying driver.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W> PixelSink for SmartLedStrand<W>
where
    W: SmartLedsWrite<Color = Color>,
    W::Error: std::fmt::Debug,
{
    fn len(&self) -> usize {
        self.staged.len()
    }

    fn begin(&mut self) {
        self.staged.fill(BLACK);
        self.show();
    }

    fn show(&mut self) {
        if let Err(err) = self.writer.write(self.staged.iter().copied()) {
            tracing::warn!(?err, "strand flush dropped a driver write error");
        }
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

impl<W> std::fmt::Debug for SmartLedStrand<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartLedStrand")
            .field("len", &self.staged.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strand/smart.rs"]
mod tests;

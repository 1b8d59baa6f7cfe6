//! Animation source probing and decoding.
//!
//! Everything here follows the "decode fully, then play" discipline: a source
//! is turned into an owned [`DecodedAnimation`] up front, so playback-time
//! work is pure buffer copying. GIFs and still images decode in-process via
//! the `image` crate; video containers go through the system `ffmpeg`
//! binaries (feature `media-ffmpeg`).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use image::{AnimationDecoder, ImageDecoder, codecs::gif::GifDecoder};

use crate::foundation::color::{Color, colors_from_rgba};
use crate::foundation::core::Fps;
use crate::foundation::error::{WeaveError, WeaveResult};

pub mod ffmpeg;

/// Probed metadata for an animation source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceInfo {
    /// Source frame width in pixels.
    pub width: u32,
    /// Source frame height in pixels.
    pub height: u32,
    /// Number of decoded frames.
    pub frame_count: usize,
    /// Native frame rate, when the source reports one.
    pub fps: Option<Fps>,
}

/// A fully decoded animation: row-major RGB frames plus source metadata.
#[derive(Clone, Debug)]
pub struct DecodedAnimation {
    /// Source metadata; `frame_count` always matches `frames.len()`.
    pub info: SourceInfo,
    /// One `width * height` row-major color buffer per frame.
    pub frames: Vec<Vec<Color>>,
}

impl DecodedAnimation {
    /// Build an animation from pre-decoded frames.
    ///
    /// Every frame must hold exactly `width * height` colors.
    pub fn from_frames(
        width: u32,
        height: u32,
        fps: Option<Fps>,
        frames: Vec<Vec<Color>>,
    ) -> WeaveResult<Self> {
        let expected = width as usize * height as usize;
        if let Some(bad) = frames.iter().position(|f| f.len() != expected) {
            return Err(WeaveError::validation(format!(
                "frame {bad} holds {} colors, expected {expected} ({width}x{height})",
                frames[bad].len()
            )));
        }
        Ok(Self {
            info: SourceInfo {
                width,
                height,
                frame_count: frames.len(),
                fps,
            },
            frames,
        })
    }
}

/// Decode an animation source by path.
///
/// Dispatches on the file extension: `gif` decodes all frames in-process,
/// still-image extensions become one-frame animations, and anything else is
/// treated as a video container and handed to ffmpeg.
#[tracing::instrument]
pub fn decode_animation(path: &Path) -> WeaveResult<DecodedAnimation> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "gif" => decode_gif(path),
        "png" | "jpg" | "jpeg" | "bmp" | "webp" | "tiff" => decode_still(path),
        _ => ffmpeg::decode_video(path),
    }
}

fn decode_gif(path: &Path) -> WeaveResult<DecodedAnimation> {
    let file = File::open(path)
        .with_context(|| format!("open animation source '{}'", path.display()))?;
    let decoder = GifDecoder::new(BufReader::new(file))
        .map_err(|e| WeaveError::decode(format!("read gif header: {e}")))?;
    let (width, height) = decoder.dimensions();

    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| WeaveError::decode(format!("decode gif frames: {e}")))?;

    // GIF per-frame delays are free-form; take the first frame's delay as the
    // source's nominal rate.
    let fps = frames.first().and_then(|frame| {
        let (numer_ms, denom) = frame.delay().numer_denom_ms();
        Fps::new(denom.saturating_mul(1000), numer_ms).ok()
    });

    let frames = frames
        .iter()
        .map(|frame| colors_from_rgba(frame.buffer().as_raw()))
        .collect();
    DecodedAnimation::from_frames(width, height, fps, frames)
}

fn decode_still(path: &Path) -> WeaveResult<DecodedAnimation> {
    let img = image::open(path)
        .map_err(|e| WeaveError::decode(format!("open image '{}': {e}", path.display())))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    let frame = colors_from_rgba(img.as_raw());
    DecodedAnimation::from_frames(width, height, None, vec![frame])
}

#[cfg(test)]
#[path = "../../tests/unit/media/decode.rs"]
mod tests;

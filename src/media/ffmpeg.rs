//! Video container probing and decoding through the system `ffprobe` and
//! `ffmpeg` binaries.
//!
//! We intentionally shell out rather than link FFmpeg natively, avoiding dev
//! header/lib requirements. The whole source is decoded in one rawvideo
//! batch; pixel-count animations are small enough that O(frames x cells)
//! memory is the accepted trade for artifact-free playback.

use std::path::Path;

use crate::foundation::error::WeaveResult;
use crate::media::{DecodedAnimation, SourceInfo};

#[cfg(feature = "media-ffmpeg")]
use crate::foundation::core::Fps;
#[cfg(feature = "media-ffmpeg")]
use crate::foundation::error::WeaveError;

/// Probe a video source's dimensions, frame count and native rate.
#[cfg(feature = "media-ffmpeg")]
#[tracing::instrument]
pub fn probe_video(path: &Path) -> WeaveResult<SourceInfo> {
    #[derive(serde::Deserialize)]
    struct ProbeStream {
        codec_type: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
        r_frame_rate: Option<String>,
        nb_frames: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        streams: Vec<ProbeStream>,
        format: Option<ProbeFormat>,
    }

    let out = std::process::Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_streams",
            "-show_format",
        ])
        .arg(path)
        .output()
        .map_err(|e| WeaveError::decode(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(WeaveError::decode(format!(
            "ffprobe failed for '{}': {}",
            path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let parsed: ProbeOut = serde_json::from_slice(&out.stdout)
        .map_err(|e| WeaveError::decode(format!("ffprobe json parse failed: {e}")))?;
    let video = parsed
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| WeaveError::decode("no video stream found"))?;
    let width = video
        .width
        .ok_or_else(|| WeaveError::decode("missing video width from ffprobe"))?;
    let height = video
        .height
        .ok_or_else(|| WeaveError::decode("missing video height from ffprobe"))?;

    let fps = video
        .r_frame_rate
        .as_deref()
        .and_then(parse_ff_ratio)
        .and_then(|(num, den)| Fps::new(num, den).ok());

    // Prefer the container's frame count; fall back to duration * fps.
    let frame_count = video
        .nb_frames
        .as_deref()
        .and_then(|s| s.parse::<usize>().ok())
        .or_else(|| {
            let duration = parsed
                .format
                .as_ref()
                .and_then(|f| f.duration.as_ref())
                .and_then(|s| s.parse::<f64>().ok())?;
            let fps = fps?;
            Some((duration * fps.as_f64()).floor().max(0.0) as usize)
        })
        .unwrap_or(0);

    Ok(SourceInfo {
        width,
        height,
        frame_count,
        fps,
    })
}

/// Decode every frame of a video source into row-major RGB colors.
#[cfg(feature = "media-ffmpeg")]
pub(crate) fn decode_video(path: &Path) -> WeaveResult<DecodedAnimation> {
    use rayon::prelude::*;

    use crate::foundation::color::colors_from_rgb;

    let info = probe_video(path)?;

    let out = std::process::Command::new("ffmpeg")
        .args(["-v", "error", "-i"])
        .arg(path)
        .args(["-f", "rawvideo", "-pix_fmt", "rgb24", "pipe:1"])
        .output()
        .map_err(|e| WeaveError::decode(format!("failed to run ffmpeg for video decode: {e}")))?;
    if !out.status.success() {
        return Err(WeaveError::decode(format!(
            "ffmpeg video decode failed for '{}': {}",
            path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let frame_len = info.width as usize * info.height as usize * 3;
    if frame_len == 0 {
        return Err(WeaveError::decode(
            "decoded video frame size is zero (invalid source dimensions)",
        ));
    }
    if out.stdout.is_empty() || !out.stdout.len().is_multiple_of(frame_len) {
        return Err(WeaveError::decode(format!(
            "decoded video batch has invalid size: got {} bytes, expected multiples of {frame_len}",
            out.stdout.len()
        )));
    }

    // Trust the stream over the probe: ffprobe's nb_frames is advisory.
    let frames: Vec<Vec<_>> = out
        .stdout
        .par_chunks(frame_len)
        .map(colors_from_rgb)
        .collect();
    DecodedAnimation::from_frames(info.width, info.height, info.fps, frames)
}

/// Probe a video source's dimensions, frame count and native rate.
#[cfg(not(feature = "media-ffmpeg"))]
pub fn probe_video(_path: &Path) -> WeaveResult<SourceInfo> {
    Err(crate::foundation::error::WeaveError::decode(
        "video sources require the 'media-ffmpeg' feature",
    ))
}

#[cfg(not(feature = "media-ffmpeg"))]
pub(crate) fn decode_video(_path: &Path) -> WeaveResult<DecodedAnimation> {
    Err(crate::foundation::error::WeaveError::decode(
        "video sources require the 'media-ffmpeg' feature",
    ))
}

#[cfg(feature = "media-ffmpeg")]
fn parse_ff_ratio(s: &str) -> Option<(u32, u32)> {
    let mut parts = s.split('/');
    let a = parts.next()?.parse::<u32>().ok()?;
    let b = parts.next()?.parse::<u32>().ok()?;
    if a == 0 || b == 0 {
        return None;
    }
    Some((a, b))
}

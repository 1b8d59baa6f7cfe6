use std::fs::File;
use std::io::BufWriter;

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, Rgba, RgbaImage};

use super::*;

fn write_test_gif(path: &Path, frames: u32) {
    let file = BufWriter::new(File::create(path).unwrap());
    let mut encoder = GifEncoder::new(file);
    let frames = (0..frames).map(|i| {
        let img = RgbaImage::from_pixel(4, 3, Rgba([i as u8 * 40, 0, 200, 255]));
        Frame::from_parts(img, 0, 0, Delay::from_numer_denom_ms(100, 1))
    });
    encoder.encode_frames(frames).unwrap();
}

#[test]
fn gif_decodes_dimensions_frames_and_rate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("anim.gif");
    write_test_gif(&path, 3);

    let anim = decode_animation(&path).unwrap();
    assert_eq!(anim.info.width, 4);
    assert_eq!(anim.info.height, 3);
    assert_eq!(anim.info.frame_count, 3);
    assert_eq!(anim.frames.len(), 3);
    assert!(anim.frames.iter().all(|f| f.len() == 12));

    // 100ms per frame reads back as 10 fps.
    let fps = anim.info.fps.unwrap();
    assert!((fps.as_f64() - 10.0).abs() < 1e-9);
}

#[test]
fn still_image_becomes_a_one_frame_animation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");

    let mut img = image::RgbImage::from_pixel(2, 2, image::Rgb([1, 2, 3]));
    img.put_pixel(1, 1, image::Rgb([250, 127, 0]));
    img.save(&path).unwrap();

    let anim = decode_animation(&path).unwrap();
    assert_eq!(anim.info.frame_count, 1);
    assert_eq!(anim.info.fps, None);
    // PNG is lossless: colors survive exactly.
    assert_eq!(anim.frames[0][0], Color::new(1, 2, 3));
    assert_eq!(anim.frames[0][3], Color::new(250, 127, 0));
}

#[test]
fn missing_source_is_an_error_not_a_panic() {
    let dir = tempfile::tempdir().unwrap();
    assert!(decode_animation(&dir.path().join("nope.gif")).is_err());
    assert!(decode_animation(&dir.path().join("nope.png")).is_err());
    assert!(decode_animation(&dir.path().join("nope.mov")).is_err());
}

#[test]
fn from_frames_rejects_misshapen_frames() {
    let ok = DecodedAnimation::from_frames(2, 2, None, vec![vec![Color::new(0, 0, 0); 4]]);
    assert!(ok.is_ok());

    let bad = DecodedAnimation::from_frames(2, 2, None, vec![vec![Color::new(0, 0, 0); 3]]);
    assert!(bad.is_err());
}

#[cfg(not(feature = "media-ffmpeg"))]
#[test]
fn video_containers_require_the_ffmpeg_feature() {
    let err = decode_animation(Path::new("show.mov")).unwrap_err();
    assert!(err.to_string().contains("media-ffmpeg"));
}

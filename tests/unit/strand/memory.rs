use super::*;
use crate::strand::PixelSink;

const RED: Color = Color { r: 255, g: 0, b: 0 };

#[test]
fn writes_stage_until_shown() {
    let mut strand = MemoryStrand::new(2);
    strand.set_pixel(0, RED);
    assert_eq!(strand.pixel(0), RED);
    assert_eq!(strand.shown()[0], BLACK);

    strand.show();
    assert_eq!(strand.shown()[0], RED);
}

#[test]
fn out_of_range_write_is_dropped() {
    let mut strand = MemoryStrand::new(2);
    strand.set_pixel(2, RED);
    assert_eq!(strand.staged(), &[BLACK, BLACK]);
    assert_eq!(strand.pixel(2), BLACK);
}

#[test]
fn show_is_idempotent_without_writes() {
    let mut strand = MemoryStrand::new(3);
    strand.set_pixel(1, RED);
    strand.show();
    let once = strand.shown().to_vec();
    strand.show();
    assert_eq!(strand.shown(), once.as_slice());
}

#[test]
fn begin_clears_and_flushes() {
    let mut strand = MemoryStrand::new(2);
    strand.set_pixel(0, RED);
    strand.show();
    strand.begin();
    assert_eq!(strand.staged(), &[BLACK, BLACK]);
    assert_eq!(strand.shown(), &[BLACK, BLACK]);
}

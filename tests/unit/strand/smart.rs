use super::*;

/// Driver double that records every flushed frame.
struct TestWriter {
    frames: Vec<Vec<Color>>,
    fail: bool,
}

impl SmartLedsWrite for TestWriter {
    type Error = &'static str;
    type Color = Color;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        if self.fail {
            return Err("bus stalled");
        }
        self.frames.push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}

#[test]
fn show_streams_the_staged_buffer() {
    let writer = TestWriter {
        frames: Vec::new(),
        fail: false,
    };
    let mut strand = SmartLedStrand::new(writer, 3);
    strand.set_pixel(1, Color::new(10, 20, 30));
    strand.show();

    let writer = strand.into_writer();
    assert_eq!(
        writer.frames,
        vec![vec![BLACK, Color::new(10, 20, 30), BLACK]]
    );
}

#[test]
fn out_of_range_write_is_dropped() {
    let writer = TestWriter {
        frames: Vec::new(),
        fail: false,
    };
    let mut strand = SmartLedStrand::new(writer, 2);
    strand.set_pixel(2, Color::new(1, 1, 1));
    assert_eq!(strand.pixel(2), BLACK);
    assert_eq!(strand.len(), 2);
}

#[test]
fn driver_errors_are_swallowed() {
    let writer = TestWriter {
        frames: Vec::new(),
        fail: true,
    };
    let mut strand = SmartLedStrand::new(writer, 2);
    strand.set_pixel(0, Color::new(5, 5, 5));
    // Fire-and-forget: the flush error is logged, the staged state survives.
    strand.show();
    assert_eq!(strand.pixel(0), Color::new(5, 5, 5));
}

#[test]
fn begin_blanks_then_flushes() {
    let writer = TestWriter {
        frames: Vec::new(),
        fail: false,
    };
    let mut strand = SmartLedStrand::new(writer, 2);
    strand.set_pixel(0, Color::new(9, 9, 9));
    strand.begin();

    let writer = strand.into_writer();
    assert_eq!(writer.frames, vec![vec![BLACK, BLACK]]);
}

use crate::bitio::BitWriter;
use crate::{saturation, Error, Result, MAX_FIELD_WIDTH};
use std::io;

/// Splits one logical run of `n` bits into the field values that encode it.
///
/// While `n` exceeds the saturation value a saturated field and a
/// zero-length escape field of the opposite polarity are appended; the
/// escape keeps the field stream strictly alternating without splitting
/// the run in the decoded output. The remainder closes the run, so a run
/// of exactly `k * (2^width - 1)` yields `k` saturated fields with `k - 1`
/// zero fields between them, and `n = 0` yields a single zero field.
pub fn split_run_length(mut n: u64, width: u8) -> Vec<u64> {
    let sat = saturation(width);
    let mut fields = Vec::with_capacity(1);
    while n > sat {
        fields.push(sat);
        fields.push(0);
        n -= sat;
    }
    fields.push(n);
    fields
}

/// Streaming run-length encoder.
///
/// Feed bits with [`push`](Rle::push) (or whole bytes with
/// [`update`](Rle::update) / `io::Write`), then call
/// [`finalize`](Rle::finalize) to emit the last run and flush. Dropping the
/// encoder without finalizing abandons the stream; buffered output is not
/// presented as valid.
pub struct Rle<W> {
    out: BitWriter<W>,
    width: u8,
    is_one: bool,
    counter: u64,
}

impl<W: io::Write> Rle<W> {
    /// The first run is always counted as a run of 0s.
    pub fn new(width: u8, writer: W) -> Result<Self> {
        if width < 1 || width > MAX_FIELD_WIDTH {
            return Err(Error::InvalidWidth(width));
        }
        Ok(Rle {
            out: BitWriter::new(writer),
            width,
            is_one: false,
            counter: 0,
        })
    }

    #[inline(always)]
    pub fn push(&mut self, bit: bool) -> Result<()> {
        if bit == self.is_one {
            self.counter += 1;
        } else {
            trace!("flip after {} bits of {}", self.counter, self.is_one as u8);
            self.emit_run()?;
            self.is_one = bit;
            self.counter = 1;
        }
        Ok(())
    }

    /// Feeds all 8 bits of `byte`, MSB first.
    #[inline(always)]
    pub fn update(&mut self, byte: u8) -> Result<()> {
        for i in (0..8).rev() {
            self.push((byte >> i) & 1 == 1)?;
        }
        Ok(())
    }

    fn emit_run(&mut self) -> Result<()> {
        for field in split_run_length(self.counter, self.width) {
            self.out.write_field(field, self.width)?;
        }
        Ok(())
    }

    /// Emits the final run (a zero-length one for empty input) and closes
    /// the output, zero-padding the last byte.
    pub fn finalize(mut self) -> Result<()> {
        trace!("last run: {} bits of {}", self.counter, self.is_one as u8);
        self.emit_run()?;
        self.out.close()
    }
}

impl<W: io::Write> io::Write for Rle<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for byte in buf.iter() {
            self.update(*byte)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

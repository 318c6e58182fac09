use crate::bitio::BitWriter;
use crate::{saturation, Error, Result, MAX_FIELD_WIDTH};
use std::io;

/// Streaming run-length decoder.
///
/// Feed it the field values read from the compressed stream, in order; it
/// reconstructs the original bits on the inner writer. Polarity starts at
/// 0 and toggles after every field, including zero-length escape fields:
/// those contribute no bits, and the flip they cause cancels against the
/// encoder's interleaved zero field, so a long run comes out unbroken.
///
/// Must be driven with the same field width the encoder used. The stream
/// cannot reveal a mismatch; decoding with the wrong width yields garbage.
pub struct DeRle<W> {
    out: BitWriter<W>,
    width: u8,
    is_one: bool,
}

impl<W: io::Write> DeRle<W> {
    pub fn new(width: u8, writer: W) -> Result<Self> {
        if width < 1 || width > MAX_FIELD_WIDTH {
            return Err(Error::InvalidWidth(width));
        }
        Ok(DeRle {
            out: BitWriter::new(writer),
            width,
            is_one: false,
        })
    }

    /// Emits `run` bits of the current polarity, then toggles.
    #[inline(always)]
    pub fn update(&mut self, run: u64) -> Result<()> {
        debug_assert!(run <= saturation(self.width));
        trace!("run of {run} bits of {}", self.is_one as u8);
        self.out.write_run(self.is_one, run)?;
        self.is_one = !self.is_one;
        Ok(())
    }

    /// Closes the output, zero-padding the final partial byte.
    pub fn finalize(self) -> Result<()> {
        self.out.close()
    }
}

//! Bit-level stream I/O, MSB-first.
//!
//! The codec core never touches bytes directly; it reads and writes single
//! bits and fixed-width unsigned fields through these two adapters. Both
//! buffer one byte at a time on top of plain `io::Read`/`io::Write`.

use crate::{Error, Result, MAX_FIELD_WIDTH};
use std::io;

pub struct BitReader<R> {
    inner: R,
    buf: u8,
    /// Bits of `buf` not yet handed out.
    len: u8,
}

impl<R: io::Read> BitReader<R> {
    pub fn new(inner: R) -> Self {
        BitReader {
            inner,
            buf: 0,
            len: 0,
        }
    }

    /// Next bit, or `None` at true end of stream.
    #[inline(always)]
    pub fn read_bit(&mut self) -> Result<Option<bool>> {
        if self.len == 0 {
            let mut byte = [0u8; 1];
            loop {
                match self.inner.read(&mut byte) {
                    Ok(0) => return Ok(None),
                    Ok(_) => break,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                }
            }
            self.buf = byte[0];
            self.len = 8;
        }
        self.len -= 1;
        Ok(Some((self.buf >> self.len) & 1 == 1))
    }

    /// Reads one `width`-bit unsigned field, MSB first.
    ///
    /// `None` means the stream ended cleanly: either exactly at a field
    /// boundary, or inside a trailing all-zero partial shorter than a byte,
    /// which is the writer's padding. Any other partial field is
    /// `Error::TruncatedField`.
    pub fn read_field(&mut self, width: u8) -> Result<Option<u64>> {
        debug_assert!(width >= 1 && width <= MAX_FIELD_WIDTH);
        let mut value = 0u64;
        let mut got = 0u8;
        while got < width {
            match self.read_bit()? {
                Some(bit) => {
                    value = (value << 1) | bit as u64;
                    got += 1;
                }
                None if got == 0 => return Ok(None),
                None if value == 0 && got < 8 => {
                    trace!("dropping {got} padding bits");
                    return Ok(None);
                }
                None => return Err(Error::TruncatedField { got, want: width }),
            }
        }
        Ok(Some(value))
    }
}

pub struct BitWriter<W> {
    inner: W,
    buf: u8,
    /// Bits accumulated in `buf`, filled from the high end.
    len: u8,
}

impl<W: io::Write> BitWriter<W> {
    pub fn new(inner: W) -> Self {
        BitWriter {
            inner,
            buf: 0,
            len: 0,
        }
    }

    #[inline(always)]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.buf = (self.buf << 1) | bit as u8;
        self.len += 1;
        if self.len == 8 {
            self.inner.write_all(&[self.buf])?;
            self.buf = 0;
            self.len = 0;
        }
        Ok(())
    }

    /// Writes exactly `width` bits of `value`, MSB first.
    pub fn write_field(&mut self, value: u64, width: u8) -> Result<()> {
        debug_assert!(width >= 1 && width <= MAX_FIELD_WIDTH);
        if value >> width != 0 {
            return Err(Error::FieldOverflow { value, width });
        }
        trace!("write field {value} ({width} bits)");
        for i in (0..width).rev() {
            self.write_bit((value >> i) & 1 == 1)?;
        }
        Ok(())
    }

    /// Writes `count` copies of `bit`, emitting whole 0x00/0xFF bytes while
    /// aligned.
    pub fn write_run(&mut self, bit: bool, mut count: u64) -> Result<()> {
        while count > 0 {
            if self.len == 0 && count >= 8 {
                let byte = if bit { 0xFF } else { 0x00 };
                let bytes = count / 8;
                for _ in 0..bytes {
                    self.inner.write_all(&[byte])?;
                }
                count %= 8;
            } else {
                self.write_bit(bit)?;
                count -= 1;
            }
        }
        Ok(())
    }

    /// Zero-pads the final partial byte and flushes the inner writer. The
    /// padding never reaches the logical bit stream; the reader side drops
    /// it again.
    pub fn close(mut self) -> Result<()> {
        if self.len > 0 {
            trace!("padding {} bits", 8 - self.len);
            self.buf <<= 8 - self.len;
            self.inner.write_all(&[self.buf])?;
        }
        self.inner.flush()?;
        Ok(())
    }
}

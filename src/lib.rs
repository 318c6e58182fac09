//! # Run-Length Encoding Scheme
//!
//! A bit stream decomposes into maximal runs of identical bits. Only the
//! run lengths are stored, each as an unsigned integer of a fixed width `W`:
//!
//! ```text
//!       MSB        LSB  MSB        LSB  MSB        LSB
//!        │          │    │          │    │          │
//!        ▼          ▼    ▼          ▼    ▼          ▼
//!       XXXX ... XXXX   XXXX ... XXXX   XXXX ... XXXX   ...
//!       └── W bits ──┘  └── W bits ──┘  └── W bits ──┘
//!          run of 0s       run of 1s       run of 0s
//! ```
//!
//! The bit value of each run is never written. The first field always
//! describes a run of 0s (possibly of length zero) and polarity strictly
//! alternates from field to field, so the decoder recovers it by toggling
//! a single flag.
//!
//! A run longer than `2^W - 1` cannot fit in one field. It is written as a
//! saturated field of `2^W - 1`, followed by a zero-length field of the
//! opposite polarity, repeated until the remainder fits:
//!
//! ```text
//!       run of 300 zeros, W = 8:   255  0  45
//!                                   │   │   └─ remaining zeros
//!                                   │   └───── escape, "0 ones"
//!                                   └───────── saturated zeros
//! ```
//!
//! The zero field contributes no bits but still flips the decoder's
//! polarity, so the two flips cancel and the logical run is never split in
//! the reconstructed output.
//!
//! The encoding carries no header and no field count. The decoder MUST use
//! the same `W` the encoder used; a mismatch is undetectable from the
//! stream alone and produces garbage output, not an error. The final byte
//! of the compressed artifact is zero-padded; the decoder treats a trailing
//! all-zero partial field shorter than a byte as that padding, and rejects
//! any other partial field as truncation.

#[macro_use]
extern crate log;

use std::io;

mod bitio;
mod bitmap;
mod derle;
mod error;
mod rle;

pub use bitio::{BitReader, BitWriter};
pub use bitmap::{compress_image, image_from_bits, image_to_bits, INK_THRESHOLD};
pub use derle::DeRle;
pub use error::{Error, Result};
pub use rle::{split_run_length, Rle};

/// Field width of the classic 8-bit pairing.
pub const DEFAULT_FIELD_WIDTH: u8 = 8;
/// Widest supported field; run counters are `u64` so anything past this
/// buys nothing.
pub const MAX_FIELD_WIDTH: u8 = 32;

/// Largest run length a single `width`-bit field can hold.
#[inline(always)]
pub(crate) fn saturation(width: u8) -> u64 {
    debug_assert!(width >= 1 && width <= MAX_FIELD_WIDTH);
    (1u64 << width) - 1
}

/// Compresses every bit of `input` (MSB-first per byte) into a stream of
/// `width`-bit run-length fields on `output`, then flushes.
pub fn compress<R: io::Read, W: io::Write>(width: u8, mut input: R, output: W) -> Result<()> {
    let mut rle = Rle::new(width, output)?;
    let mut buf = [0u8; 8192];
    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        for &byte in &buf[..n] {
            rle.update(byte)?;
        }
    }
    rle.finalize()
}

/// Reads `width`-bit run-length fields from `input` until end of stream and
/// reconstructs the original bits on `output`, then flushes. The final
/// partial byte of output is zero-padded.
pub fn expand<R: io::Read, W: io::Write>(width: u8, input: R, output: W) -> Result<()> {
    let mut fields = BitReader::new(input);
    let mut derle = DeRle::new(width, output)?;
    while let Some(run) = fields.read_field(width)? {
        derle.update(run)?;
    }
    derle.finalize()
}

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the codec and its bit I/O boundary.
///
/// A decoder driven with a different field width than the encoder used is
/// NOT detectable here: the format carries no width marker, so a mismatch
/// decodes to garbage rather than an error. Matching widths is a
/// precondition on the caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("field width {0} out of range 1..={max}", max = crate::MAX_FIELD_WIDTH)]
    InvalidWidth(u8),

    /// The field stream ended mid-field with bits that cannot be byte
    /// padding: corruption, or a width mismatch.
    #[error("truncated field: got {got} of {want} bits at end of stream")]
    TruncatedField { got: u8, want: u8 },

    /// A value too wide for its field reached the bit writer. The
    /// saturation/escape policy makes this unreachable from the encoder;
    /// seeing it means a logic defect, not bad input.
    #[error("field value {value} exceeds {width}-bit range (internal defect)")]
    FieldOverflow { value: u64, width: u8 },

    #[error("bitmap geometry mismatch: expected {expected} bits, got {actual}")]
    BitmapSize { expected: usize, actual: usize },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

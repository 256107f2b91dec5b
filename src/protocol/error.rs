//! Taksonomi Error Protokol
//!
//! Semua varian di sini fatal untuk panggilan yang sedang berjalan:
//! payload rusak tidak pernah menghasilkan nilai parsial atau default.

use thiserror::Error;

/// Pelanggaran protokol saat decode payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("read past end of buffer: need {needed} bytes, {remaining} remaining")]
    ReadPastEnd { needed: usize, remaining: usize },

    #[error("unexpected negative length prefix: {0}")]
    NegativeLength(i32),

    #[error("unexpected byte {0} for boolean")]
    InvalidBoolByte(u8),

    #[error("unexpected flag byte {0} for optional value")]
    InvalidOptionFlag(u8),

    #[error("junk data left in buffer after decoding: {0} bytes")]
    TrailingBytes(usize),

    #[error("invalid utf-8 in text payload: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

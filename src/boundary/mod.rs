//! Boundary Layer: Permukaan FFI dan Error Channel
//!
//! Prinsip desain:
//! - Status out-of-band: hasil panggilan invalid saat kode != 0
//! - Panic guard: unwinding tidak pernah menyeberangi boundary C
//! - Message dimiliki callee, dibebaskan konsumen tepat satu kali

mod entry;
mod host;
mod status;

pub use entry::{
    call_with_status, charon_buffer_alloc, charon_buffer_free, charon_buffer_from_bytes,
    charon_buffer_reserve, charon_string_free,
};
pub use host::{call_boundary, FromErrorCode, InternalError};
pub use status::{CallFailure, CallStatus, ErrorCode, CALL_INTERNAL, CALL_SUCCESS};

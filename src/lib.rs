//! Charon - Cross-Language FFI Marshaling Layer
//!
//! Arsitektur:
//! - Buffer Protocol: header `#[repr(C)]` bit-exact melintasi boundary
//! - Big-Endian Codec: kedua sisi encode/decode bytes identik
//! - Scoped Ownership: alokasi dan pembebasan dijamin berpasangan
//! - Error Channel: status out-of-band dipetakan ke failure bertipe

pub mod boundary;
pub mod buffer;
pub mod protocol;
pub mod sample;

pub use boundary::{
    call_boundary, call_with_status, charon_buffer_alloc, charon_buffer_free,
    charon_buffer_from_bytes, charon_buffer_reserve, charon_string_free, CallFailure, CallStatus,
    ErrorCode, FromErrorCode, InternalError, CALL_INTERNAL, CALL_SUCCESS,
};
pub use buffer::{live_buffer_count, ForeignBytes, OwnedBuffer, RawBuffer};
pub use protocol::{lift, lift_raw, lower, Decoder, Encoder, ProtocolError, WireFormat};

//! Protocol Layer: Codec Big-Endian Self-Describing
//!
//! Prinsip desain:
//! - Big-endian di seluruh wire: kedua sisi decode bytes identik
//! - Bound check sebelum setiap read: short read = korupsi, fatal
//! - Full consumption: sisa bytes setelah decode adalah error protokol

mod decoder;
mod encoder;
mod error;
mod wire;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::ProtocolError;
pub use wire::{lift, lift_raw, lower, WireFormat};

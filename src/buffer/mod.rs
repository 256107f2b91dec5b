//! Buffer Layer: Memori yang Melintasi Boundary
//!
//! Prinsip desain:
//! - Layout `#[repr(C)]` bit-exact: header buffer adalah bagian protokol
//! - Kepemilikan eksklusif: satu pemilik per buffer di satu sisi boundary
//! - Pembebasan lewat Drop: tepat satu kali di setiap exit path

mod owned;
mod raw;

pub use owned::OwnedBuffer;
pub use raw::{live_buffer_count, ForeignBytes, RawBuffer};

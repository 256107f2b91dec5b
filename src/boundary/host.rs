//! Sisi Host: Invokasi Panggilan dan Pemetaan Kode ke Error Bertipe
//!
//! State machine per panggilan: READY (slot zero-init) -> CALLING ->
//! SUCCESS atau FAILED -> message dikonsumsi bila FAILED -> DONE.
//! Tidak ada retry di layer ini; kebijakan retry milik pemanggil di atas
//! boundary.

use thiserror::Error;

use super::entry::charon_string_free;
use super::status::CallStatus;
use crate::protocol::ProtocolError;

/// Pemetaan kode error wire ke tipe failure milik satu interface.
///
/// Implementasi memetakan kode yang dikenal ke varian spesifik dan WAJIB
/// menampung kode tak dikenal di varian fallback - mismatch versi antar
/// sisi boundary bukan alasan untuk undefined behavior.
pub trait FromErrorCode: Sized {
    fn from_error_code(code: i32, message: String) -> Self;
}

/// Kegagalan generik layer marshaling: korupsi protokol, panic sisi
/// native, atau kode yang tidak dikenal interface mana pun.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("internal marshaling failure: {0}")]
pub struct InternalError(pub String);

impl FromErrorCode for InternalError {
    fn from_error_code(_code: i32, message: String) -> Self {
        Self(message)
    }
}

/// Korupsi terdeteksi saat lifting hasil di sisi host.
impl From<ProtocolError> for InternalError {
    fn from(err: ProtocolError) -> Self {
        Self(err.to_string())
    }
}

/// Jalankan satu panggilan boundary dengan disiplin error channel penuh.
///
/// Slot status dialokasikan zero-init di stack, panggilan dijalankan,
/// lalu kode diperiksa: 0 berarti hasil valid; selain itu message disalin,
/// dibebaskan lewat entry point resmi, dan kode dipetakan ke `E`.
pub fn call_boundary<T, E, F>(invoke: F) -> Result<T, E>
where
    E: FromErrorCode,
    F: FnOnce(&mut CallStatus) -> T,
{
    let mut status = CallStatus::new();
    let result = invoke(&mut status);

    if status.is_success() {
        return Ok(result);
    }

    // SAFETY: message ditulis oleh sisi native lewat set_failure
    let message = unsafe { status.message_lossy() }.unwrap_or_default();
    let mut free_status = CallStatus::new();
    charon_string_free(status.message, &mut free_status);

    Err(E::from_error_code(status.code, message))
}

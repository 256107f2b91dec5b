//! Error Record Out-of-Band untuk Setiap Panggilan Fallible
//!
//! Setiap entry point yang bisa gagal menerima pointer ke CallStatus
//! yang di-zero-initialize pemanggil sebagai parameter terakhir. Kode 0
//! berarti sukses (message dijamin null); kode non-nol berarti gagal dan
//! message wajib dikonsumsi lalu dibebaskan tepat satu kali.

use std::ffi::{CStr, CString};
use std::fmt;
use std::ptr;

use libc::c_char;

use crate::protocol::ProtocolError;

/// Panggilan sukses; hasil boleh dipakai.
pub const CALL_SUCCESS: i32 = 0;

/// Kegagalan internal (pelanggaran protokol, panic sisi native).
/// Disjoint dari ruang kode domain yang selalu >= 1.
pub const CALL_INTERNAL: i32 = -1;

/// Slot status per panggilan, dialokasikan pemanggil di stack.
///
/// Layout: `code:i32, message:ptr` - bagian dari wire format.
#[repr(C)]
#[derive(Debug)]
pub struct CallStatus {
    pub code: i32,
    pub message: *mut c_char,
}

impl CallStatus {
    /// Slot baru dalam keadaan READY: kode sukses, message null.
    pub const fn new() -> Self {
        Self {
            code: CALL_SUCCESS,
            message: ptr::null_mut(),
        }
    }

    #[inline(always)]
    pub fn is_success(&self) -> bool {
        self.code == CALL_SUCCESS
    }

    /// Tulis kegagalan: kode plus message C-string milik callee.
    ///
    /// Message dialokasikan di sini; pembebasannya lewat entry point
    /// string-free oleh sisi yang mengonsumsi.
    pub fn set_failure(&mut self, code: i32, message: &str) {
        self.code = code;
        // Interior NUL tidak mungkin dari error message kita; fallback
        // ke string kosong daripada panic di jalur pelaporan error
        let c_message = CString::new(message).unwrap_or_default();
        self.message = c_message.into_raw();
    }

    /// Salin message tanpa membebaskannya.
    ///
    /// # Safety
    /// `message`, bila non-null, harus pointer C-string valid yang
    /// ditulis oleh [`CallStatus::set_failure`].
    pub unsafe fn message_lossy(&self) -> Option<String> {
        if self.message.is_null() {
            None
        } else {
            Some(CStr::from_ptr(self.message).to_string_lossy().into_owned())
        }
    }
}

impl Default for CallStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Error domain yang punya kode tetap di wire (selalu >= 1).
pub trait ErrorCode {
    fn error_code(&self) -> i32;
}

/// Kegagalan sisi native yang sudah diratakan ke (kode, message),
/// siap ditulis ke CallStatus.
#[derive(Debug, Clone)]
pub struct CallFailure {
    pub code: i32,
    pub message: String,
}

impl CallFailure {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: CALL_INTERNAL,
            message: message.into(),
        }
    }

    pub fn domain<E: ErrorCode + fmt::Display>(err: E) -> Self {
        Self {
            code: err.error_code(),
            message: err.to_string(),
        }
    }
}

/// Pelanggaran protokol saat lifting argumen selalu internal, bukan
/// error domain.
impl From<ProtocolError> for CallFailure {
    fn from(err: ProtocolError) -> Self {
        Self::internal(err.to_string())
    }
}

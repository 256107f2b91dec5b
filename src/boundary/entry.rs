//! Builtin Entry Points: Permukaan extern "C" Milik Protokol
//!
//! Lima simbol yang setiap binding host butuhkan sebelum bisa memanggil
//! interface apa pun: alokasi/reservasi/pembebasan buffer, copy bytes
//! milik host ke buffer native, dan pembebasan message error.
//!
//! Semua body berjalan di bawah panic guard: unwinding tidak pernah
//! menyeberangi boundary C.

use std::any::Any;
use std::ffi::CString;
use std::panic::{self, AssertUnwindSafe};

use libc::c_char;

use super::status::{CallFailure, CallStatus, CALL_INTERNAL};
use crate::buffer::{ForeignBytes, OwnedBuffer, RawBuffer};

/// Jalankan body panggilan native dengan pelaporan lewat CallStatus.
///
/// Kontrak pemanggil: `status` pointer valid ke slot zero-initialized.
/// Pada kegagalan atau panic, status diisi dan nilai default dikembalikan;
/// hasil itu invalid dan tidak boleh dipakai oleh host.
#[allow(clippy::not_unsafe_ptr_arg_deref)] // kontrak FFI: status selalu valid per panggilan
pub fn call_with_status<T, F>(status: *mut CallStatus, body: F) -> T
where
    T: Default,
    F: FnOnce() -> Result<T, CallFailure>,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(body));

    // SAFETY: kontrak entry point - status valid dan eksklusif per panggilan
    let status = unsafe { &mut *status };

    match outcome {
        Ok(Ok(value)) => value,
        Ok(Err(failure)) => {
            status.set_failure(failure.code, &failure.message);
            T::default()
        }
        Err(payload) => {
            status.set_failure(CALL_INTERNAL, &panic_message(payload));
            T::default()
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "native call panicked".to_string()
    }
}

/// Alokasi buffer kosong dengan kapasitas `size` untuk diisi host.
#[no_mangle]
pub extern "C" fn charon_buffer_alloc(size: i32, status: *mut CallStatus) -> RawBuffer {
    call_with_status(status, || {
        if size < 0 {
            return Err(CallFailure::internal(format!(
                "negative buffer size: {size}"
            )));
        }
        Ok(OwnedBuffer::with_capacity(size as usize).into_raw())
    })
}

/// Salin bytes milik host ke buffer baru milik sisi native.
///
/// Memori di belakang `bytes.data` tetap milik host; hanya dibaca.
#[no_mangle]
pub extern "C" fn charon_buffer_from_bytes(
    bytes: ForeignBytes,
    status: *mut CallStatus,
) -> RawBuffer {
    call_with_status(status, || {
        if bytes.len < 0 {
            return Err(CallFailure::internal(format!(
                "negative foreign bytes length: {}",
                bytes.len
            )));
        }
        if bytes.data.is_null() && bytes.len > 0 {
            return Err(CallFailure::internal(
                "null foreign bytes pointer with non-zero length",
            ));
        }

        let copied = if bytes.len == 0 {
            Vec::new()
        } else {
            // SAFETY: len divalidasi; data milik host, dibaca lalu disalin
            unsafe { std::slice::from_raw_parts(bytes.data, bytes.len as usize) }.to_vec()
        };
        Ok(OwnedBuffer::from_vec(copied).into_raw())
    })
}

/// Pastikan sisa kapasitas buffer >= `additional`.
///
/// Handle lama invalid setelah sukses; pemanggil wajib rebind ke handle
/// yang dikembalikan. Pada kegagalan validasi, handle lama tetap milik
/// pemanggil.
#[no_mangle]
pub extern "C" fn charon_buffer_reserve(
    buf: RawBuffer,
    additional: i32,
    status: *mut CallStatus,
) -> RawBuffer {
    call_with_status(status, || {
        if additional < 0 {
            return Err(CallFailure::internal(format!(
                "negative reserve amount: {additional}"
            )));
        }

        // SAFETY: kepemilikan handle berpindah ke sini dari pemanggil
        let mut owned = unsafe { OwnedBuffer::from_raw(buf) };
        owned.reserve(additional as usize);
        Ok(owned.into_raw())
    })
}

/// Bebaskan buffer yang kepemilikannya diserahkan kembali ke sisi native.
#[no_mangle]
pub extern "C" fn charon_buffer_free(buf: RawBuffer, status: *mut CallStatus) {
    call_with_status(status, || {
        // SAFETY: kepemilikan berpindah; Drop membebaskan tepat sekali
        unsafe {
            drop(OwnedBuffer::from_raw(buf));
        }
        Ok(())
    })
}

/// Bebaskan message error yang ditulis sisi native ke CallStatus.
#[no_mangle]
pub extern "C" fn charon_string_free(ptr: *mut c_char, status: *mut CallStatus) {
    call_with_status(status, || {
        if !ptr.is_null() {
            // SAFETY: ptr berasal dari CString::into_raw di set_failure
            unsafe {
                drop(CString::from_raw(ptr));
            }
        }
        Ok(())
    })
}

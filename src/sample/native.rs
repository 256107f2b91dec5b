//! Sisi Native Interface Contoh
//!
//! Setiap entry point: lift argumen -> jalankan operasi -> lower hasil,
//! semua di bawah panic guard. Buffer argumen dikonsumsi (dan dibebaskan)
//! di sini bahkan saat decode gagal; buffer hasil menjadi milik pemanggil.

use std::collections::HashMap;

use thiserror::Error;

use super::Point;
use crate::boundary::{call_with_status, CallFailure, CallStatus, ErrorCode};
use crate::buffer::RawBuffer;
use crate::protocol::{lift_raw, lower};

/// Kode wire untuk varian integer overflow.
pub const ARITHMETIC_ERROR_INTEGER_OVERFLOW: i32 = 1;

/// Error domain interface contoh.
#[derive(Debug, Error)]
pub enum ArithmeticError {
    #[error("integer overflow on an operation with {a} and {b}")]
    IntegerOverflow { a: u64, b: u64 },
}

impl ErrorCode for ArithmeticError {
    fn error_code(&self) -> i32 {
        match self {
            Self::IntegerOverflow { .. } => ARITHMETIC_ERROR_INTEGER_OVERFLOW,
        }
    }
}

/// Penjumlahan yang menolak wrap diam-diam.
fn checked_add(a: u64, b: u64) -> Result<u64, ArithmeticError> {
    a.checked_add(b)
        .ok_or(ArithmeticError::IntegerOverflow { a, b })
}

/// Boolean melintasi boundary sebagai scalar i8; hanya 0/1 yang valid.
fn lift_scalar_bool(value: i8) -> Result<bool, CallFailure> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(CallFailure::internal(format!(
            "unexpected byte {other} for boolean argument"
        ))),
    }
}

#[no_mangle]
pub extern "C" fn charon_sample_bool_flip(value: i8, status: *mut CallStatus) -> i8 {
    call_with_status(status, || {
        let value = lift_scalar_bool(value)?;
        Ok(!value as i8)
    })
}

#[no_mangle]
pub extern "C" fn charon_sample_i32_increment(value: i32, status: *mut CallStatus) -> i32 {
    call_with_status(status, || Ok(value.wrapping_add(1)))
}

#[no_mangle]
pub extern "C" fn charon_sample_f64_increment(value: f64, status: *mut CallStatus) -> f64 {
    call_with_status(status, || Ok(value + 1.0))
}

#[no_mangle]
pub extern "C" fn charon_sample_u64_checked_add(
    a: u64,
    b: u64,
    status: *mut CallStatus,
) -> u64 {
    call_with_status(status, || checked_add(a, b).map_err(CallFailure::domain))
}

/// Operasi void: ada hanya untuk membuktikan jalur tanpa hasil.
#[no_mangle]
pub extern "C" fn charon_sample_void_touch(_value: i32, status: *mut CallStatus) {
    call_with_status(status, || Ok(()))
}

#[no_mangle]
pub extern "C" fn charon_sample_string_double(
    value: RawBuffer,
    status: *mut CallStatus,
) -> RawBuffer {
    call_with_status(status, || {
        // SAFETY: kepemilikan buffer argumen berpindah ke callee
        let value: String = unsafe { lift_raw(value) }?;
        Ok(lower(&format!("{value}{value}")).into_raw())
    })
}

#[no_mangle]
pub extern "C" fn charon_sample_point_shift(
    value: RawBuffer,
    status: *mut CallStatus,
) -> RawBuffer {
    call_with_status(status, || {
        // SAFETY: kepemilikan buffer argumen berpindah ke callee
        let value: Point = unsafe { lift_raw(value) }?;
        let shifted = Point {
            x: value.x + 1.0,
            y: value.y + 1.0,
        };
        Ok(lower(&shifted).into_raw())
    })
}

#[no_mangle]
pub extern "C" fn charon_sample_optional_increment(
    value: RawBuffer,
    status: *mut CallStatus,
) -> RawBuffer {
    call_with_status(status, || {
        // SAFETY: kepemilikan buffer argumen berpindah ke callee
        let value: Option<i32> = unsafe { lift_raw(value) }?;
        Ok(lower(&value.map(|v| v.wrapping_add(1))).into_raw())
    })
}

#[no_mangle]
pub extern "C" fn charon_sample_vector_double(
    value: RawBuffer,
    status: *mut CallStatus,
) -> RawBuffer {
    call_with_status(status, || {
        // SAFETY: kepemilikan buffer argumen berpindah ke callee
        let value: Vec<String> = unsafe { lift_raw(value) }?;
        let mut doubled = value.clone();
        doubled.extend(value);
        Ok(lower(&doubled).into_raw())
    })
}

#[no_mangle]
pub extern "C" fn charon_sample_map_insert_zero(
    value: RawBuffer,
    status: *mut CallStatus,
) -> RawBuffer {
    call_with_status(status, || {
        // SAFETY: kepemilikan buffer argumen berpindah ke callee
        let mut value: HashMap<String, i32> = unsafe { lift_raw(value) }?;
        value.insert("zero".to_string(), 0);
        Ok(lower(&value).into_raw())
    })
}

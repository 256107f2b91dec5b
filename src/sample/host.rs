//! Sisi Host Interface Contoh
//!
//! Wrapper aman yang melakukan lowering argumen, invokasi entry point
//! native, lifting hasil, dan pemetaan kode error - persis urutan yang
//! akan dijalankan binding host di bahasa lain.

use std::collections::HashMap;

use thiserror::Error;

use super::native;
use super::Point;
use crate::boundary::{call_boundary, CallStatus, FromErrorCode, InternalError};
use crate::protocol::{lift_raw, lower};

/// Error bertipe yang dilihat pemanggil host untuk operasi aritmetika.
///
/// Kode 1 dipetakan ke IntegerOverflow; kode lain (termasuk internal)
/// jatuh ke varian Unknown alih-alih undefined behavior.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("{0}")]
    IntegerOverflow(String),

    #[error("unknown arithmetic failure (code {code}): {message}")]
    Unknown { code: i32, message: String },
}

impl FromErrorCode for ArithmeticError {
    fn from_error_code(code: i32, message: String) -> Self {
        match code {
            native::ARITHMETIC_ERROR_INTEGER_OVERFLOW => Self::IntegerOverflow(message),
            code => Self::Unknown { code, message },
        }
    }
}

/// Invokasi untuk operasi tanpa error domain: semua kegagalan internal.
fn invoke<T>(f: impl FnOnce(&mut CallStatus) -> T) -> Result<T, InternalError> {
    call_boundary(f)
}

/// Scalar boolean kembali dari native sebagai i8; validasi ketat.
fn lift_scalar_bool(value: i8) -> Result<bool, InternalError> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(InternalError(format!(
            "unexpected byte {other} for boolean result"
        ))),
    }
}

pub fn bool_flip(value: bool) -> Result<bool, InternalError> {
    let raw = invoke(|status| native::charon_sample_bool_flip(value as i8, status))?;
    lift_scalar_bool(raw)
}

pub fn i32_increment(value: i32) -> Result<i32, InternalError> {
    invoke(|status| native::charon_sample_i32_increment(value, status))
}

pub fn f64_increment(value: f64) -> Result<f64, InternalError> {
    invoke(|status| native::charon_sample_f64_increment(value, status))
}

pub fn u64_checked_add(a: u64, b: u64) -> Result<u64, ArithmeticError> {
    call_boundary(|status| native::charon_sample_u64_checked_add(a, b, status))
}

pub fn void_touch(value: i32) -> Result<(), InternalError> {
    invoke(|status| native::charon_sample_void_touch(value, status))
}

pub fn string_double(value: &str) -> Result<String, InternalError> {
    let arg = lower(&value.to_string()).into_raw();
    let raw = invoke(|status| native::charon_sample_string_double(arg, status))?;
    // SAFETY: buffer hasil milik kita setelah panggilan sukses
    unsafe { lift_raw(raw) }.map_err(InternalError::from)
}

pub fn point_shift(value: &Point) -> Result<Point, InternalError> {
    let arg = lower(value).into_raw();
    let raw = invoke(|status| native::charon_sample_point_shift(arg, status))?;
    // SAFETY: buffer hasil milik kita setelah panggilan sukses
    unsafe { lift_raw(raw) }.map_err(InternalError::from)
}

pub fn optional_increment(value: Option<i32>) -> Result<Option<i32>, InternalError> {
    let arg = lower(&value).into_raw();
    let raw = invoke(|status| native::charon_sample_optional_increment(arg, status))?;
    // SAFETY: buffer hasil milik kita setelah panggilan sukses
    unsafe { lift_raw(raw) }.map_err(InternalError::from)
}

pub fn vector_double(value: Vec<String>) -> Result<Vec<String>, InternalError> {
    let arg = lower(&value).into_raw();
    let raw = invoke(|status| native::charon_sample_vector_double(arg, status))?;
    // SAFETY: buffer hasil milik kita setelah panggilan sukses
    unsafe { lift_raw(raw) }.map_err(InternalError::from)
}

pub fn map_insert_zero(value: HashMap<String, i32>) -> Result<HashMap<String, i32>, InternalError> {
    let arg = lower(&value).into_raw();
    let raw = invoke(|status| native::charon_sample_map_insert_zero(arg, status))?;
    // SAFETY: buffer hasil milik kita setelah panggilan sukses
    unsafe { lift_raw(raw) }.map_err(InternalError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_wrappers() {
        assert!(!bool_flip(true).unwrap());
        assert!(bool_flip(false).unwrap());
        assert_eq!(i32_increment(41).unwrap(), 42);
        assert_eq!(f64_increment(1.5).unwrap(), 2.5);
        void_touch(0).unwrap();
    }

    #[test]
    fn test_string_double_through_boundary() {
        assert_eq!(string_double("Hello World!").unwrap(), "Hello World!Hello World!");
        assert_eq!(string_double("").unwrap(), "");
    }

    #[test]
    fn test_point_shift_through_boundary() {
        let shifted = point_shift(&Point { x: 1.0, y: 2.0 }).unwrap();
        assert_eq!(shifted, Point { x: 2.0, y: 3.0 });
    }

    #[test]
    fn test_optional_paths_distinguishable() {
        assert_eq!(optional_increment(None).unwrap(), None);
        assert_eq!(optional_increment(Some(0)).unwrap(), Some(1));
    }

    #[test]
    fn test_collection_wrappers() {
        let doubled = vector_double(vec!["one".to_string(), "two".to_string()]).unwrap();
        assert_eq!(doubled, vec!["one", "two", "one", "two"]);

        let mut map = HashMap::new();
        map.insert("one".to_string(), 1);
        let result = map_insert_zero(map).unwrap();
        assert_eq!(result.get("zero"), Some(&0));
        assert_eq!(result.get("one"), Some(&1));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_overflow_maps_to_typed_failure() {
        let err = u64_checked_add(u64::MAX, 1).unwrap_err();
        match err {
            ArithmeticError::IntegerOverflow(message) => {
                assert!(message.contains("integer overflow"));
            }
            other => panic!("expected IntegerOverflow, got {other:?}"),
        }
    }

    #[test]
    fn test_success_path_never_raises() {
        for _ in 0..3 {
            assert_eq!(u64_checked_add(10, 32).unwrap(), 42);
        }
    }
}

//! Integration Test: Panggilan Penuh Melewati Boundary
//!
//! Setiap skenario menjalankan urutan persis yang dilakukan binding host:
//! lower argumen, invoke entry point extern "C", inspeksi status, lift
//! hasil, dan pemetaan error bertipe.
//!
//! Usage:
//!   cargo test --test boundary_roundtrip

use std::collections::HashMap;

use charon::sample::host::{self, ArithmeticError};
use charon::sample::Point;
use charon::{
    charon_buffer_alloc, charon_buffer_free, charon_buffer_reserve, charon_string_free,
    lift, lower, CallStatus, OwnedBuffer, ProtocolError, CALL_INTERNAL,
};

#[test]
fn test_boolean_roundtrip() {
    // Scenario: encode false, decode false - dan flip di sisi native
    let decoded: bool = lift(lower(&false)).unwrap();
    assert!(!decoded);

    assert!(host::bool_flip(false).unwrap());
    assert!(!host::bool_flip(true).unwrap());
}

#[test]
fn test_i32_max_roundtrip() {
    let decoded: i32 = lift(lower(&2147483647i32)).unwrap();
    assert_eq!(decoded, i32::MAX);
}

#[test]
fn test_u64_overflow_raises_mapped_failure() {
    // u64::MAX + 1 harus jadi failure bertipe, bukan wrap diam-diam
    let err = host::u64_checked_add(18446744073709551615u64, 1).unwrap_err();
    assert!(matches!(err, ArithmeticError::IntegerOverflow(_)));

    // Di bawah batas: sukses
    assert_eq!(host::u64_checked_add(u64::MAX - 1, 1).unwrap(), u64::MAX);
}

#[test]
fn test_error_mapping_is_deterministic() {
    // Input tetap -> failure yang sama setiap kali
    for _ in 0..5 {
        let err = host::u64_checked_add(u64::MAX, 1).unwrap_err();
        match err {
            ArithmeticError::IntegerOverflow(message) => {
                assert!(message.contains("18446744073709551615"));
            }
            other => panic!("mapping changed between calls: {other:?}"),
        }
    }

    // Jalur sukses tidak pernah raise
    for i in 0..5 {
        host::u64_checked_add(i, i).unwrap();
    }
}

#[test]
fn test_string_roundtrip_with_length_prefix() {
    let message = "Hello World!".to_string();

    // Length prefix harus persis 12
    let buf = lower(&message);
    assert_eq!(&buf.as_slice()[..4], &12i32.to_be_bytes());

    let decoded: String = lift(buf).unwrap();
    assert_eq!(decoded, "Hello World!");

    // Dan lewat boundary penuh
    assert_eq!(
        host::string_double("Hello World!").unwrap(),
        "Hello World!Hello World!"
    );
}

#[test]
fn test_sequence_roundtrip_preserves_order() {
    let items = vec!["one".to_string(), "two".to_string(), "three".to_string()];
    let decoded: Vec<String> = lift(lower(&items)).unwrap();
    assert_eq!(decoded, items);

    let doubled = host::vector_double(items.clone()).unwrap();
    assert_eq!(doubled.len(), 6);
    assert_eq!(&doubled[..3], &items[..]);
    assert_eq!(&doubled[3..], &items[..]);
}

#[test]
fn test_map_roundtrip_entries_without_order() {
    let mut map = HashMap::new();
    map.insert("one".to_string(), 1);
    map.insert("two".to_string(), 2);
    map.insert("three".to_string(), 3);

    let decoded: HashMap<String, i32> = lift(lower(&map)).unwrap();
    assert_eq!(decoded, map);

    let result = host::map_insert_zero(map).unwrap();
    assert_eq!(result.len(), 4);
    assert_eq!(result.get("zero"), Some(&0));
    assert_eq!(result.get("three"), Some(&3));
}

#[test]
fn test_optional_absent_vs_present_zero() {
    // Dua kasus harus bisa dibedakan di wire
    let absent: Option<i32> = lift(lower(&None::<i32>)).unwrap();
    assert_eq!(absent, None);

    let present: Option<i32> = lift(lower(&Some(0i32))).unwrap();
    assert_eq!(present, Some(0));

    assert_eq!(host::optional_increment(None).unwrap(), None);
    assert_eq!(host::optional_increment(Some(0)).unwrap(), Some(1));
}

#[test]
fn test_point_record_through_boundary() {
    let point = Point { x: 1.0, y: 2.0 };
    let shifted = host::point_shift(&point).unwrap();
    assert_eq!(shifted, Point { x: 2.0, y: 3.0 });
}

#[test]
fn test_void_call_has_no_result() {
    host::void_touch(0).unwrap();
}

#[test]
fn test_malformed_result_buffer_is_internal_error() {
    // Payload terpotong dikirim sebagai argumen: sisi native harus
    // melaporkan internal error lewat status, bukan crash
    let mut truncated = Vec::new();
    truncated.extend_from_slice(&100i32.to_be_bytes());
    truncated.extend_from_slice(b"short");

    let mut status = CallStatus::new();
    charon::sample::native::charon_sample_string_double(
        OwnedBuffer::from_vec(truncated).into_raw(),
        &mut status,
    );
    assert_eq!(status.code, CALL_INTERNAL);

    let mut free_status = CallStatus::new();
    charon_string_free(status.message, &mut free_status);
    assert!(free_status.is_success());
}

#[test]
fn test_full_consumption_enforced() {
    // Decode sukses tapi ada sisa bytes -> korupsi
    let mut bytes = 7i32.to_be_bytes().to_vec();
    bytes.push(0xFF);
    let err = lift::<i32>(OwnedBuffer::from_vec(bytes)).unwrap_err();
    assert_eq!(err, ProtocolError::TrailingBytes(1));
}

#[test]
fn test_builtin_lifecycle_entry_points() {
    let mut status = CallStatus::new();

    // Alokasi -> reserve (rebind) -> free, semua lewat permukaan FFI
    let buf = charon_buffer_alloc(16, &mut status);
    assert!(status.is_success());

    let grown = charon_buffer_reserve(buf, 1024, &mut status);
    assert!(status.is_success());
    assert!(grown.capacity >= 1024);

    charon_buffer_free(grown, &mut status);
    assert!(status.is_success());
}

//! Layout Wire untuk Buffer yang Melintasi Boundary
//!
//! Struct di file ini harus bit-exact dengan sisi host:
//! header buffer di-pass by value lewat FFI, jadi layout `#[repr(C)]`
//! adalah bagian dari protokol, bukan detail implementasi.

use std::mem;
use std::ptr;
use std::sync::atomic::{AtomicI64, Ordering};

/// Jumlah buffer yang sedang hidup (alokasi dikurangi pembebasan).
///
/// Counter ini diagnostic-only: test harness memakainya untuk
/// memastikan setiap alokasi di-match oleh tepat satu pembebasan.
static LIVE_BUFFERS: AtomicI64 = AtomicI64::new(0);

/// Jumlah buffer yang belum dibebaskan saat ini.
#[inline(always)]
pub fn live_buffer_count() -> i64 {
    LIVE_BUFFERS.load(Ordering::Relaxed)
}

/// Header buffer yang melintasi boundary (by value).
///
/// Layout: `capacity:i32, len:i32, data:ptr, padding:i64`.
/// Field `padding` ada untuk kompatibilitas alignment antar binding;
/// selalu ditulis nol dan diabaikan saat dibaca.
///
/// Invariant: `0 <= len <= capacity`; `data` hanya null saat buffer kosong.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawBuffer {
    pub capacity: i32,
    pub len: i32,
    pub data: *mut u8,
    pub padding: i64,
}

impl Default for RawBuffer {
    fn default() -> Self {
        Self {
            capacity: 0,
            len: 0,
            data: ptr::null_mut(),
            padding: 0,
        }
    }
}

impl RawBuffer {
    /// Ambil alih storage sebuah `Vec<u8>` tanpa copy.
    ///
    /// Satu-satunya cara membuat RawBuffer yang valid: pointer, len, dan
    /// capacity dicuri dari Vec sehingga identitas allocator terjaga dan
    /// `into_vec` bisa mengembalikannya dengan aman.
    ///
    /// # Panics
    /// Panic jika kapasitas melebihi jangkauan i32 - buffer protokol
    /// membawa payload panggilan, bukan bulk storage.
    pub fn from_vec(mut v: Vec<u8>) -> Self {
        assert!(
            v.capacity() <= i32::MAX as usize,
            "buffer capacity exceeds i32 range"
        );

        let capacity = v.capacity() as i32;
        let len = v.len() as i32;
        let data = if v.capacity() == 0 {
            ptr::null_mut()
        } else {
            v.as_mut_ptr()
        };
        mem::forget(v);

        LIVE_BUFFERS.fetch_add(1, Ordering::Relaxed);

        Self {
            capacity,
            len,
            data,
            padding: 0,
        }
    }

    /// Kembalikan storage ke `Vec<u8>`, menyerahkan tanggung jawab
    /// pembebasan ke Vec tersebut.
    ///
    /// # Safety
    /// `self` harus berasal dari [`RawBuffer::from_vec`] dan belum pernah
    /// dikonsumsi; memanggil dua kali pada handle yang sama adalah
    /// double-free.
    pub unsafe fn into_vec(self) -> Vec<u8> {
        LIVE_BUFFERS.fetch_sub(1, Ordering::Relaxed);

        if self.data.is_null() {
            Vec::new()
        } else {
            Vec::from_raw_parts(self.data, self.len as usize, self.capacity as usize)
        }
    }
}

/// Header bytes milik host (read-only view).
///
/// Layout: `len:i32, data:ptr, padding:i64, padding2:i32`.
/// Memori di belakang `data` dimiliki host; sisi native hanya boleh
/// membaca lalu menyalin, tidak pernah membebaskan.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ForeignBytes {
    pub len: i32,
    pub data: *const u8,
    pub padding: i64,
    pub padding2: i32,
}

//! Lifecycle Manager: Kepemilikan Buffer Berbasis Scope
//!
//! Setiap RawBuffer yang hidup dimiliki oleh tepat satu OwnedBuffer
//! (atau oleh sisi lain boundary setelah `into_raw`). Pembebasan terjadi
//! otomatis lewat Drop di setiap exit path - sukses maupun error - jadi
//! double-free dan use-after-free tidak bisa diekspresikan di safe code.

use std::mem;
use std::ptr;

use super::raw::RawBuffer;

/// Pemilik tunggal sebuah RawBuffer.
pub struct OwnedBuffer {
    raw: RawBuffer,
}

impl OwnedBuffer {
    /// Buffer kosong tanpa alokasi data.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Alokasi buffer dengan kapasitas awal.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: RawBuffer::from_vec(Vec::with_capacity(capacity)),
        }
    }

    /// Bungkus bytes yang sudah ada ke dalam buffer.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            raw: RawBuffer::from_vec(bytes),
        }
    }

    /// Ambil alih kepemilikan handle yang datang dari seberang boundary.
    ///
    /// # Safety
    /// `raw` harus handle valid hasil `into_raw`/entry point alokasi, dan
    /// pemanggil menyerahkan kepemilikan: tidak boleh menyentuh atau
    /// membebaskan handle itu lagi setelah panggilan ini.
    pub unsafe fn from_raw(raw: RawBuffer) -> Self {
        Self { raw }
    }

    /// Serahkan kepemilikan ke seberang boundary.
    ///
    /// Destructor ditekan; sisi penerima wajib membebaskan handle ini
    /// tepat satu kali (mis. lewat entry point free).
    pub fn into_raw(self) -> RawBuffer {
        let raw = self.raw;
        mem::forget(self);
        raw
    }

    /// Jumlah bytes yang berisi data valid.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.raw.len as usize
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.raw.len == 0
    }

    /// Kapasitas yang sudah teralokasi.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.raw.capacity as usize
    }

    /// View ke bytes valid (zero-copy).
    #[inline(always)]
    pub fn as_slice(&self) -> &[u8] {
        if self.raw.data.is_null() {
            &[]
        } else {
            // SAFETY: data valid sepanjang len, dan kita pemilik eksklusif
            unsafe { std::slice::from_raw_parts(self.raw.data, self.len()) }
        }
    }

    /// Pastikan sisa kapasitas >= `additional` melewati len saat ini.
    ///
    /// Reallokasi me-rebind handle internal; semua bytes di bawah len
    /// dipertahankan verbatim.
    pub fn reserve(&mut self, additional: usize) {
        if self.capacity() - self.len() >= additional {
            return;
        }

        // SAFETY: raw milik kita; handle lama langsung digantikan di bawah
        let mut v = unsafe { self.raw.into_vec() };
        v.reserve(additional);
        self.raw = RawBuffer::from_vec(v);
    }

    /// Tulis bytes di posisi len, menumbuhkan buffer bila perlu.
    #[inline(always)]
    pub(crate) fn push_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }

        self.reserve(bytes.len());

        // SAFETY: reserve menjamin kapasitas cukup dan data non-null
        unsafe {
            ptr::copy_nonoverlapping(bytes.as_ptr(), self.raw.data.add(self.len()), bytes.len());
        }
        self.raw.len += bytes.len() as i32;
    }
}

impl Default for OwnedBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for OwnedBuffer {
    fn drop(&mut self) {
        // SAFETY: kepemilikan eksklusif; Drop berjalan maksimal sekali
        unsafe {
            drop(self.raw.into_vec());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_read_back() {
        let mut buf = OwnedBuffer::with_capacity(4);
        buf.push_bytes(&[1, 2, 3, 4]);
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn test_reserve_preserves_bytes() {
        let mut buf = OwnedBuffer::with_capacity(2);
        buf.push_bytes(&[0xAA, 0xBB]);

        // Paksa reallokasi jauh melewati kapasitas awal
        buf.reserve(1024);
        assert!(buf.capacity() >= 1026);
        assert_eq!(buf.as_slice(), &[0xAA, 0xBB]);
    }

    #[test]
    fn test_growth_across_many_writes() {
        let mut buf = OwnedBuffer::with_capacity(1);
        for i in 0..100u8 {
            buf.push_bytes(&[i]);
        }
        assert_eq!(buf.len(), 100);
        assert_eq!(buf.as_slice()[99], 99);
    }

    #[test]
    fn test_into_raw_from_raw_transfer() {
        let mut buf = OwnedBuffer::new();
        buf.push_bytes(b"transfer");

        // Simulasi handoff melewati boundary dan kembali
        let raw = buf.into_raw();
        let back = unsafe { OwnedBuffer::from_raw(raw) };
        assert_eq!(back.as_slice(), b"transfer");
    }

    #[test]
    fn test_empty_buffer_slice() {
        let buf = OwnedBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.as_slice(), &[] as &[u8]);
    }
}

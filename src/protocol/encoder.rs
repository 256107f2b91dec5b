//! Encoder: Write Cursor Big-Endian di atas OwnedBuffer
//!
//! Semua nilai multi-byte ditulis network byte order supaya kedua sisi
//! boundary membaca bytes yang identik tanpa peduli endianness host.
//! Encoder yang di-drop sebelum `finalize` melepas buffer parsialnya
//! otomatis - kegagalan di tengah encode tidak pernah bocor.

use crate::buffer::OwnedBuffer;

/// Kapasitas awal buffer encode; tumbuh sesuai kebutuhan lewat reserve.
const INITIAL_CAPACITY: usize = 16;

/// Write cursor sekuensial untuk lowering nilai ke wire format.
pub struct Encoder {
    buf: OwnedBuffer,
}

impl Encoder {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: OwnedBuffer::with_capacity(capacity),
        }
    }

    /// Jumlah bytes yang sudah ditulis.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Boolean sebagai satu byte: 1 untuk true, 0 untuk false.
    #[inline(always)]
    pub fn write_bool(&mut self, v: bool) {
        self.write_i8(v as i8);
    }

    #[inline(always)]
    pub fn write_u8(&mut self, v: u8) {
        self.buf.push_bytes(&v.to_be_bytes());
    }

    #[inline(always)]
    pub fn write_i8(&mut self, v: i8) {
        self.buf.push_bytes(&v.to_be_bytes());
    }

    #[inline(always)]
    pub fn write_u16(&mut self, v: u16) {
        self.buf.push_bytes(&v.to_be_bytes());
    }

    #[inline(always)]
    pub fn write_i16(&mut self, v: i16) {
        self.buf.push_bytes(&v.to_be_bytes());
    }

    #[inline(always)]
    pub fn write_u32(&mut self, v: u32) {
        self.buf.push_bytes(&v.to_be_bytes());
    }

    #[inline(always)]
    pub fn write_i32(&mut self, v: i32) {
        self.buf.push_bytes(&v.to_be_bytes());
    }

    #[inline(always)]
    pub fn write_u64(&mut self, v: u64) {
        self.buf.push_bytes(&v.to_be_bytes());
    }

    #[inline(always)]
    pub fn write_i64(&mut self, v: i64) {
        self.buf.push_bytes(&v.to_be_bytes());
    }

    #[inline(always)]
    pub fn write_f32(&mut self, v: f32) {
        self.buf.push_bytes(&v.to_be_bytes());
    }

    #[inline(always)]
    pub fn write_f64(&mut self, v: f64) {
        self.buf.push_bytes(&v.to_be_bytes());
    }

    /// Bytes mentah tanpa length prefix.
    #[inline(always)]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.push_bytes(bytes);
    }

    /// Teks: panjang UTF-8 sebagai i32 diikuti bytes-nya.
    pub fn write_string(&mut self, v: &str) {
        assert!(
            v.len() <= i32::MAX as usize,
            "string payload exceeds i32 length prefix"
        );
        self.write_i32(v.len() as i32);
        self.write_bytes(v.as_bytes());
    }

    /// Selesaikan encode dan serahkan buffer hasil.
    pub fn finalize(self) -> OwnedBuffer {
        self.buf
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_endian_layout() {
        let mut enc = Encoder::new();
        enc.write_i32(i32::MAX);

        let buf = enc.finalize();
        assert_eq!(buf.as_slice(), &[0x7F, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_u16_is_two_bytes() {
        let mut enc = Encoder::new();
        enc.write_u16(0xBEEF);

        let buf = enc.finalize();
        assert_eq!(buf.as_slice(), &[0xBE, 0xEF]);
    }

    #[test]
    fn test_bool_encoding() {
        let mut enc = Encoder::new();
        enc.write_bool(true);
        enc.write_bool(false);

        let buf = enc.finalize();
        assert_eq!(buf.as_slice(), &[1, 0]);
    }

    #[test]
    fn test_string_length_prefix() {
        let mut enc = Encoder::new();
        enc.write_string("Hello World!");

        let buf = enc.finalize();
        assert_eq!(&buf.as_slice()[..4], &[0, 0, 0, 12]);
        assert_eq!(&buf.as_slice()[4..], b"Hello World!");
    }

    #[test]
    fn test_growth_past_initial_capacity() {
        let mut enc = Encoder::new();
        for i in 0..64u64 {
            enc.write_u64(i);
        }

        let buf = enc.finalize();
        assert_eq!(buf.len(), 64 * 8);
        // Byte terakhir dari u64 ke-63
        assert_eq!(buf.as_slice()[511], 63);
    }
}

//! Decoder: Read Cursor dengan Bound Check di Setiap Operasi
//!
//! Decoder meminjam bytes yang sudah diterima; setiap read memvalidasi
//! sisa panjang sebelum menyentuh data. Short read adalah pelanggaran
//! protokol, bukan nilai default.

use super::error::ProtocolError;

/// Read cursor sekuensial untuk lifting nilai dari wire format.
pub struct Decoder<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Decoder<'a> {
    #[inline(always)]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Sisa bytes yang belum dikonsumsi.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Konsumsi `size` bytes berikutnya.
    #[inline(always)]
    pub fn take(&mut self, size: usize) -> Result<&'a [u8], ProtocolError> {
        if size > self.remaining() {
            return Err(ProtocolError::ReadPastEnd {
                needed: size,
                remaining: self.remaining(),
            });
        }

        let slice = &self.data[self.offset..self.offset + size];
        self.offset += size;
        Ok(slice)
    }

    #[inline(always)]
    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], ProtocolError> {
        let slice = self.take(N)?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(slice);
        Ok(bytes)
    }

    /// Boolean ketat: hanya 0 dan 1 yang valid, byte lain berarti korupsi.
    pub fn read_bool(&mut self) -> Result<bool, ProtocolError> {
        match self.read_i8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(ProtocolError::InvalidBoolByte(other as u8)),
        }
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8, ProtocolError> {
        Ok(u8::from_be_bytes(self.take_array::<1>()?))
    }

    #[inline(always)]
    pub fn read_i8(&mut self) -> Result<i8, ProtocolError> {
        Ok(i8::from_be_bytes(self.take_array::<1>()?))
    }

    #[inline(always)]
    pub fn read_u16(&mut self) -> Result<u16, ProtocolError> {
        Ok(u16::from_be_bytes(self.take_array::<2>()?))
    }

    #[inline(always)]
    pub fn read_i16(&mut self) -> Result<i16, ProtocolError> {
        Ok(i16::from_be_bytes(self.take_array::<2>()?))
    }

    #[inline(always)]
    pub fn read_u32(&mut self) -> Result<u32, ProtocolError> {
        Ok(u32::from_be_bytes(self.take_array::<4>()?))
    }

    #[inline(always)]
    pub fn read_i32(&mut self) -> Result<i32, ProtocolError> {
        Ok(i32::from_be_bytes(self.take_array::<4>()?))
    }

    #[inline(always)]
    pub fn read_u64(&mut self) -> Result<u64, ProtocolError> {
        Ok(u64::from_be_bytes(self.take_array::<8>()?))
    }

    #[inline(always)]
    pub fn read_i64(&mut self) -> Result<i64, ProtocolError> {
        Ok(i64::from_be_bytes(self.take_array::<8>()?))
    }

    #[inline(always)]
    pub fn read_f32(&mut self) -> Result<f32, ProtocolError> {
        Ok(f32::from_be_bytes(self.take_array::<4>()?))
    }

    #[inline(always)]
    pub fn read_f64(&mut self) -> Result<f64, ProtocolError> {
        Ok(f64::from_be_bytes(self.take_array::<8>()?))
    }

    /// Teks: length prefix i32 (harus >= 0) lalu bytes UTF-8.
    pub fn read_string(&mut self) -> Result<String, ProtocolError> {
        let len = self.read_i32()?;
        if len < 0 {
            return Err(ProtocolError::NegativeLength(len));
        }

        let bytes = self.take(len as usize)?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_past_end_is_fatal() {
        let mut dec = Decoder::new(&[0, 1]);
        let err = dec.read_i32().unwrap_err();
        assert_eq!(
            err,
            ProtocolError::ReadPastEnd {
                needed: 4,
                remaining: 2
            }
        );
    }

    #[test]
    fn test_bool_rejects_other_bytes() {
        let mut dec = Decoder::new(&[2]);
        assert_eq!(dec.read_bool().unwrap_err(), ProtocolError::InvalidBoolByte(2));
    }

    #[test]
    fn test_negative_string_length() {
        // -1 sebagai length prefix big-endian
        let mut dec = Decoder::new(&[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(
            dec.read_string().unwrap_err(),
            ProtocolError::NegativeLength(-1)
        );
    }

    #[test]
    fn test_invalid_utf8_is_fatal() {
        let mut dec = Decoder::new(&[0, 0, 0, 2, 0xC3, 0x28]);
        assert!(matches!(
            dec.read_string().unwrap_err(),
            ProtocolError::InvalidUtf8(_)
        ));
    }

    #[test]
    fn test_sequential_reads_advance_offset() {
        let mut dec = Decoder::new(&[0x12, 0x34, 0x56, 0x78, 0x9A]);
        assert_eq!(dec.read_u16().unwrap(), 0x1234);
        assert_eq!(dec.read_u16().unwrap(), 0x5678);
        assert_eq!(dec.remaining(), 1);
        assert_eq!(dec.read_u8().unwrap(), 0x9A);
        assert_eq!(dec.remaining(), 0);
    }
}

//! Interface Contoh: Satu Operasi per Bentuk Protokol
//!
//! Interface kecil yang melewati seluruh pipeline marshaling dari dua
//! sisi boundary: scalar, teks, record, optional, sequence, map, void,
//! dan satu jalur error domain. Glue per-signature ditulis tangan di
//! sini karena pembangkitan stub bukan tanggung jawab crate ini.

pub mod host;
pub mod native;

use crate::protocol::{Decoder, Encoder, ProtocolError, WireFormat};

/// Record koordinat: dua field f64 dalam urutan tetap (x lalu y).
///
/// Record di-encode sebagai konkatenasi field tanpa framing; ukurannya
/// implied oleh schema, bukan length prefix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl WireFormat for Point {
    fn write(&self, enc: &mut Encoder) {
        enc.write_f64(self.x);
        enc.write_f64(self.y);
    }

    fn read(dec: &mut Decoder<'_>) -> Result<Self, ProtocolError> {
        Ok(Self {
            x: dec.read_f64()?,
            y: dec.read_f64()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{lift, lower};

    #[test]
    fn test_point_roundtrip() {
        let point = Point { x: 1.0, y: -2.5 };
        let back: Point = lift(lower(&point)).unwrap();
        assert_eq!(back, point);
    }

    #[test]
    fn test_point_is_sixteen_bytes_no_framing() {
        let buf = lower(&Point { x: 0.0, y: 0.0 });
        assert_eq!(buf.len(), 16);
    }

    #[test]
    fn test_truncated_point_is_fatal() {
        let buf = lower(&1.5f64); // cuma satu field dari dua
        assert!(matches!(
            lift::<Point>(buf).unwrap_err(),
            ProtocolError::ReadPastEnd { .. }
        ));
    }
}

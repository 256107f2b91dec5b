//! Composite Codec: Lowering dan Lifting Nilai Terstruktur
//!
//! Satu trait untuk seluruh bentuk protokol: primitif fixed-width, teks
//! length-prefixed, optional dengan presence flag, sequence dan map
//! count-prefixed, serta record sebagai konkatenasi field berurutan.
//! Kedua sisi boundary memakai codec yang sama persis.

use std::collections::HashMap;

use super::decoder::Decoder;
use super::encoder::Encoder;
use super::error::ProtocolError;
use crate::buffer::{OwnedBuffer, RawBuffer};

/// Nilai yang bisa dilewatkan melewati boundary dalam wire format.
///
/// `write` infallible (buffer tumbuh sendiri); `read` memvalidasi setiap
/// byte dan gagal fatal pada payload rusak.
pub trait WireFormat: Sized {
    fn write(&self, enc: &mut Encoder);
    fn read(dec: &mut Decoder<'_>) -> Result<Self, ProtocolError>;
}

macro_rules! primitive_wire {
    ($($ty:ty => $write:ident, $read:ident;)*) => {$(
        impl WireFormat for $ty {
            #[inline(always)]
            fn write(&self, enc: &mut Encoder) {
                enc.$write(*self);
            }

            #[inline(always)]
            fn read(dec: &mut Decoder<'_>) -> Result<Self, ProtocolError> {
                dec.$read()
            }
        }
    )*};
}

primitive_wire! {
    bool => write_bool, read_bool;
    u8 => write_u8, read_u8;
    i8 => write_i8, read_i8;
    u16 => write_u16, read_u16;
    i16 => write_i16, read_i16;
    u32 => write_u32, read_u32;
    i32 => write_i32, read_i32;
    u64 => write_u64, read_u64;
    i64 => write_i64, read_i64;
    f32 => write_f32, read_f32;
    f64 => write_f64, read_f64;
}

impl WireFormat for String {
    fn write(&self, enc: &mut Encoder) {
        enc.write_string(self);
    }

    fn read(dec: &mut Decoder<'_>) -> Result<Self, ProtocolError> {
        dec.read_string()
    }
}

/// Optional: presence flag satu byte, lalu nilai hanya bila flag = 1.
impl<T: WireFormat> WireFormat for Option<T> {
    fn write(&self, enc: &mut Encoder) {
        match self {
            None => enc.write_i8(0),
            Some(value) => {
                enc.write_i8(1);
                value.write(enc);
            }
        }
    }

    fn read(dec: &mut Decoder<'_>) -> Result<Self, ProtocolError> {
        match dec.read_i8()? {
            0 => Ok(None),
            1 => Ok(Some(T::read(dec)?)),
            other => Err(ProtocolError::InvalidOptionFlag(other as u8)),
        }
    }
}

/// Sequence: count i32 (>= 0) lalu elemen berurutan.
impl<T: WireFormat> WireFormat for Vec<T> {
    fn write(&self, enc: &mut Encoder) {
        assert!(
            self.len() <= i32::MAX as usize,
            "sequence length exceeds i32 count prefix"
        );
        enc.write_i32(self.len() as i32);
        for item in self {
            item.write(enc);
        }
    }

    fn read(dec: &mut Decoder<'_>) -> Result<Self, ProtocolError> {
        let count = dec.read_i32()?;
        if count < 0 {
            return Err(ProtocolError::NegativeLength(count));
        }

        // Batasi pre-alokasi dengan sisa bytes; count bohong akan gagal
        // di ReadPastEnd, bukan di allocator
        let mut items = Vec::with_capacity((count as usize).min(dec.remaining()));
        for _ in 0..count {
            items.push(T::read(dec)?);
        }
        Ok(items)
    }
}

/// Map: count i32 lalu pasangan (key teks, value). Urutan encode mengikuti
/// iterasi map; decoder tidak boleh mengasumsikan urutan apa pun.
/// Key duplikat: last-write-wins, tidak divalidasi.
impl<V: WireFormat> WireFormat for HashMap<String, V> {
    fn write(&self, enc: &mut Encoder) {
        assert!(
            self.len() <= i32::MAX as usize,
            "map size exceeds i32 count prefix"
        );
        enc.write_i32(self.len() as i32);
        for (key, value) in self {
            enc.write_string(key);
            value.write(enc);
        }
    }

    fn read(dec: &mut Decoder<'_>) -> Result<Self, ProtocolError> {
        let count = dec.read_i32()?;
        if count < 0 {
            return Err(ProtocolError::NegativeLength(count));
        }

        let mut items = HashMap::with_capacity((count as usize).min(dec.remaining()));
        for _ in 0..count {
            let key = dec.read_string()?;
            let value = V::read(dec)?;
            items.insert(key, value);
        }
        Ok(items)
    }
}

/// Lowering: encode nilai host menjadi buffer siap kirim.
pub fn lower<T: WireFormat>(value: &T) -> OwnedBuffer {
    let mut enc = Encoder::new();
    value.write(&mut enc);
    enc.finalize()
}

/// Lifting: konsumsi buffer menjadi nilai host.
///
/// Buffer dibebaskan di semua jalur (sukses maupun error) karena
/// kepemilikannya ada di scope fungsi ini. Sisa bytes setelah decode
/// lengkap adalah korupsi, bukan hal yang bisa diabaikan.
pub fn lift<T: WireFormat>(buf: OwnedBuffer) -> Result<T, ProtocolError> {
    let mut dec = Decoder::new(buf.as_slice());
    let value = T::read(&mut dec)?;

    let leftover = dec.remaining();
    if leftover != 0 {
        return Err(ProtocolError::TrailingBytes(leftover));
    }
    Ok(value)
}

/// Lifting langsung dari handle yang datang melewati boundary.
///
/// # Safety
/// `raw` harus handle valid dan pemanggil menyerahkan kepemilikannya;
/// buffer dibebaskan di sini tepat satu kali.
pub unsafe fn lift_raw<T: WireFormat>(raw: RawBuffer) -> Result<T, ProtocolError> {
    lift(OwnedBuffer::from_raw(raw))
}

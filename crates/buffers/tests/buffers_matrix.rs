//! Writer/Reader round-trip matrix for the buffers crate.

use netpack_buffers::{BufferError, Reader, Writer};

#[test]
fn roundtrip_bytes() {
    let mut w = Writer::new();
    w.u8(0x00);
    w.u8(0x7F);
    w.u8(0xFF);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u8().unwrap(), 0x00);
    assert_eq!(r.u8().unwrap(), 0x7F);
    assert_eq!(r.u8().unwrap(), 0xFF);
}

#[test]
fn roundtrip_signed_bytes() {
    let mut w = Writer::new();
    w.u8(i8::MIN as u8);
    w.u8(-1i8 as u8);
    w.u8(i8::MAX as u8);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.i8().unwrap(), i8::MIN);
    assert_eq!(r.i8().unwrap(), -1);
    assert_eq!(r.i8().unwrap(), i8::MAX);
}

#[test]
fn roundtrip_raw_slices() {
    let mut w = Writer::new();
    w.buf(b"hello");
    w.buf(b" world");
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.buf(5).unwrap(), b"hello");
    assert_eq!(r.buf(6).unwrap(), b" world");
    assert!(r.is_exhausted());
}

#[test]
fn skip_gap_is_zeroed_and_patchable() {
    let mut w = Writer::new();
    let gap = w.skip(12);
    w.buf(b"payload");
    let mut data = w.flush();
    assert_eq!(&data[..12], &[0u8; 12]);
    data[gap..gap + 4].copy_from_slice(&42u32.to_be_bytes());
    let mut r = Reader::new(&data);
    assert_eq!(u32::from_be_bytes(r.array::<4>().unwrap()), 42);
}

#[test]
fn depletion_is_recoverable() {
    let data = [1u8, 2, 3];
    let mut r = Reader::new(&data);
    r.skip(2).unwrap();
    let err = r.array::<2>().unwrap_err();
    assert!(matches!(err, BufferError::Depleted { needed: 2, remaining: 1 }));
    // Cursor untouched: the single remaining byte reads fine.
    assert_eq!(r.u8().unwrap(), 3);
}

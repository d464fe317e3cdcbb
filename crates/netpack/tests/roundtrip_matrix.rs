//! End-to-end packet roundtrips across the full field-type matrix.

use netpack::{
    deserialize, deserialize_record, serialize, serialize_record, wire_record, Builder, ByteOrder,
    Complex128, Complex64, Decomposer, Packet, Value, HEADER_LEN,
};

const ORDERS: [ByteOrder; 2] = [ByteOrder::Big, ByteOrder::Little];

#[test]
fn test_scalar_boundary_values() {
    for order in ORDERS {
        let mut b = Builder::new(order);
        b.add_u8(u8::MAX);
        b.add_i8(i8::MIN);
        b.add_u16(u16::MAX);
        b.add_i16(i16::MIN);
        b.add_u32(u32::MAX);
        b.add_i32(i32::MIN);
        b.add_u64(u64::MAX);
        b.add_i64(i64::MIN);
        let packet = b.build_packet(1);
        assert_eq!(packet.payload_length(), 1 + 1 + 2 + 2 + 4 + 4 + 8 + 8);

        let mut d = Decomposer::new(&packet, order);
        assert_eq!(d.read_u8().unwrap(), u8::MAX);
        assert_eq!(d.read_i8().unwrap(), i8::MIN);
        assert_eq!(d.read_u16().unwrap(), u16::MAX);
        assert_eq!(d.read_i16().unwrap(), i16::MIN);
        assert_eq!(d.read_u32().unwrap(), u32::MAX);
        assert_eq!(d.read_i32().unwrap(), i32::MIN);
        assert_eq!(d.read_u64().unwrap(), u64::MAX);
        assert_eq!(d.read_i64().unwrap(), i64::MIN);
        assert!(d.is_exhausted());
    }
}

#[test]
fn test_float_special_values_bit_exact() {
    let singles = [
        f32::NAN,
        f32::INFINITY,
        f32::NEG_INFINITY,
        -0.0f32,
        f32::MIN_POSITIVE,
    ];
    let doubles = [
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        -0.0f64,
        f64::MIN_POSITIVE,
    ];
    for order in ORDERS {
        let mut b = Builder::new(order);
        for v in singles {
            b.add_f32(v);
        }
        for v in doubles {
            b.add_f64(v);
        }
        let packet = b.build_packet(2);
        let mut d = Decomposer::new(&packet, order);
        for v in singles {
            assert_eq!(d.read_f32().unwrap().to_bits(), v.to_bits());
        }
        for v in doubles {
            assert_eq!(d.read_f64().unwrap().to_bits(), v.to_bits());
        }
    }
}

#[test]
fn test_string_matrix() {
    let cases = ["", "a", "Vasya", "привет мир", "🦀🦀🦀", "mixed ascii и юникод"];
    for order in ORDERS {
        let mut b = Builder::new(order);
        for s in cases {
            b.add_str(s);
        }
        let packet = b.build_packet(3);
        let mut d = Decomposer::new(&packet, order);
        for s in cases {
            assert_eq!(d.read_str().unwrap(), s);
        }
        assert!(d.is_exhausted());
    }
}

#[test]
fn test_array_length_prefix_counts_bytes() {
    // Each array's prefix declares the byte length, not the element count.
    let mut b = Builder::new(ByteOrder::Big);
    b.add_u16_array(&[1, 2, 3]);
    b.add_u64_array(&[9]);
    let packet = b.build_packet(4);
    let payload = packet.payload();
    assert_eq!(&payload[..4], &6i32.to_be_bytes());
    assert_eq!(&payload[10..14], &8i32.to_be_bytes());
}

#[test]
fn test_array_matrix_roundtrip() {
    for order in ORDERS {
        let mut b = Builder::new(order);
        b.add_bool_array(&[true, false, true]);
        b.add_i8_array(&[i8::MIN, 0, i8::MAX]);
        b.add_u32_array(&[0, 1, u32::MAX]);
        b.add_f64_array(&[0.5, -0.5]);
        b.add_complex64_array(&[Complex64::new(1.0, -1.0)]);
        b.add_complex128_array(&[Complex128::new(0.25, 4.0)]);
        b.add_char_array(&['п', 'р', 'и']);
        let packet = b.build_packet(5);

        let mut d = Decomposer::new(&packet, order);
        assert_eq!(d.read_bool_array().unwrap(), vec![true, false, true]);
        assert_eq!(d.read_i8_array().unwrap(), vec![i8::MIN, 0, i8::MAX]);
        assert_eq!(d.read_u32_array().unwrap(), vec![0, 1, u32::MAX]);
        assert_eq!(d.read_f64_array().unwrap(), vec![0.5, -0.5]);
        assert_eq!(
            d.read_complex64_array().unwrap(),
            vec![Complex64::new(1.0, -1.0)]
        );
        assert_eq!(
            d.read_complex128_array().unwrap(),
            vec![Complex128::new(0.25, 4.0)]
        );
        assert_eq!(d.read_char_array().unwrap(), vec!['п', 'р', 'и']);
        assert!(d.is_exhausted());
    }
}

#[test]
fn test_packet_survives_wire_and_stream() {
    let mut b = Builder::new(ByteOrder::Big);
    b.add_str("Vasya");
    b.add_i32(16);
    b.add_u8_array(&[32, 25, 78]);
    let packet = b.build_packet(32);

    // Flat bytes.
    let reparsed = Packet::from_bytes(packet.bytes(), ByteOrder::Big).unwrap();
    assert_eq!(reparsed, packet);

    // Stream.
    let mut wire = Vec::new();
    let written = packet.write_to(&mut wire).unwrap();
    assert_eq!(written as usize, HEADER_LEN + 20);
    let mut cursor = std::io::Cursor::new(wire);
    let (consumed, streamed) = Packet::read_from(&mut cursor, ByteOrder::Big).unwrap();
    assert_eq!(consumed, written);
    assert_eq!(streamed, packet);

    let mut d = Decomposer::new(&streamed, ByteOrder::Big);
    assert_eq!(d.read_str().unwrap(), "Vasya");
    assert_eq!(d.read_i32().unwrap(), 16);
    assert_eq!(d.read_u8_array().unwrap(), vec![32, 25, 78]);
}

#[test]
fn test_builder_reuse_across_packets() {
    let mut b = Builder::new(ByteOrder::Big);
    b.add_i32(1);
    let first = b.build_packet(10);
    b.add_i32(2);
    b.add_i32(3);
    let second = b.build_packet(11);

    assert_eq!(first.opcode(), 10);
    assert_eq!(first.payload_length(), 4);
    assert_eq!(second.opcode(), 11);
    assert_eq!(second.payload_length(), 8);

    let mut d = Decomposer::new(&second, ByteOrder::Big);
    assert_eq!(d.read_i32().unwrap(), 2);
    assert_eq!(d.read_i32().unwrap(), 3);
}

wire_record! {
    struct Sensor {
        id: u32,
        label: String,
        calibration: Vec<f64>,
        active: bool,
    }
}

#[test]
fn test_record_macro_end_to_end() {
    let sensor = Sensor {
        id: 7,
        label: "thermo-1".into(),
        calibration: vec![0.997, 1.002],
        active: true,
    };
    for order in ORDERS {
        let packet = serialize_record(64, &sensor, order);
        let mut decoded = Sensor::default();
        deserialize_record(&packet, &mut decoded, order).unwrap();
        assert_eq!(decoded, sensor);
    }
}

#[test]
fn test_dynamic_value_end_to_end() {
    let v = Value::record(vec![
        ("id", Value::U32(7)),
        ("label", Value::Str("thermo-1".into())),
        ("calibration", Value::F64Array(vec![0.997, 1.002])),
        ("active", Value::Bool(true)),
    ]);
    let packet = serialize(64, &v, ByteOrder::Little).unwrap();

    let mut target = Value::record(vec![
        ("id", Value::U32(0)),
        ("label", Value::Str(String::new())),
        ("calibration", Value::F64Array(vec![])),
        ("active", Value::Bool(false)),
    ]);
    deserialize(&packet, &mut target, ByteOrder::Little).unwrap();
    assert_eq!(target, v);
}

mod prop {
    use super::*;
    use proptest::prelude::*;

    fn order_strategy() -> impl Strategy<Value = ByteOrder> {
        prop_oneof![Just(ByteOrder::Big), Just(ByteOrder::Little)]
    }

    proptest! {
        #[test]
        fn roundtrip_i64(v in any::<i64>(), order in order_strategy()) {
            let mut b = Builder::new(order);
            b.add_i64(v);
            let packet = b.build_packet(0);
            let mut d = Decomposer::new(&packet, order);
            prop_assert_eq!(d.read_i64().unwrap(), v);
        }

        #[test]
        fn roundtrip_f64_bits(bits in any::<u64>(), order in order_strategy()) {
            let v = f64::from_bits(bits);
            let mut b = Builder::new(order);
            b.add_f64(v);
            let packet = b.build_packet(0);
            let mut d = Decomposer::new(&packet, order);
            prop_assert_eq!(d.read_f64().unwrap().to_bits(), bits);
        }

        #[test]
        fn roundtrip_string(s in ".{0,64}", order in order_strategy()) {
            let mut b = Builder::new(order);
            b.add_str(&s);
            let packet = b.build_packet(0);
            let mut d = Decomposer::new(&packet, order);
            prop_assert_eq!(d.read_str().unwrap(), s);
        }

        #[test]
        fn roundtrip_u8_array(v in proptest::collection::vec(any::<u8>(), 0..256), order in order_strategy()) {
            let mut b = Builder::new(order);
            b.add_u8_array(&v);
            let packet = b.build_packet(0);
            let mut d = Decomposer::new(&packet, order);
            prop_assert_eq!(d.read_u8_array().unwrap(), v);
        }

        #[test]
        fn roundtrip_i16_array(v in proptest::collection::vec(any::<i16>(), 0..128), order in order_strategy()) {
            let mut b = Builder::new(order);
            b.add_i16_array(&v);
            let packet = b.build_packet(0);
            let mut d = Decomposer::new(&packet, order);
            prop_assert_eq!(d.read_i16_array().unwrap(), v);
        }

        #[test]
        fn packet_from_bytes_never_panics(data in proptest::collection::vec(any::<u8>(), 0..64), order in order_strategy()) {
            let _ = Packet::from_bytes(&data, order);
        }
    }
}

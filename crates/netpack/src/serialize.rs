//! Field dispatch between [`Value`] trees and packet payloads.

use crate::{Builder, ByteOrder, Decomposer, Packet, PacketError, Value};

/// Encodes a value into a framed packet.
///
/// A [`Value::Record`] encodes as its fields concatenated in declaration
/// order; any other scalar, string or array value encodes as a single-field
/// payload. Field names never reach the wire. Nested records, lists and maps
/// have no wire mapping: the call fails with
/// [`PacketError::UnsupportedType`] naming the offending variant, and no
/// packet is produced.
pub fn serialize(opcode: i32, value: &Value, order: ByteOrder) -> Result<Packet, PacketError> {
    let mut builder = Builder::new(order);
    match value {
        Value::Record(fields) => {
            for (_, field) in fields {
                encode_field(&mut builder, field)?;
            }
        }
        other => encode_field(&mut builder, other)?,
    }
    Ok(builder.build_packet(opcode))
}

/// Decodes a packet payload into a pre-shaped value.
///
/// The target's variants are the decode template: for each field, the
/// variant selects which wire encoding to read and the decoded value is
/// written in place. The wire format carries no type tags, so a target whose
/// shape disagrees with what the sender encoded decodes bytes as the wrong
/// types without any error — both ends agreeing on the shape is the
/// caller's contract, not the codec's.
///
/// On failure the target may be partially updated: fields decoded before
/// the failing one keep their new values.
pub fn deserialize(packet: &Packet, target: &mut Value, order: ByteOrder) -> Result<(), PacketError> {
    let mut decomposer = Decomposer::new(packet, order);
    match target {
        Value::Record(fields) => {
            for (_, field) in fields {
                decode_field(&mut decomposer, field)?;
            }
        }
        other => decode_field(&mut decomposer, other)?,
    }
    Ok(())
}

fn encode_field(builder: &mut Builder, value: &Value) -> Result<(), PacketError> {
    match value {
        Value::Bool(v) => builder.add_bool(*v),
        Value::U8(v) => builder.add_u8(*v),
        Value::I8(v) => builder.add_i8(*v),
        Value::U16(v) => builder.add_u16(*v),
        Value::I16(v) => builder.add_i16(*v),
        Value::U32(v) => builder.add_u32(*v),
        Value::I32(v) => builder.add_i32(*v),
        Value::U64(v) => builder.add_u64(*v),
        Value::I64(v) => builder.add_i64(*v),
        Value::F32(v) => builder.add_f32(*v),
        Value::F64(v) => builder.add_f64(*v),
        Value::Complex64(v) => builder.add_complex64(*v),
        Value::Complex128(v) => builder.add_complex128(*v),
        Value::Char(v) => builder.add_char(*v),
        Value::Str(v) => builder.add_str(v),
        Value::BoolArray(v) => builder.add_bool_array(v),
        Value::U8Array(v) => builder.add_u8_array(v),
        Value::I8Array(v) => builder.add_i8_array(v),
        Value::U16Array(v) => builder.add_u16_array(v),
        Value::I16Array(v) => builder.add_i16_array(v),
        Value::U32Array(v) => builder.add_u32_array(v),
        Value::I32Array(v) => builder.add_i32_array(v),
        Value::U64Array(v) => builder.add_u64_array(v),
        Value::I64Array(v) => builder.add_i64_array(v),
        Value::F32Array(v) => builder.add_f32_array(v),
        Value::F64Array(v) => builder.add_f64_array(v),
        Value::Complex64Array(v) => builder.add_complex64_array(v),
        Value::Complex128Array(v) => builder.add_complex128_array(v),
        Value::CharArray(v) => builder.add_char_array(v),
        Value::Record(_) | Value::List(_) | Value::Map(_) => {
            return Err(PacketError::UnsupportedType(value.type_name()))
        }
    }
    Ok(())
}

fn decode_field(decomposer: &mut Decomposer<'_>, target: &mut Value) -> Result<(), PacketError> {
    match target {
        Value::Bool(v) => *v = decomposer.read_bool()?,
        Value::U8(v) => *v = decomposer.read_u8()?,
        Value::I8(v) => *v = decomposer.read_i8()?,
        Value::U16(v) => *v = decomposer.read_u16()?,
        Value::I16(v) => *v = decomposer.read_i16()?,
        Value::U32(v) => *v = decomposer.read_u32()?,
        Value::I32(v) => *v = decomposer.read_i32()?,
        Value::U64(v) => *v = decomposer.read_u64()?,
        Value::I64(v) => *v = decomposer.read_i64()?,
        Value::F32(v) => *v = decomposer.read_f32()?,
        Value::F64(v) => *v = decomposer.read_f64()?,
        Value::Complex64(v) => *v = decomposer.read_complex64()?,
        Value::Complex128(v) => *v = decomposer.read_complex128()?,
        Value::Char(v) => *v = decomposer.read_char()?,
        Value::Str(v) => *v = decomposer.read_str()?,
        Value::BoolArray(v) => *v = decomposer.read_bool_array()?,
        Value::U8Array(v) => *v = decomposer.read_u8_array()?,
        Value::I8Array(v) => *v = decomposer.read_i8_array()?,
        Value::U16Array(v) => *v = decomposer.read_u16_array()?,
        Value::I16Array(v) => *v = decomposer.read_i16_array()?,
        Value::U32Array(v) => *v = decomposer.read_u32_array()?,
        Value::I32Array(v) => *v = decomposer.read_i32_array()?,
        Value::U64Array(v) => *v = decomposer.read_u64_array()?,
        Value::I64Array(v) => *v = decomposer.read_i64_array()?,
        Value::F32Array(v) => *v = decomposer.read_f32_array()?,
        Value::F64Array(v) => *v = decomposer.read_f64_array()?,
        Value::Complex64Array(v) => *v = decomposer.read_complex64_array()?,
        Value::Complex128Array(v) => *v = decomposer.read_complex128_array()?,
        Value::CharArray(v) => *v = decomposer.read_char_array()?,
        Value::Record(_) | Value::List(_) | Value::Map(_) => {
            return Err(PacketError::UnsupportedType(target.type_name()))
        }
    }
    Ok(())
}

//! Dynamic value tree for field-dispatch serialization.

use crate::{Complex128, Complex64};

/// A dynamically-typed value a packet field can hold.
///
/// The serializer walks a [`Value::Record`]'s fields in order and dispatches
/// on the variant to pick the wire encoding; the deserializer does the
/// reverse, using a pre-shaped value as the decode template. The set of
/// variants is closed: every wire encoding has exactly one variant, and the
/// aggregate variants (`Record`, `List`, `Map`) exist so the classification
/// step can name them when rejecting nesting.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    F32(f32),
    F64(f64),
    Complex64(Complex64),
    Complex128(Complex128),
    Char(char),
    Str(String),
    BoolArray(Vec<bool>),
    U8Array(Vec<u8>),
    I8Array(Vec<i8>),
    U16Array(Vec<u16>),
    I16Array(Vec<i16>),
    U32Array(Vec<u32>),
    I32Array(Vec<i32>),
    U64Array(Vec<u64>),
    I64Array(Vec<i64>),
    F32Array(Vec<f32>),
    F64Array(Vec<f64>),
    Complex64Array(Vec<Complex64>),
    Complex128Array(Vec<Complex128>),
    CharArray(Vec<char>),
    /// Named fields in declaration order. Field names never reach the wire;
    /// only position does.
    Record(Vec<(String, Value)>),
    /// Not encodable; named by [`Value::type_name`] in rejection errors.
    List(Vec<Value>),
    /// Not encodable; named by [`Value::type_name`] in rejection errors.
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// The variant's name, as used in `UnsupportedType` errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::U8(_) => "u8",
            Value::I8(_) => "i8",
            Value::U16(_) => "u16",
            Value::I16(_) => "i16",
            Value::U32(_) => "u32",
            Value::I32(_) => "i32",
            Value::U64(_) => "u64",
            Value::I64(_) => "i64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Complex64(_) => "complex64",
            Value::Complex128(_) => "complex128",
            Value::Char(_) => "char",
            Value::Str(_) => "str",
            Value::BoolArray(_) => "bool array",
            Value::U8Array(_) => "u8 array",
            Value::I8Array(_) => "i8 array",
            Value::U16Array(_) => "u16 array",
            Value::I16Array(_) => "i16 array",
            Value::U32Array(_) => "u32 array",
            Value::I32Array(_) => "i32 array",
            Value::U64Array(_) => "u64 array",
            Value::I64Array(_) => "i64 array",
            Value::F32Array(_) => "f32 array",
            Value::F64Array(_) => "f64 array",
            Value::Complex64Array(_) => "complex64 array",
            Value::Complex128Array(_) => "complex128 array",
            Value::CharArray(_) => "char array",
            Value::Record(_) => "record",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Convenience constructor for a record value.
    pub fn record(fields: Vec<(&str, Value)>) -> Value {
        Value::Record(
            fields
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value))
                .collect(),
        )
    }
}

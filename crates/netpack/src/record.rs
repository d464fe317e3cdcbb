//! Static-dispatch message records.
//!
//! The [`Value`](crate::Value) path resolves field types at run time. The
//! traits here resolve them at compile time instead: a type implementing
//! [`Record`] names its fields and their order once, and the compiler emits
//! the straight-line encode/decode for that exact shape. The
//! [`wire_record!`] macro writes the implementation from a struct
//! definition.

use crate::{Builder, ByteOrder, Complex128, Complex64, Decomposer, Packet, PacketError};

/// A type with exactly one wire encoding, usable as a record field.
pub trait WireField: Sized {
    /// Appends this value's encoding to the builder.
    fn add_to(&self, builder: &mut Builder);
    /// Reads one value of this type from the decomposer.
    fn read_from(decomposer: &mut Decomposer<'_>) -> Result<Self, PacketError>;
}

macro_rules! scalar_field {
    ($($ty:ty => $add:ident / $read:ident),+ $(,)?) => {
        $(
            impl WireField for $ty {
                fn add_to(&self, builder: &mut Builder) {
                    builder.$add(*self);
                }
                fn read_from(decomposer: &mut Decomposer<'_>) -> Result<Self, PacketError> {
                    decomposer.$read()
                }
            }
        )+
    };
}

macro_rules! array_field {
    ($($ty:ty => $add:ident / $read:ident),+ $(,)?) => {
        $(
            impl WireField for Vec<$ty> {
                fn add_to(&self, builder: &mut Builder) {
                    builder.$add(self);
                }
                fn read_from(decomposer: &mut Decomposer<'_>) -> Result<Self, PacketError> {
                    decomposer.$read()
                }
            }
        )+
    };
}

scalar_field!(
    bool => add_bool / read_bool,
    u8 => add_u8 / read_u8,
    i8 => add_i8 / read_i8,
    u16 => add_u16 / read_u16,
    i16 => add_i16 / read_i16,
    u32 => add_u32 / read_u32,
    i32 => add_i32 / read_i32,
    u64 => add_u64 / read_u64,
    i64 => add_i64 / read_i64,
    f32 => add_f32 / read_f32,
    f64 => add_f64 / read_f64,
    Complex64 => add_complex64 / read_complex64,
    Complex128 => add_complex128 / read_complex128,
    char => add_char / read_char,
);

array_field!(
    bool => add_bool_array / read_bool_array,
    u8 => add_u8_array / read_u8_array,
    i8 => add_i8_array / read_i8_array,
    u16 => add_u16_array / read_u16_array,
    i16 => add_i16_array / read_i16_array,
    u32 => add_u32_array / read_u32_array,
    i32 => add_i32_array / read_i32_array,
    u64 => add_u64_array / read_u64_array,
    i64 => add_i64_array / read_i64_array,
    f32 => add_f32_array / read_f32_array,
    f64 => add_f64_array / read_f64_array,
    Complex64 => add_complex64_array / read_complex64_array,
    Complex128 => add_complex128_array / read_complex128_array,
    char => add_char_array / read_char_array,
);

impl WireField for String {
    fn add_to(&self, builder: &mut Builder) {
        builder.add_str(self);
    }
    fn read_from(decomposer: &mut Decomposer<'_>) -> Result<Self, PacketError> {
        decomposer.read_str()
    }
}

/// A message type with a fixed, ordered field list.
///
/// Both sides of a connection must use the same field order and types; the
/// wire format is positional. Usually implemented via [`wire_record!`].
pub trait Record: Default {
    /// Appends every field's encoding to the builder, in declaration order.
    fn write_fields(&self, builder: &mut Builder);
    /// Reads every field from the decomposer, in declaration order.
    ///
    /// On failure, fields read before the failing one keep their decoded
    /// values.
    fn read_fields(&mut self, decomposer: &mut Decomposer<'_>) -> Result<(), PacketError>;
}

/// Encodes a record into a framed packet.
///
/// Infallible: every field of a [`Record`] has a wire encoding by
/// construction.
pub fn serialize_record<R: Record>(opcode: i32, record: &R, order: ByteOrder) -> Packet {
    let mut builder = Builder::new(order);
    record.write_fields(&mut builder);
    builder.build_packet(opcode)
}

/// Decodes a packet payload into a record in place.
pub fn deserialize_record<R: Record>(
    packet: &Packet,
    target: &mut R,
    order: ByteOrder,
) -> Result<(), PacketError> {
    let mut decomposer = Decomposer::new(packet, order);
    target.read_fields(&mut decomposer)
}

/// Defines a struct and derives its [`Record`] implementation.
///
/// Fields encode and decode in declaration order. Every field type must
/// implement [`WireField`].
///
/// ```
/// use netpack::{deserialize_record, serialize_record, wire_record, ByteOrder};
///
/// wire_record! {
///     pub struct Person {
///         pub name: String,
///         pub age: i32,
///         pub numbers: Vec<u8>,
///     }
/// }
///
/// let person = Person {
///     name: "Vasya".into(),
///     age: 16,
///     numbers: vec![32, 25, 78],
/// };
/// let packet = serialize_record(32, &person, ByteOrder::Big);
///
/// let mut decoded = Person::default();
/// deserialize_record(&packet, &mut decoded, ByteOrder::Big).unwrap();
/// assert_eq!(decoded, person);
/// ```
#[macro_export]
macro_rules! wire_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($(#[$field_meta:meta])* $field_vis:vis $field:ident : $ty:ty),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $($(#[$field_meta])* $field_vis $field: $ty,)+
        }

        impl $crate::Record for $name {
            fn write_fields(&self, builder: &mut $crate::Builder) {
                $($crate::WireField::add_to(&self.$field, builder);)+
            }

            fn read_fields(
                &mut self,
                decomposer: &mut $crate::Decomposer<'_>,
            ) -> ::std::result::Result<(), $crate::PacketError> {
                $(self.$field = $crate::WireField::read_from(decomposer)?;)+
                Ok(())
            }
        }
    };
}

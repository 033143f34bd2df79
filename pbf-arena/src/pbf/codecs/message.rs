//! A zero-copy protobuf cursor.
//!
//! The decode path walks the wire format directly instead of materializing
//! generated message structs: strings and packed arrays are borrowed from
//! the decompressed block and only decoded while the entities are built.

use std::marker::PhantomData;

use super::varint::{decode_varint, zigzag_decode};
use crate::error::FormatError;

type Result<T> = std::result::Result<T, FormatError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    Fixed32 = 5,
}

impl WireType {
    fn from_u8(value: u8) -> Result<WireType> {
        match value {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::Fixed64),
            2 => Ok(WireType::LengthDelimited),
            5 => Ok(WireType::Fixed32),
            other => Err(FormatError::UnknownWireType(other)),
        }
    }
}

/// Cursor over the fields of one message.
///
/// Call [`Message::next`] to advance to the next field, then exactly one of
/// the getters or [`Message::skip`].
#[derive(Debug, Clone)]
pub struct Message<'a> {
    data: &'a [u8],
    tag: u32,
    wire_type: WireType,
}

impl<'a> Message<'a> {
    pub fn new(data: &'a [u8]) -> Message<'a> {
        Message {
            data,
            tag: 0,
            wire_type: WireType::Varint,
        }
    }

    /// Advance to the next field. Returns `false` at the end of the message.
    pub fn next(&mut self) -> Result<bool> {
        if self.data.is_empty() {
            return Ok(false);
        }
        let key = decode_varint(&mut self.data)?;
        let tag = key >> 3;
        if tag == 0 || tag > u32::MAX as u64 >> 3 {
            return Err(FormatError::OutOfRange {
                what: "field tag",
                value: tag as i64,
            });
        }
        self.tag = tag as u32;
        self.wire_type = WireType::from_u8((key & 0x07) as u8)?;
        Ok(true)
    }

    pub fn tag(&self) -> u32 {
        self.tag
    }

    pub fn wire_type(&self) -> WireType {
        self.wire_type
    }

    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    fn expect(&self, wire_type: WireType) -> Result<()> {
        if self.wire_type != wire_type {
            return Err(FormatError::WireTypeMismatch {
                tag: self.tag,
                expected: wire_type as u8,
                found: self.wire_type as u8,
            });
        }
        Ok(())
    }

    pub fn get_varint(&mut self) -> Result<u64> {
        self.expect(WireType::Varint)?;
        decode_varint(&mut self.data)
    }

    pub fn get_int64(&mut self) -> Result<i64> {
        self.get_varint().map(|v| v as i64)
    }

    pub fn get_int32(&mut self) -> Result<i32> {
        self.get_varint().map(|v| v as i64 as i32)
    }

    pub fn get_uint32(&mut self) -> Result<u32> {
        self.get_varint().map(|v| v as u32)
    }

    pub fn get_sint64(&mut self) -> Result<i64> {
        self.get_varint().map(zigzag_decode)
    }

    pub fn get_sint32(&mut self) -> Result<i32> {
        self.get_varint().map(|v| zigzag_decode(v) as i32)
    }

    pub fn get_bool(&mut self) -> Result<bool> {
        self.get_varint().map(|v| v != 0)
    }

    pub fn get_bytes(&mut self) -> Result<&'a [u8]> {
        self.expect(WireType::LengthDelimited)?;
        let length = decode_varint(&mut self.data)?;
        if length > self.data.len() as u64 {
            return Err(FormatError::EndOfBuffer("length-delimited field"));
        }
        let (bytes, rest) = self.data.split_at(length as usize);
        self.data = rest;
        Ok(bytes)
    }

    pub fn get_string(&mut self) -> Result<&'a str> {
        let bytes = self.get_bytes()?;
        std::str::from_utf8(bytes).map_err(|_| FormatError::InvalidUtf8)
    }

    pub fn get_message(&mut self) -> Result<Message<'a>> {
        self.get_bytes().map(Message::new)
    }

    pub fn get_packed_uint32(&mut self) -> Result<Packed<'a, u32>> {
        self.get_packed(|v| v as u32)
    }

    pub fn get_packed_int32(&mut self) -> Result<Packed<'a, i32>> {
        self.get_packed(|v| v as i64 as i32)
    }

    pub fn get_packed_sint32(&mut self) -> Result<Packed<'a, i32>> {
        self.get_packed(|v| zigzag_decode(v) as i32)
    }

    pub fn get_packed_int64(&mut self) -> Result<Packed<'a, i64>> {
        self.get_packed(|v| v as i64)
    }

    pub fn get_packed_sint64(&mut self) -> Result<Packed<'a, i64>> {
        self.get_packed(zigzag_decode)
    }

    pub fn get_packed_bool(&mut self) -> Result<Packed<'a, bool>> {
        self.get_packed(|v| v != 0)
    }

    fn get_packed<T>(&mut self, convert: fn(u64) -> T) -> Result<Packed<'a, T>> {
        Ok(Packed {
            data: self.get_bytes()?,
            convert,
            _marker: PhantomData,
        })
    }

    /// Skip the current field.
    pub fn skip(&mut self) -> Result<()> {
        let width = match self.wire_type {
            WireType::Varint => {
                decode_varint(&mut self.data)?;
                return Ok(());
            }
            WireType::LengthDelimited => {
                self.get_bytes()?;
                return Ok(());
            }
            WireType::Fixed64 => 8,
            WireType::Fixed32 => 4,
        };
        if self.data.len() < width {
            return Err(FormatError::EndOfBuffer("fixed-width field"));
        }
        self.data = &self.data[width..];
        Ok(())
    }
}

/// Lazily decoded packed repeated field.
#[derive(Clone)]
pub struct Packed<'a, T> {
    data: &'a [u8],
    convert: fn(u64) -> T,
    _marker: PhantomData<T>,
}

impl<'a, T> Packed<'a, T> {
    pub fn empty() -> Packed<'a, T>
    where
        T: Default,
    {
        Packed {
            data: &[],
            convert: |_| T::default(),
            _marker: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements. Every varint ends in a byte without the
    /// continuation bit, so this is a count, not a decode.
    pub fn len(&self) -> usize {
        self.data.iter().filter(|b| **b & 0x80 == 0).count()
    }

    /// Decode the next element, failing if there is none.
    pub fn next_required(&mut self, what: &'static str) -> Result<T> {
        match self.next() {
            Some(value) => value,
            None => Err(FormatError::LengthMismatch(what)),
        }
    }
}

impl<T> Iterator for Packed<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        if self.data.is_empty() {
            return None;
        }
        Some(decode_varint(&mut self.data).map(self.convert))
    }
}

#[cfg(test)]
mod tests {
    use super::super::varint::{encode_varint, zigzag_encode};
    use super::*;

    fn key(tag: u32, wire_type: u8, out: &mut Vec<u8>) {
        encode_varint(((tag as u64) << 3) | wire_type as u64, out);
    }

    fn sample() -> Vec<u8> {
        let mut out = Vec::new();
        key(1, 0, &mut out);
        encode_varint(150, &mut out);
        key(2, 2, &mut out);
        encode_varint(5, &mut out);
        out.extend_from_slice(b"hello");
        key(3, 2, &mut out);
        let mut packed = Vec::new();
        for v in [-1i64, 0, 300] {
            encode_varint(zigzag_encode(v), &mut packed);
        }
        encode_varint(packed.len() as u64, &mut out);
        out.extend_from_slice(&packed);
        key(4, 5, &mut out);
        out.extend_from_slice(&[1, 2, 3, 4]);
        key(5, 1, &mut out);
        out.extend_from_slice(&[0; 8]);
        out
    }

    #[test]
    fn test_walk_fields() {
        let data = sample();
        let mut message = Message::new(&data);

        assert!(message.next().unwrap());
        assert_eq!(message.tag(), 1);
        assert_eq!(message.get_int64().unwrap(), 150);

        assert!(message.next().unwrap());
        assert_eq!(message.tag(), 2);
        assert_eq!(message.get_string().unwrap(), "hello");

        assert!(message.next().unwrap());
        let mut packed = message.get_packed_sint64().unwrap();
        assert_eq!(packed.len(), 3);
        let values: Vec<i64> = packed.by_ref().map(|v| v.unwrap()).collect();
        assert_eq!(values, vec![-1, 0, 300]);
        assert!(packed.next_required("test").is_err());

        assert!(message.next().unwrap());
        assert_eq!(message.wire_type(), WireType::Fixed32);
        message.skip().unwrap();
        assert!(message.next().unwrap());
        message.skip().unwrap();

        assert!(!message.next().unwrap());
    }

    #[test]
    fn test_wire_type_mismatch() {
        let data = sample();
        let mut message = Message::new(&data);
        message.next().unwrap();
        assert_eq!(
            message.get_bytes(),
            Err(FormatError::WireTypeMismatch {
                tag: 1,
                expected: 2,
                found: 0
            })
        );
    }

    #[test]
    fn test_truncated_length() {
        let mut data = Vec::new();
        key(2, 2, &mut data);
        encode_varint(100, &mut data);
        data.extend_from_slice(b"short");
        let mut message = Message::new(&data);
        message.next().unwrap();
        assert_eq!(
            message.get_bytes(),
            Err(FormatError::EndOfBuffer("length-delimited field"))
        );
    }

    #[test]
    fn test_unknown_wire_type() {
        let mut data = Vec::new();
        key(1, 3, &mut data);
        let mut message = Message::new(&data);
        assert_eq!(message.next(), Err(FormatError::UnknownWireType(3)));
    }
}

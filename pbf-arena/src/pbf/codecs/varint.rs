//! Base-128 varints, zigzag mapping and delta sequences.

use crate::error::FormatError;

/// A 64-bit value never needs more than this many bytes.
pub const MAX_VARINT_LENGTH: usize = 10;

/// Decode one varint from the front of `data`, advancing the slice past it.
pub fn decode_varint(data: &mut &[u8]) -> Result<u64, FormatError> {
    let mut value: u64 = 0;
    for (i, byte) in data.iter().enumerate() {
        if i == MAX_VARINT_LENGTH {
            return Err(FormatError::VarintTooLong);
        }
        value |= ((byte & 0x7f) as u64) << (7 * i);
        if byte & 0x80 == 0 {
            *data = &data[i + 1..];
            return Ok(value);
        }
    }
    if data.len() >= MAX_VARINT_LENGTH {
        Err(FormatError::VarintTooLong)
    } else {
        Err(FormatError::EndOfBuffer("varint"))
    }
}

pub fn encode_varint(mut value: u64, out: &mut Vec<u8>) {
    while value >= 0x80 {
        out.push((value as u8) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

pub fn zigzag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

pub fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Running total over a delta-coded sequence. Use one per sequence.
#[derive(Debug, Default, Clone)]
pub struct DeltaDecoder {
    value: i64,
}

impl DeltaDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, delta: i64) -> i64 {
        self.value = self.value.wrapping_add(delta);
        self.value
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

/// Counterpart of [`DeltaDecoder`] for the write path.
#[derive(Debug, Default, Clone)]
pub struct DeltaEncoder {
    value: i64,
}

impl DeltaEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, value: i64) -> i64 {
        let delta = value.wrapping_sub(self.value);
        self.value = value;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encoded(value: u64) -> Vec<u8> {
        let mut out = Vec::new();
        encode_varint(value, &mut out);
        out
    }

    #[test]
    fn test_known_values() {
        assert_eq!(encoded(0), vec![0x00]);
        assert_eq!(encoded(1), vec![0x01]);
        assert_eq!(encoded(300), vec![0xac, 0x02]);
        assert_eq!(encoded(u64::MAX).len(), MAX_VARINT_LENGTH);

        let mut data: &[u8] = &[0xac, 0x02, 0x05];
        assert_eq!(decode_varint(&mut data), Ok(300));
        assert_eq!(data, &[0x05]);
    }

    #[test]
    fn test_zigzag() {
        assert_eq!(zigzag_encode(0), 0);
        assert_eq!(zigzag_encode(-1), 1);
        assert_eq!(zigzag_encode(1), 2);
        assert_eq!(zigzag_encode(-2), 3);
        assert_eq!(zigzag_decode(4294967294), 2147483647);
        assert_eq!(zigzag_decode(u64::MAX), i64::MIN);
    }

    #[test]
    fn test_too_long() {
        let mut data: &[u8] = &[0xff; 11];
        assert_eq!(decode_varint(&mut data), Err(FormatError::VarintTooLong));

        let mut data: &[u8] = &[0x80; 10];
        assert_eq!(decode_varint(&mut data), Err(FormatError::VarintTooLong));
    }

    #[test]
    fn test_truncated() {
        let mut data: &[u8] = &[0x80, 0x80];
        assert_eq!(
            decode_varint(&mut data),
            Err(FormatError::EndOfBuffer("varint"))
        );
        let mut data: &[u8] = &[];
        assert!(decode_varint(&mut data).is_err());
    }

    #[test]
    fn test_delta() {
        let mut decoder = DeltaDecoder::new();
        let values: Vec<i64> = [5, 1, -2, 0, 10].iter().map(|d| decoder.update(*d)).collect();
        assert_eq!(values, vec![5, 6, 4, 4, 14]);
    }

    proptest! {
        #[test]
        fn prop_varint_round_trip(value in any::<u64>()) {
            let bytes = encoded(value);
            let mut data = bytes.as_slice();
            prop_assert_eq!(decode_varint(&mut data), Ok(value));
            prop_assert!(data.is_empty());
        }

        #[test]
        fn prop_zigzag_round_trip(value in any::<i64>()) {
            prop_assert_eq!(zigzag_decode(zigzag_encode(value)), value);
        }

        #[test]
        fn prop_delta_round_trip(values in proptest::collection::vec(any::<i64>(), 0..64)) {
            let mut encoder = DeltaEncoder::new();
            let mut decoder = DeltaDecoder::new();
            let decoded: Vec<i64> = values
                .iter()
                .map(|v| decoder.update(encoder.update(*v)))
                .collect();
            prop_assert_eq!(decoded, values);
        }
    }
}

use super::message::Message;
use crate::error::FormatError;
use crate::osm::{Location, Timestamp, COORDINATE_PRECISION};

pub const DEFAULT_GRANULARITY: i32 = 100;
pub const DEFAULT_DATE_GRANULARITY: i32 = 1000;

// Wire coordinates are in nanodegrees before the block granularity applies.
const NANODEGREES_PER_UNIT: i64 = 1_000_000_000 / COORDINATE_PRECISION as i64;

/// Block-wide parameters for converting coordinates and timestamps between
/// the wire and the in-memory representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCodec {
    granularity: i64,
    date_granularity: i64,
    lat_offset: i64,
    lon_offset: i64,
}

impl Default for FieldCodec {
    fn default() -> Self {
        Self::new(DEFAULT_GRANULARITY, DEFAULT_DATE_GRANULARITY)
    }
}

impl FieldCodec {
    pub fn new(granularity: i32, date_granularity: i32) -> Self {
        Self {
            granularity: granularity as i64,
            date_granularity: date_granularity as i64,
            lat_offset: 0,
            lon_offset: 0,
        }
    }

    pub fn with_offsets(mut self, lat_offset: i64, lon_offset: i64) -> Self {
        self.lat_offset = lat_offset;
        self.lon_offset = lon_offset;
        self
    }

    pub fn granularity(&self) -> i32 {
        self.granularity as i32
    }

    pub fn date_granularity(&self) -> i32 {
        self.date_granularity as i32
    }

    fn decode_coordinate(&self, raw: i64, offset: i64, what: &'static str) -> Result<i32, FormatError> {
        let nano = raw
            .checked_mul(self.granularity)
            .and_then(|v| v.checked_add(offset))
            .ok_or(FormatError::OutOfRange { what, value: raw })?;
        i32::try_from(nano / NANODEGREES_PER_UNIT).map_err(|_| FormatError::OutOfRange { what, value: raw })
    }

    pub fn decode_location(&self, raw_lon: i64, raw_lat: i64) -> Result<Location, FormatError> {
        Ok(Location::new(
            self.decode_coordinate(raw_lon, self.lon_offset, "longitude")?,
            self.decode_coordinate(raw_lat, self.lat_offset, "latitude")?,
        ))
    }

    pub fn encode_lon(&self, x: i32) -> i64 {
        (x as i64 * NANODEGREES_PER_UNIT - self.lon_offset) / self.granularity
    }

    pub fn encode_lat(&self, y: i32) -> i64 {
        (y as i64 * NANODEGREES_PER_UNIT - self.lat_offset) / self.granularity
    }

    /// Raw timestamps count `date_granularity` milliseconds.
    pub fn decode_timestamp(&self, raw: i64) -> Result<Timestamp, FormatError> {
        let seconds = raw
            .checked_mul(self.date_granularity)
            .map(|ms| ms / 1000)
            .and_then(|s| u32::try_from(s).ok())
            .ok_or(FormatError::OutOfRange {
                what: "timestamp",
                value: raw,
            })?;
        Ok(Timestamp::new(seconds))
    }

    pub fn encode_timestamp(&self, timestamp: Timestamp) -> i64 {
        timestamp.seconds() as i64 * 1000 / self.date_granularity
    }
}

/// The strings of one primitive block, borrowed from the block bytes.
/// All strings are checked for valid UTF-8 once, when the table is read.
#[derive(Debug, Default)]
pub struct StringTable<'a> {
    strings: Vec<&'a str>,
}

impl<'a> StringTable<'a> {
    pub fn decode(mut message: Message<'a>) -> Result<StringTable<'a>, FormatError> {
        let mut strings = Vec::new();
        while message.next()? {
            match message.tag() {
                1 => strings.push(message.get_string()?),
                _ => message.skip()?,
            }
        }
        Ok(StringTable { strings })
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn get<I>(&self, index: I) -> Result<&'a str, FormatError>
    where
        I: TryInto<usize> + Copy + Into<i64>,
    {
        TryInto::<usize>::try_into(index)
            .ok()
            .and_then(|i| self.strings.get(i).copied())
            .ok_or_else(|| FormatError::StringIndexOutOfRange(Into::<i64>::into(index) as u64))
    }
}

use log::info;
use protobuf::Message as _;
use serde::{Deserialize, Serialize};

use super::message::Message;
use crate::error::{FormatError, Result};
use crate::osm::{BoundingBox, Location, Timestamp};
use crate::pbf::proto::osmformat;

pub const FEATURE_SCHEMA: &str = "OsmSchema-V0.6";
pub const FEATURE_DENSE_NODES: &str = "DenseNodes";
pub const FEATURE_HISTORICAL: &str = "HistoricalInformation";
pub const FEATURE_LOCATIONS_ON_WAYS: &str = "LocationsOnWays";

const SUPPORTED_FEATURES: [&str; 3] = [FEATURE_SCHEMA, FEATURE_DENSE_NODES, FEATURE_HISTORICAL];

// Header bounding boxes are in nanodegrees.
const NANODEGREES_PER_UNIT: i64 = 100;

/// File-level information from the `OSMHeader` blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub boxes: Vec<BoundingBox>,
    pub required_features: Vec<String>,
    pub optional_features: Vec<String>,
    pub writing_program: Option<String>,
    pub source: Option<String>,
    pub replication_timestamp: Option<Timestamp>,
    pub replication_sequence_number: Option<i64>,
    pub replication_base_url: Option<String>,
    /// Set for history files, which hold several versions of an object and
    /// deleted objects.
    pub has_multiple_object_versions: bool,
}

impl Header {
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.boxes.first().copied()
    }

    pub fn has_optional_feature(&self, feature: &str) -> bool {
        self.optional_features.iter().any(|f| f == feature)
    }

    pub fn has_locations_on_ways(&self) -> bool {
        self.has_optional_feature(FEATURE_LOCATIONS_ON_WAYS)
    }
}

fn bbox_coordinate(raw: i64, what: &'static str) -> std::result::Result<i32, FormatError> {
    i32::try_from(raw / NANODEGREES_PER_UNIT).map_err(|_| FormatError::OutOfRange { what, value: raw })
}

fn decode_bbox(mut message: Message<'_>) -> Result<BoundingBox> {
    let (mut left, mut right, mut top, mut bottom) = (0, 0, 0, 0);
    while message.next()? {
        match message.tag() {
            1 => left = message.get_sint64()?,
            2 => right = message.get_sint64()?,
            3 => top = message.get_sint64()?,
            4 => bottom = message.get_sint64()?,
            _ => message.skip()?,
        }
    }
    Ok(BoundingBox::new(
        Location::new(
            bbox_coordinate(left, "bbox left")?,
            bbox_coordinate(bottom, "bbox bottom")?,
        ),
        Location::new(
            bbox_coordinate(right, "bbox right")?,
            bbox_coordinate(top, "bbox top")?,
        ),
    ))
}

/// Decode an uncompressed `HeaderBlock`. Required features other than the
/// schema, dense nodes and history are rejected.
pub fn decode_header(data: &[u8]) -> Result<Header> {
    let mut header = Header::default();
    let mut message = Message::new(data);
    while message.next()? {
        match message.tag() {
            1 => header.boxes.push(decode_bbox(message.get_message()?)?),
            4 => {
                let feature = message.get_string()?;
                if !SUPPORTED_FEATURES.contains(&feature) {
                    return Err(FormatError::UnsupportedFeature(feature.to_owned()).into());
                }
                if feature == FEATURE_HISTORICAL {
                    header.has_multiple_object_versions = true;
                }
                header.required_features.push(feature.to_owned());
            }
            5 => header.optional_features.push(message.get_string()?.to_owned()),
            16 => header.writing_program = Some(message.get_string()?.to_owned()),
            17 => header.source = Some(message.get_string()?.to_owned()),
            32 => {
                let raw = message.get_int64()?;
                let seconds = u32::try_from(raw).map_err(|_| FormatError::OutOfRange {
                    what: "replication timestamp",
                    value: raw,
                })?;
                header.replication_timestamp = Some(Timestamp::new(seconds));
            }
            33 => header.replication_sequence_number = Some(message.get_int64()?),
            34 => header.replication_base_url = Some(message.get_string()?.to_owned()),
            _ => message.skip()?,
        }
    }
    info!(
        "decoded header: program={:?} features={:?} history={}",
        header.writing_program, header.required_features, header.has_multiple_object_versions
    );
    Ok(header)
}

/// Serialize `header` as a `HeaderBlock`. Only the first bounding box is
/// written; the format has room for one.
pub fn encode_header(header: &Header) -> Result<Vec<u8>> {
    let mut block = osmformat::HeaderBlock::new();
    for feature in &header.required_features {
        block.required_features.push(feature.clone());
    }
    if header.has_multiple_object_versions
        && !header.required_features.iter().any(|f| f == FEATURE_HISTORICAL)
    {
        block.required_features.push(FEATURE_HISTORICAL.to_owned());
    }
    for feature in &header.optional_features {
        block.optional_features.push(feature.clone());
    }

    if let Some(bbox) = header.bounding_box().filter(BoundingBox::is_defined) {
        let mut header_bbox = osmformat::HeaderBBox::new();
        header_bbox.set_left(bbox.bottom_left.x() as i64 * NANODEGREES_PER_UNIT);
        header_bbox.set_bottom(bbox.bottom_left.y() as i64 * NANODEGREES_PER_UNIT);
        header_bbox.set_right(bbox.top_right.x() as i64 * NANODEGREES_PER_UNIT);
        header_bbox.set_top(bbox.top_right.y() as i64 * NANODEGREES_PER_UNIT);
        block.set_bbox(header_bbox);
    }
    if let Some(program) = &header.writing_program {
        block.set_writingprogram(program.clone());
    }
    if let Some(source) = &header.source {
        block.set_source(source.clone());
    }
    if let Some(timestamp) = header.replication_timestamp {
        block.set_osmosis_replication_timestamp(timestamp.seconds() as i64);
    }
    if let Some(sequence) = header.replication_sequence_number {
        block.set_osmosis_replication_sequence_number(sequence);
    }
    if let Some(url) = &header.replication_base_url {
        block.set_osmosis_replication_base_url(url.clone());
    }
    Ok(block.write_to_bytes()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Header {
        Header {
            boxes: vec![BoundingBox::new(
                Location::from_degrees(-1.5, 50.0),
                Location::from_degrees(2.25, 51.5),
            )],
            required_features: vec![FEATURE_SCHEMA.to_owned(), FEATURE_DENSE_NODES.to_owned()],
            optional_features: vec![FEATURE_LOCATIONS_ON_WAYS.to_owned()],
            writing_program: Some("pbf-arena-test".to_owned()),
            source: Some("unit test".to_owned()),
            replication_timestamp: Some(Timestamp::new(1_600_000_000)),
            replication_sequence_number: Some(4242),
            replication_base_url: Some("https://example.org/replication".to_owned()),
            has_multiple_object_versions: false,
        }
    }

    #[test]
    fn test_header_fields() {
        let header = sample();
        let decoded = decode_header(&encode_header(&header).unwrap()).unwrap();
        assert_eq!(decoded, header);
        assert!(decoded.has_locations_on_ways());
        assert_eq!(
            decoded.bounding_box().unwrap().top_right,
            Location::from_degrees(2.25, 51.5)
        );
    }

    #[test]
    fn test_history_flag() {
        let mut header = sample();
        header.has_multiple_object_versions = true;
        let decoded = decode_header(&encode_header(&header).unwrap()).unwrap();
        assert!(decoded.has_multiple_object_versions);
        assert!(decoded
            .required_features
            .iter()
            .any(|f| f == FEATURE_HISTORICAL));
    }

    #[test]
    fn test_unsupported_feature() {
        let mut header = sample();
        header.required_features.push("Sort.Type_then_ID".to_owned());
        let err = decode_header(&encode_header(&header).unwrap()).unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::UnsupportedFeature("Sort.Type_then_ID".to_owned()))
        );
    }

    #[test]
    fn test_empty_header() {
        let header = decode_header(&[]).unwrap();
        assert!(header.boxes.is_empty());
        assert!(header.writing_program.is_none());
        assert!(!header.has_multiple_object_versions);
    }
}

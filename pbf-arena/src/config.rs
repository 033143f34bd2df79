//! Reader configuration.

use std::env;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::osm::EntityBits;
use crate::pbf::codecs::DecodeOptions;

pub const DEFAULT_QUEUE_SIZE: usize = 20;
const MIN_QUEUE_SIZE: usize = 2;

pub const ENV_INPUT_QUEUE_SIZE: &str = "PBF_ARENA_MAX_INPUT_QUEUE_SIZE";
pub const ENV_OSMDATA_QUEUE_SIZE: &str = "PBF_ARENA_MAX_OSMDATA_QUEUE_SIZE";

/// What a reader decodes and how much it buffers ahead of the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Entity types to decode. With none of node, way or relation set only
    /// the header is read.
    pub read_types: EntityBits,
    /// Decode version, timestamp, changeset, uid, user and visibility.
    /// Always on for history files.
    pub read_metadata: bool,
    /// Framed blobs read ahead of the parser.
    pub input_queue_size: usize,
    /// Decode tasks in flight ahead of the consumer.
    pub output_queue_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            read_types: EntityBits::ALL,
            read_metadata: true,
            input_queue_size: DEFAULT_QUEUE_SIZE,
            output_queue_size: DEFAULT_QUEUE_SIZE,
        }
    }
}

impl ReaderConfig {
    /// Defaults with the queue sizes taken from
    /// `PBF_ARENA_MAX_INPUT_QUEUE_SIZE` and `PBF_ARENA_MAX_OSMDATA_QUEUE_SIZE`
    /// when they are set.
    pub fn from_env() -> Self {
        let input = env::var(ENV_INPUT_QUEUE_SIZE).ok();
        let output = env::var(ENV_OSMDATA_QUEUE_SIZE).ok();
        Self {
            input_queue_size: queue_size(ENV_INPUT_QUEUE_SIZE, input.as_deref()),
            output_queue_size: queue_size(ENV_OSMDATA_QUEUE_SIZE, output.as_deref()),
            ..Self::default()
        }
    }

    pub fn with_read_types(mut self, read_types: EntityBits) -> Self {
        self.read_types = read_types;
        self
    }

    pub fn with_read_metadata(mut self, read_metadata: bool) -> Self {
        self.read_metadata = read_metadata;
        self
    }

    /// True if nothing beyond the header has to be decoded.
    pub fn header_only(&self) -> bool {
        !self.read_types.intersects(EntityBits::NWR)
    }

    pub fn decode_options(&self, has_multiple_object_versions: bool) -> DecodeOptions {
        DecodeOptions {
            read_types: self.read_types & EntityBits::NWR,
            read_metadata: self.read_metadata || has_multiple_object_versions,
        }
    }
}

fn queue_size(name: &str, value: Option<&str>) -> usize {
    let Some(value) = value else {
        return DEFAULT_QUEUE_SIZE;
    };
    match value.trim().parse::<usize>() {
        Ok(size) => size.max(MIN_QUEUE_SIZE),
        Err(_) => {
            warn!("ignoring {}={:?}: not a number", name, value);
            DEFAULT_QUEUE_SIZE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_size() {
        assert_eq!(queue_size("X", None), DEFAULT_QUEUE_SIZE);
        assert_eq!(queue_size("X", Some("64")), 64);
        assert_eq!(queue_size("X", Some("0")), MIN_QUEUE_SIZE);
        assert_eq!(queue_size("X", Some("1")), MIN_QUEUE_SIZE);
        assert_eq!(queue_size("X", Some("lots")), DEFAULT_QUEUE_SIZE);
    }

    #[test]
    fn test_decode_options() {
        let config = ReaderConfig::default()
            .with_read_types(EntityBits::WAY | EntityBits::CHANGESET)
            .with_read_metadata(false);
        assert!(!config.header_only());

        let options = config.decode_options(false);
        assert_eq!(options.read_types, EntityBits::WAY);
        assert!(!options.read_metadata);
        assert!(config.decode_options(true).read_metadata);

        let config = ReaderConfig::default().with_read_types(EntityBits::CHANGESET);
        assert!(config.header_only());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ReaderConfig = serde_json::from_str(r#"{"output_queue_size": 4}"#).unwrap();
        assert_eq!(config.output_queue_size, 4);
        assert_eq!(config.input_queue_size, DEFAULT_QUEUE_SIZE);
        assert_eq!(config.read_types, EntityBits::ALL);
    }
}

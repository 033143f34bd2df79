//! Arena-backed OpenStreetMap data model with a parallel PBF reader and a
//! PBF writer.
//!
//! Entities live as aligned, type-tagged items in [`memory::Buffer`]s and
//! are read through zero-copy views from [`osm`]. Readers decode one PBF
//! block into one buffer; [`pbf::readers::ParallelReader`] does that on a
//! worker pool and still hands the buffers out in file order.
//!
//! # Modules
//!
//! * `memory` - The arena buffer and its items.
//! * `osm` - Views of nodes, ways, relations and changesets in a buffer.
//! * `builder` - Builders that write entities into a buffer.
//! * `models` - Owned, serializable copies of entities.
//! * `pbf` - Codecs, readers and writers for the PBF format.
//! * `storage` - Handle-based storage of items.
//!
//! # Example
//!
//! Count the ways of a file with a parallel reader:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use pbf_arena::config::ReaderConfig;
//! use pbf_arena::osm::EntityBits;
//! use pbf_arena::pbf::readers::ParallelReader;
//! use pbf_arena::thread::WorkerPool;
//!
//! let pool = Arc::new(WorkerPool::from_env().unwrap());
//! let config = ReaderConfig::from_env().with_read_types(EntityBits::WAY);
//! let mut reader = ParallelReader::from_path("path/to/osm.pbf", pool, config).unwrap();
//! let mut ways = 0;
//! while let Some(buffer) = reader.read().unwrap() {
//!     ways += buffer.ways().count();
//! }
//! ```
//!
//! Look up a way with everything it references:
//!
//! ```no_run
//! use pbf_arena::models::ElementType;
//! use pbf_arena::pbf::readers::IndexedReader;
//!
//! let mut reader = IndexedReader::from_path_with_cache("path/to/osm.pbf", 1000).unwrap();
//! let elements = reader.get_with_deps(ElementType::Way, 12345678).unwrap();
//! ```
//!
//! Write a file:
//!
//! ```no_run
//! use pbf_arena::models::{Element, Node};
//! use pbf_arena::pbf::writers::PbfWriter;
//!
//! let mut writer = PbfWriter::from_path("path/to/osm.pbf", true).unwrap();
//! writer.write_element(&Element::Node(Node::default())).unwrap();
//! writer.finish().unwrap();
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod memory;
pub mod models;
pub mod osm;
pub mod pbf;
pub mod storage;
pub mod thread;

pub use error::{Error, ErrorKind, FormatError, Result};
pub use memory::{AutoGrow, Buffer, Item, ItemType};

mod cached_reader;
mod indexed_reader;
mod iter_reader;
mod parallel_reader;
mod pipeline;
mod raw_reader;
mod traits;

pub use cached_reader::CachedReader;
pub use indexed_reader::IndexedReader;
pub use iter_reader::IterableReader;
pub use parallel_reader::ParallelReader;
pub use pipeline::{BlockDecoder, PrimitiveDecoder};
pub use raw_reader::PbfReader;
pub use traits::{BufferSource, PbfRandomRead, ReaderStatus};

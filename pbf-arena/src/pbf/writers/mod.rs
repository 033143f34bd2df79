mod raw_writer;

pub use raw_writer::{PbfWriter, MAX_BLOCK_ITEM_LENGTH};

//! The arena: an append-only byte buffer of aligned, type-tagged items.

mod buffer;
pub mod item;

pub use buffer::{AutoGrow, Buffer};
pub use item::{padded_length, Item, ItemIter, ItemType, ALIGN_BYTES, HEADER_SIZE};

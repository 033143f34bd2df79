//! Long-lived storage of items outside the buffers of a reader.

mod item_stash;

pub use item_stash::{ItemStash, StashHandle};

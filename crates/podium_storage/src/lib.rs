//! Local persistence for Podium.
//!
//! Two [`KeyValueStore`](podium_interface::KeyValueStore) backends are provided:
//!
//! - [`FileSystemStore`] - one JSON file per key, replaced atomically
//! - [`MemoryStore`] - process-local map for tests and ephemeral sessions
//!
//! On top of either, [`OutlineStore`] persists the last accepted outline in a
//! versioned envelope and never surfaces storage failures to its caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod memory;
mod outline_store;

pub use filesystem::FileSystemStore;
pub use memory::MemoryStore;
pub use outline_store::{ENVELOPE_VERSION, OUTLINE_KEY, OutlineStore};

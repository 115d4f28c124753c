//! In-process Adapters
//!
//! Port implementations that need no external system.

mod memory_store;

pub use memory_store::MemoryKeyValueStore;

//! Repository Ports
//!
//! Abstract interfaces for local persistence.

mod key_value_store;

pub use key_value_store::*;

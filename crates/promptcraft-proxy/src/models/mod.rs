//! Proxy API Models

mod proxy;

pub use proxy::*;

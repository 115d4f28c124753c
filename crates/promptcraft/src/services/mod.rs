//! Outbound Services
//!
//! HTTP clients used by the front end.

pub mod dispatcher;

pub use dispatcher::{DispatcherConfig, RequestDispatcher};

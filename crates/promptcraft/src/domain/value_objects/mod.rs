//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod dispatch_mode;
mod output_format;
mod target_model;
mod task_type;
mod theme;
mod tone;

pub use dispatch_mode::*;
pub use output_format::*;
pub use target_model::*;
pub use task_type::*;
pub use theme::*;
pub use tone::*;

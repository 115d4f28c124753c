//! Domain Services
//!
//! Pure functions and static catalogs over domain entities.

mod compiler;
mod model_catalog;
mod template_registry;

pub use compiler::*;
pub use model_catalog::*;
pub use template_registry::*;

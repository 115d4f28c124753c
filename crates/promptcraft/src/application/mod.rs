//! Application Layer
//!
//! Stateful components that coordinate domain functions and ports.

mod session;
mod settings_store;

pub use session::{PendingTurn, Session};
pub use settings_store::{SettingsStore, SETTINGS_KEY, THEME_KEY};

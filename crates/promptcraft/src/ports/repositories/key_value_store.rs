//! Key-Value Store Port
//!
//! Best-effort string storage scoped by fixed keys, the same contract a
//! browser's local storage offers.

use crate::domain::errors::DomainError;

/// Key-value persistence interface
///
/// Callers treat every error as recoverable: reads fall back to defaults
/// and failed writes leave in-memory state untouched.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), DomainError>;
}

use async_trait::async_trait;

use crate::errors::CoreError;

/// Trait abstraction over the durable key-value backend.
///
/// The record stores only ever call `get` once at startup and `set` with a
/// full replacement value after each mutation. Swapping the backend (file,
/// in-memory, platform storage bridge) touches nothing else in the crate.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw string stored under `key`. `Ok(None)` means the slot was
    /// never written.
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Replace the full value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}

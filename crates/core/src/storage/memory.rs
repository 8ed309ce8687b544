use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::CoreError;
use crate::storage::traits::KeyValueStore;

/// In-memory key-value backend. Nothing survives the process; used for tests
/// and for running the core without durable storage at all.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, e.g. to simulate data written by a previous run.
    pub fn seed(&self, key: &str, value: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))?;
        Ok(slots.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

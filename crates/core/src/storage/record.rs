use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::errors::CoreError;
use crate::models::history::HistoryItem;
use crate::models::language::Language;
use crate::models::profile::Profile;
use crate::storage::traits::KeyValueStore;

/// A value that lives in one named slot of the key-value backend.
///
/// `Default` doubles as the fail-open value: whenever the slot is missing,
/// unreadable, or unparseable, the store holds the default and the app keeps
/// working without persistence.
pub trait PersistedRecord: Clone + Default + Send + 'static {
    /// Name of the storage slot this record occupies.
    const SLOT: &'static str;

    fn encode(&self) -> Result<String, CoreError>;
    fn decode(raw: &str) -> Result<Self, CoreError>;
}

/// The salary profile slot. `None` until onboarding has completed.
impl PersistedRecord for Option<Profile> {
    const SLOT: &'static str = "cost-in-hours-profile";

    fn encode(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }

    fn decode(raw: &str) -> Result<Self, CoreError> {
        // Accepts both a bare profile object (what the slot normally holds)
        // and JSON null.
        Ok(serde_json::from_str(raw)?)
    }
}

/// The calculation history slot. Ordered newest-first.
impl PersistedRecord for Vec<HistoryItem> {
    const SLOT: &'static str = "cost-in-hours-history";

    fn encode(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }

    fn decode(raw: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// The language preference slot. Stored as a raw tag string, not JSON.
impl PersistedRecord for Language {
    const SLOT: &'static str = "cost-in-hours-language";

    fn encode(&self) -> Result<String, CoreError> {
        Ok(self.tag().to_string())
    }

    fn decode(raw: &str) -> Result<Self, CoreError> {
        Language::from_tag(raw.trim())
            .ok_or_else(|| CoreError::Deserialization(format!("unknown language tag {raw:?}")))
    }
}

/// Lifecycle of a record store. Reads are valid in every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Uninitialized,
    Loading,
    Ready,
}

/// One persisted record held in memory.
///
/// The in-memory value is the source of truth for the running session:
/// `write` replaces it synchronously and persists the full new value in a
/// fire-and-forget task. Persistence failures are logged, never rolled back,
/// never surfaced. In-flight writes are not serialized or cancelled — the
/// last one to complete wins in storage, which is acceptable for a
/// single-mutator app.
pub struct RecordStore<T: PersistedRecord> {
    backend: Arc<dyn KeyValueStore>,
    state: LoadState,
    value: T,
    in_flight: Vec<JoinHandle<()>>,
}

impl<T: PersistedRecord> RecordStore<T> {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            state: LoadState::Uninitialized,
            value: T::default(),
            in_flight: Vec::new(),
        }
    }

    /// Load the slot from the backend. Always ends in `Ready`: a read or
    /// parse failure is logged and the default value is kept (fail-open —
    /// the app must stay usable with a broken backend).
    pub async fn init(&mut self) {
        self.state = LoadState::Loading;
        match self.backend.get(T::SLOT).await {
            Ok(Some(raw)) => match T::decode(&raw) {
                Ok(value) => self.value = value,
                Err(e) => log::error!("Failed to parse stored {}: {e}", T::SLOT),
            },
            Ok(None) => {}
            Err(e) => log::error!("Failed to load {}: {e}", T::SLOT),
        }
        self.state = LoadState::Ready;
    }

    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Current in-memory value. While still loading this is the default.
    #[must_use]
    pub fn read(&self) -> &T {
        &self.value
    }

    /// Replace the in-memory value immediately and persist it in the
    /// background. The caller never waits on persistence.
    pub fn write(&mut self, value: T) {
        self.value = value.clone();

        let backend = Arc::clone(&self.backend);
        self.in_flight.retain(|task| !task.is_finished());
        self.in_flight.push(tokio::spawn(async move {
            let raw = match value.encode() {
                Ok(raw) => raw,
                Err(e) => {
                    log::error!("Failed to encode {}: {e}", T::SLOT);
                    return;
                }
            };
            if let Err(e) = backend.set(T::SLOT, &raw).await {
                log::error!("Failed to save {}: {e}", T::SLOT);
            }
        }));
    }

    /// Wait for every in-flight persistence task. Opt-in barrier for tests
    /// and shutdown paths; skipping it keeps the accepted
    /// write-lost-at-exit semantics.
    pub async fn flush(&mut self) {
        for task in self.in_flight.drain(..) {
            let _ = task.await;
        }
    }
}

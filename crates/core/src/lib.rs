pub mod errors;
pub mod format;
pub mod i18n;
pub mod models;
pub mod services;
pub mod storage;

use std::sync::Arc;

use errors::CoreError;
use models::history::HistoryItem;
use models::language::Language;
use models::profile::Profile;
use models::time_unit::TimeUnit;
use services::rate_service::RateService;
use storage::record::RecordStore;
use storage::traits::KeyValueStore;

/// Main entry point for the Cost in Hours core library.
///
/// Holds the three persisted records (profile, history, language preference)
/// and the rate calculator. The presentation layer owns one instance for the
/// lifetime of the process and calls `init` once before first use; reads
/// before or during loading observe the records' default values.
#[must_use]
pub struct CostInHours {
    profile: RecordStore<Option<Profile>>,
    history: RecordStore<Vec<HistoryItem>>,
    language: RecordStore<Language>,
    rate_service: RateService,
}

impl std::fmt::Debug for CostInHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostInHours")
            .field("onboarded", &self.profile.read().is_some())
            .field("history_items", &self.history.read().len())
            .field("language", &self.language.read())
            .finish()
    }
}

impl CostInHours {
    /// Create the core over a key-value backend. Records hold their defaults
    /// until `init` has run.
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            profile: RecordStore::new(Arc::clone(&backend)),
            history: RecordStore::new(Arc::clone(&backend)),
            language: RecordStore::new(backend),
            rate_service: RateService::new(),
        }
    }

    /// Load all three records from storage. Failures are logged inside the
    /// stores and recovered with defaults; this never fails.
    pub async fn init(&mut self) {
        self.profile.init().await;
        self.history.init().await;
        self.language.init().await;
    }

    /// Wait for any in-flight persistence. Optional; mutations never block
    /// on it, and a write lost at process exit is accepted.
    pub async fn flush(&mut self) {
        self.profile.flush().await;
        self.history.flush().await;
        self.language.flush().await;
    }

    // ── Profile ─────────────────────────────────────────────────────

    /// The current profile, or `None` before onboarding has completed.
    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.read().as_ref()
    }

    /// Whether first-run setup has completed.
    #[must_use]
    pub fn is_onboarded(&self) -> bool {
        self.profile.read().is_some()
    }

    /// Replace the profile wholesale. Used by both onboarding and profile
    /// edit; the new profile is validated before anything is written.
    pub fn set_profile(&mut self, profile: Profile) -> Result<(), CoreError> {
        profile.validate()?;
        self.profile.write(Some(profile));
        Ok(())
    }

    /// Hourly rate from the current profile, or `None` before onboarding.
    #[must_use]
    pub fn hourly_rate(&self) -> Option<f64> {
        self.profile()
            .map(|p| self.rate_service.hourly_rate(p.salary, p.work_hours_per_week))
    }

    /// Hourly rate at the future salary, or `None` when no future salary is
    /// set (or before onboarding).
    #[must_use]
    pub fn future_hourly_rate(&self) -> Option<f64> {
        let profile = self.profile()?;
        if !profile.has_future_salary() {
            return None;
        }
        Some(
            self.rate_service
                .hourly_rate(profile.future_salary, profile.work_hours_per_week),
        )
    }

    // ── Calculation ─────────────────────────────────────────────────

    /// Convert a price into the work hours needed to earn it and record the
    /// calculation in history (newest first).
    ///
    /// The returned item stores the result in hours regardless of
    /// `time_unit`; the unit is only a display hint carried with the entry.
    /// A blank product name is replaced with the localized "unnamed product"
    /// label for the current language.
    pub fn calculate(
        &mut self,
        price: f64,
        product_name: &str,
        time_unit: Option<TimeUnit>,
    ) -> Result<HistoryItem, CoreError> {
        self.rate_service.validate_price(price)?;
        let profile = self.profile.read().as_ref().ok_or(CoreError::ProfileMissing)?;

        let hourly_rate = self
            .rate_service
            .hourly_rate(profile.salary, profile.work_hours_per_week);
        let hours_needed = self.rate_service.hours_needed(price, hourly_rate);

        let name = product_name.trim();
        let name = if name.is_empty() {
            self.t("unnamedProduct")
        } else {
            name
        };

        let item = HistoryItem::new(name, price, &profile.currency, hours_needed, time_unit);

        let mut history = self.history.read().clone();
        history.insert(0, item.clone());
        self.history.write(history);

        Ok(item)
    }

    // ── History ─────────────────────────────────────────────────────

    /// All past calculations, newest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryItem] {
        self.history.read()
    }

    /// Remove one history item by id. Returns whether anything was removed.
    pub fn remove_history_item(&mut self, id: &str) -> bool {
        let mut history = self.history.read().clone();
        let before = history.len();
        history.retain(|item| item.id != id);
        let removed = history.len() != before;
        if removed {
            self.history.write(history);
        }
        removed
    }

    /// Delete all history.
    pub fn clear_history(&mut self) {
        if !self.history.read().is_empty() {
            self.history.write(Vec::new());
        }
    }

    // ── Language ────────────────────────────────────────────────────

    /// The active language (the default until the preference has loaded).
    #[must_use]
    pub fn language(&self) -> Language {
        *self.language.read()
    }

    pub fn set_language(&mut self, language: Language) {
        self.language.write(language);
    }

    /// Translate a key in the active language, falling back to English and
    /// then to the key itself.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate(self.language(), key)
    }
}

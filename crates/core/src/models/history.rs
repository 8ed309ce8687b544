use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time_unit::TimeUnit;

/// One past calculation. Items are never mutated after creation; the history
/// list is newest-first and items are only prepended, removed by id, or
/// bulk-cleared.
///
/// Serializes in camelCase so records written by earlier builds of the app
/// load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    /// Unique identifier, generated at creation.
    pub id: String,

    /// Product name as entered; blank input is replaced with a localized
    /// "unnamed product" label before the item is created.
    pub product_name: String,

    /// The entered price.
    pub price: f64,

    /// Snapshot of the profile currency at creation time. Not re-derived
    /// later — editing the profile does not rewrite old entries.
    pub currency: String,

    /// Computed result, always stored in hours regardless of display unit.
    pub hours_needed: f64,

    /// Creation timestamp (RFC 3339 on the wire).
    pub date: DateTime<Utc>,

    /// Display unit chosen when the item was created. Absent on entries that
    /// predate this field; readers must branch on presence and use the
    /// viewer's current unit choice when it is `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<TimeUnit>,
}

impl HistoryItem {
    pub fn new(
        product_name: impl Into<String>,
        price: f64,
        currency: impl Into<String>,
        hours_needed: f64,
        time_unit: Option<TimeUnit>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product_name: product_name.into(),
            price,
            currency: currency.into(),
            hours_needed,
            date: Utc::now(),
            time_unit,
        }
    }

    /// The unit this item should be displayed in: its own recorded unit when
    /// present, otherwise the viewer's current choice.
    #[must_use]
    pub fn display_unit(&self, viewer_unit: TimeUnit) -> TimeUnit {
        self.time_unit.unwrap_or(viewer_unit)
    }
}

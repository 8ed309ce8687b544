use serde::{Deserialize, Serialize};

/// Hours in a standard work day, used for display conversion only.
pub const HOURS_PER_DAY: f64 = 8.0;

/// Hours in a standard work week, used for display conversion only.
pub const HOURS_PER_WEEK: f64 = 40.0;

/// Average weeks per month (52 / 12, rounded). Fixed policy constant shared by
/// the hourly-rate calculation and the month display conversion.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Display unit for a converted work-time quantity.
///
/// Conversion uses a standard work calendar (8-hour day, 40-hour week),
/// deliberately independent of the profile's `work_hours_per_week`: changing
/// the profile changes the hourly rate but not what "a week" means on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Hour,
    Day,
    Week,
    Month,
}

impl TimeUnit {
    /// All units in picker order.
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
    ];

    /// Convert a quantity of work hours into this display unit.
    /// No rounding is applied here; display rounding lives in `format`.
    #[must_use]
    pub fn convert(self, hours: f64) -> f64 {
        match self {
            TimeUnit::Hour => hours,
            TimeUnit::Day => hours / HOURS_PER_DAY,
            TimeUnit::Week => hours / HOURS_PER_WEEK,
            TimeUnit::Month => hours / (HOURS_PER_WEEK * WEEKS_PER_MONTH),
        }
    }

    /// Translation key for the singular unit label.
    #[must_use]
    pub fn singular_key(self) -> &'static str {
        match self {
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
        }
    }

    /// Translation key for the plural unit label.
    #[must_use]
    pub fn plural_key(self) -> &'static str {
        match self {
            TimeUnit::Hour => "hours",
            TimeUnit::Day => "days",
            TimeUnit::Week => "weeks",
            TimeUnit::Month => "months",
        }
    }

    /// Pick the singular or plural label key for an already-converted value.
    ///
    /// Exact comparison on the converted value: `1.0` is singular,
    /// `1.04` and `0.0` are plural.
    #[must_use]
    pub fn label_key(self, converted_value: f64) -> &'static str {
        if converted_value == 1.0 {
            self.singular_key()
        } else {
            self.plural_key()
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.singular_key())
    }
}

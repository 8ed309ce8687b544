use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Currency symbols offered by profile pickers. Advisory only — `Profile.currency`
/// is stored as an opaque display string and is not checked against this list.
pub const CURRENCIES: [&str; 5] = ["₺", "$", "€", "£", "¥"];

/// Maximum accepted weekly work hours (hours in a week).
pub const MAX_WORK_HOURS_PER_WEEK: f64 = 168.0;

/// The user's salary profile. Created once by onboarding, replaced wholesale
/// by profile edits, never deleted.
///
/// Serializes in camelCase so records written by earlier builds of the app
/// load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Monthly gross income (always positive).
    pub salary: f64,

    /// Short display symbol (e.g., "₺", "$"). Opaque; not validated against
    /// the preset list.
    pub currency: String,

    /// Weekly work hours, in (0, 168].
    pub work_hours_per_week: f64,

    /// Expected future monthly salary; `0.0` means unset / not shown.
    #[serde(default)]
    pub future_salary: f64,
}

impl Profile {
    pub fn new(
        salary: f64,
        currency: impl Into<String>,
        work_hours_per_week: f64,
        future_salary: f64,
    ) -> Self {
        Self {
            salary,
            currency: currency.into(),
            work_hours_per_week,
            future_salary,
        }
    }

    /// Whether a future salary has been entered (`0` means unset).
    #[must_use]
    pub fn has_future_salary(&self) -> bool {
        self.future_salary > 0.0
    }

    /// Validate the invariants enforced at every entry point.
    /// Stored profiles are trusted at read time and never revalidated.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.salary.is_finite() || self.salary <= 0.0 {
            return Err(CoreError::ValidationError(
                "Salary must be a positive number".into(),
            ));
        }
        if !self.work_hours_per_week.is_finite()
            || self.work_hours_per_week <= 0.0
            || self.work_hours_per_week > MAX_WORK_HOURS_PER_WEEK
        {
            return Err(CoreError::ValidationError(format!(
                "Work hours per week must be between 1 and {MAX_WORK_HOURS_PER_WEEK}"
            )));
        }
        if !self.future_salary.is_finite() || self.future_salary < 0.0 {
            return Err(CoreError::ValidationError(
                "Future salary must be zero or a positive number".into(),
            ));
        }
        Ok(())
    }
}

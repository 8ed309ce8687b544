use crate::errors::CoreError;
use crate::models::profile::MAX_WORK_HOURS_PER_WEEK;
use crate::models::time_unit::WEEKS_PER_MONTH;

/// Converts a salary profile into an hourly rate and a price into the work
/// hours needed to earn it.
///
/// Pure arithmetic — no I/O, no rounding. Display rounding lives in `format`.
pub struct RateService;

impl RateService {
    pub fn new() -> Self {
        Self
    }

    /// Hourly rate from a monthly salary and weekly work hours:
    /// `salary / (work_hours_per_week * 4.33)`.
    ///
    /// Callers must keep `work_hours_per_week` positive (see
    /// [`RateService::validate_work_hours`]); the store never persists a zero
    /// value there.
    #[must_use]
    pub fn hourly_rate(&self, salary: f64, work_hours_per_week: f64) -> f64 {
        salary / (work_hours_per_week * WEEKS_PER_MONTH)
    }

    /// Work hours needed to earn `price` at `hourly_rate`.
    #[must_use]
    pub fn hours_needed(&self, price: f64, hourly_rate: f64) -> f64 {
        price / hourly_rate
    }

    /// Reject non-numeric, zero, or negative salary input.
    pub fn validate_salary(&self, salary: f64) -> Result<(), CoreError> {
        if !salary.is_finite() || salary <= 0.0 {
            return Err(CoreError::ValidationError(
                "Salary must be a positive number".into(),
            ));
        }
        Ok(())
    }

    /// Reject weekly work hours outside (0, 168].
    pub fn validate_work_hours(&self, work_hours_per_week: f64) -> Result<(), CoreError> {
        if !work_hours_per_week.is_finite()
            || work_hours_per_week <= 0.0
            || work_hours_per_week > MAX_WORK_HOURS_PER_WEEK
        {
            return Err(CoreError::ValidationError(format!(
                "Work hours per week must be between 1 and {MAX_WORK_HOURS_PER_WEEK}"
            )));
        }
        Ok(())
    }

    /// Reject non-numeric or negative future-salary input. Zero is allowed
    /// and means "unset".
    pub fn validate_future_salary(&self, future_salary: f64) -> Result<(), CoreError> {
        if !future_salary.is_finite() || future_salary < 0.0 {
            return Err(CoreError::ValidationError(
                "Future salary must be zero or a positive number".into(),
            ));
        }
        Ok(())
    }

    /// Reject non-numeric, zero, or negative price input.
    pub fn validate_price(&self, price: f64) -> Result<(), CoreError> {
        if !price.is_finite() || price <= 0.0 {
            return Err(CoreError::ValidationError(
                "Price must be a positive number".into(),
            ));
        }
        Ok(())
    }
}

impl Default for RateService {
    fn default() -> Self {
        Self::new()
    }
}

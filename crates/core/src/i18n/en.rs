//! English translations (also the fallback table).

use super::Table;

pub(super) fn table() -> Table {
    Table::from([
        // Main screen
        ("appTitle", "Kaç Mesai?"),
        ("costInHours", "Cost in Hours"),
        ("priceInputPlaceholder", "0.00"),
        ("productNamePlaceholder", "Product name (optional)"),
        ("addName", "Add name"),
        ("hideName", "Hide name"),
        ("calculate", "Calculate"),
        ("newCalculation", "New Calculation"),
        ("loading", "Loading..."),
        // Result
        ("thisPurchaseCosts", "This purchase costs you:"),
        ("productCosts", "costs you:"),
        ("hours", "hours"),
        ("days", "days"),
        ("weeks", "weeks"),
        ("months", "months"),
        ("hour", "hour"),
        ("day", "day"),
        ("week", "week"),
        ("month", "month"),
        ("ofWorkTime", "of work time"),
        ("price", "Price:"),
        ("hourlyRate", "Hourly rate:"),
        ("unnamedProduct", "Unnamed product"),
        // Profile
        ("yourProfile", "Your Profile"),
        ("edit", "Edit"),
        ("incomeDetails", "Income Details"),
        ("monthlySalary", "Monthly Salary:"),
        ("currency", "Currency:"),
        ("workHoursPerWeek", "Work Hours per Week:"),
        ("hourlyRateTitle", "Hourly Rate"),
        ("perHour", "per hour"),
        (
            "hourlyRateExplanation",
            "This is your approximate hourly rate based on your monthly salary and work hours. \
             The app uses this value to calculate how many work hours a purchase costs you.",
        ),
        ("futureIncome", "Future Income"),
        ("futureMonthlySalary", "Future Monthly Salary:"),
        ("futureHourlyRate", "Future Hourly Rate:"),
        // Edit Profile
        ("editProfile", "Edit Profile"),
        ("save", "Save"),
        ("monthlySalaryLabel", "Monthly Salary"),
        ("currencyLabel", "Currency"),
        ("workHoursLabel", "Work Hours per Week"),
        ("futureSalaryLabel", "Future Monthly Salary (Optional)"),
        // History
        ("history", "History"),
        ("noHistoryTitle", "No calculations yet"),
        (
            "noHistoryDescription",
            "Your calculation history will appear here once you start using the app.",
        ),
        ("clearHistory", "Clear History"),
        // Onboarding
        ("welcome", "Welcome!"),
        ("setupProfile", "Let's set up your profile to get started."),
        ("getStarted", "Get Started"),
        // Tabs
        ("calculator", "Calculator"),
        ("historyTab", "History"),
        ("profile", "Profile"),
        // Language
        ("language", "Language"),
        ("selectLanguage", "Select Language"),
        ("selectTimeUnit", "Select Time Unit"),
    ])
}

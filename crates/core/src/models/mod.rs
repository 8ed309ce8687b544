pub mod history;
pub mod language;
pub mod profile;
pub mod time_unit;

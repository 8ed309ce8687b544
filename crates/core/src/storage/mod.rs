pub mod file;
pub mod memory;
pub mod record;
pub mod traits;

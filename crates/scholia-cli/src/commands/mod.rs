//! Command implementations.

pub mod analyze;
pub mod config;
pub mod lookup;

pub use self::analyze::execute_analyze;
pub use self::config::execute_config;
pub use self::lookup::execute_lookup;

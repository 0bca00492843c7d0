//! Command implementations.

pub mod config;
pub mod date;
pub mod excerpt;

pub use self::config::execute_config;
pub use self::date::execute_date;
pub use self::excerpt::execute_excerpt;

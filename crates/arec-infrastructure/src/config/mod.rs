//! Configuration
//!
//! [`AppConfig`] is assembled by [`ConfigLoader`] from defaults, an optional
//! TOML file and `AREC__` environment variables, then validated.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;

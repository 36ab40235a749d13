//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain
//! layers. All adapters live in `arec-providers` and are resolved by name
//! through the linkme registries.
//!
//! ## Module Categories
//!
//! ### Configuration & Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML, `AREC__` environment |
//! | [`di`] | Composition root building the recommendation service |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Data
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | JSON catalog loading and document embedding |
//! | [`cache`] | Optional Moka result cache |
//! | [`predictions`] | CSV query input and prediction output |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

// Force-link arec-providers so linkme registrations are included
extern crate arec_providers;

pub mod cache;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod predictions;
pub mod utils;

pub use error_ext::ErrorContext;
pub use utils::TimedOperation;

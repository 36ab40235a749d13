//! HTTP Transport
//!
//! Serves the recommendation service over HTTP with Rocket.
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/` | GET | Service name, version and endpoints |
//! | `/health` | GET | Liveness plus catalog size |
//! | `/recommend` | POST | `{"query": ..., "top_k": ...}` → ranked assessments |

pub mod handlers;
pub mod models;
pub mod transport;

pub use handlers::ServerState;
pub use transport::{Cors, HttpServer, RequestTrace};

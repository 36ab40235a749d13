//! HTTP transport
//!
//! Builds the Rocket application over a [`ServerState`] and launches it on the
//! configured address. Rocket's own logging is off; requests are logged through
//! `tracing` by [`RequestTrace`].

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use arec_domain::error::{Error, Result};
use arec_infrastructure::config::ServerConfig;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Build, Data, Request, Response, Rocket, catchers, routes};
use tracing::info;

use crate::handlers::{self, ServerState};

/// HTTP server for the recommendation service
pub struct HttpServer {
    config: ServerConfig,
    state: ServerState,
}

impl HttpServer {
    pub fn new(config: ServerConfig, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], self.config.port)))
    }

    /// Build the Rocket application
    pub fn rocket(&self) -> Rocket<Build> {
        let mut rocket = rocket::build()
            .manage(self.state.clone())
            .mount(
                "/",
                routes![handlers::index, handlers::health, handlers::recommend],
            )
            .register("/", catchers![handlers::default_catcher])
            .attach(RequestTrace::default());

        if self.config.enable_cors {
            rocket = rocket.attach(Cors);
        }
        rocket
    }

    /// Serve until Rocket shuts down (Ctrl+C)
    pub async fn start(self) -> Result<()> {
        info!(
            address = %self.socket_addr(),
            catalog_size = self.state.catalog_size,
            "HTTP server listening"
        );

        let figment = rocket::Config::figment()
            .merge(("address", self.config.host.clone()))
            .merge(("port", self.config.port))
            .merge(("log_level", "off"));

        self.rocket()
            .configure(figment)
            .launch()
            .await
            .map_err(|e| {
                Error::infrastructure_with_source("HTTP server failed", e.to_string())
            })?;
        Ok(())
    }
}

/// Adds CORS headers so browsers can call the API
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

/// Per-request id and timing
#[derive(Clone, Copy)]
struct RequestStart {
    id: u64,
    at: Instant,
}

/// Tags each request with an `X-Request-ID` and logs method, path, status and
/// latency when the response leaves
#[derive(Default)]
pub struct RequestTrace {
    next_id: AtomicU64,
}

#[rocket::async_trait]
impl Fairing for RequestTrace {
    fn info(&self) -> Info {
        Info {
            name: "Request Trace",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _data: &mut Data<'_>) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        request.local_cache(|| RequestStart {
            id,
            at: Instant::now(),
        });
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let start = request.local_cache(|| RequestStart {
            id: 0,
            at: Instant::now(),
        });
        let request_id = format!("{:08x}", start.id);
        info!(
            request_id = %request_id,
            method = %request.method(),
            path = %request.uri().path(),
            status = response.status().code,
            elapsed_ms = start.at.elapsed().as_millis() as u64,
            "HTTP request"
        );
        response.set_header(Header::new("X-Request-ID", request_id));
    }
}

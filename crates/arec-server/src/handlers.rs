//! Route handlers
//!
//! Every failing route answers with an [`ErrorResponse`] body, including
//! requests Rocket rejects before a handler runs (bad JSON, unknown routes).

use std::sync::Arc;

use arec_application::ports::services::RecommendationServiceInterface;
use arec_infrastructure::di::AppContext;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Request, State, catch, get, post};
use tracing::{info, warn};

use crate::models::{
    ErrorResponse, HealthResponse, RecommendRequest, RecommendResponse, ServiceInfo,
};

/// Shared state managed by Rocket
#[derive(Clone)]
pub struct ServerState {
    pub service: Arc<dyn RecommendationServiceInterface>,
    pub catalog_size: usize,
    pub dimensions: usize,
    pub index_provider: String,
}

impl ServerState {
    /// State for a fully initialized application
    pub fn from_context(context: &AppContext) -> Self {
        let index = context.index();
        Self {
            service: context.service(),
            catalog_size: index.len(),
            dimensions: index.dimensions(),
            index_provider: index.provider_name().to_string(),
        }
    }
}

#[get("/")]
pub fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec!["GET /health", "POST /recommend"],
    })
}

/// Liveness plus the size of the loaded catalog
#[get("/health")]
pub fn health(state: &State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        catalog_size: state.catalog_size,
        dimensions: state.dimensions,
        index_provider: state.index_provider.clone(),
    })
}

#[post("/recommend", format = "json", data = "<request>")]
pub async fn recommend(
    state: &State<ServerState>,
    request: Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, (Status, Json<ErrorResponse>)> {
    let request = request.into_inner();
    match state
        .service
        .recommend_text(&request.query, request.top_k())
        .await
    {
        Ok(result) => {
            info!(
                results = result.len(),
                rerank = ?result.rerank,
                balanced = result.balanced,
                "Recommendation served"
            );
            Ok(Json(RecommendResponse::new(request.query, &result)))
        }
        Err(err) => {
            let (status, body) = ErrorResponse::from_error(&err);
            warn!(status = status.code, error = %err, "Recommendation rejected");
            Err((status, Json(body)))
        }
    }
}

/// JSON body for anything Rocket rejects itself
#[catch(default)]
pub fn default_catcher(status: Status, _request: &Request<'_>) -> (Status, Json<ErrorResponse>) {
    let reason = status.reason().unwrap_or("Request failed");
    let code = match status.code {
        400 | 422 => "INVALID_REQUEST",
        404 => "NOT_FOUND",
        415 => "UNSUPPORTED_MEDIA_TYPE",
        _ => "HTTP_ERROR",
    };
    (status, Json(ErrorResponse::new(reason, code)))
}

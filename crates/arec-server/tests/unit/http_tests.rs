//! HTTP route tests against the offline stack

use arec_infrastructure::catalog::CatalogRecord;
use arec_infrastructure::config::{AppConfig, ServerConfig};
use arec_infrastructure::di::init_app_with_records;
use arec_server::{HttpServer, ServerState};
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;

fn record(id: &str, name: &str, tag: &str, description: &str) -> CatalogRecord {
    CatalogRecord {
        id: Some(id.to_string()),
        name: name.to_string(),
        description: description.to_string(),
        category_tag: Some(tag.to_string()),
        ..CatalogRecord::default()
    }
}

async fn client() -> Client {
    let records = vec![
        record("java", "Java Programming", "K", "java programming knowledge test"),
        record("python", "Python Programming", "K", "python programming knowledge test"),
        record("sql", "SQL Server", "K", "sql database queries"),
        record("opq", "Personality Questionnaire", "P", "workplace personality and behavior"),
        record("team", "Teamwork Styles", "P", "collaboration and teamwork behavior"),
        record("mixed", "Graduate Scenarios", "H", "situational judgement for graduates"),
    ];
    let context = init_app_with_records(AppConfig::default(), records)
        .await
        .expect("app builds");
    let server = HttpServer::new(ServerConfig::default(), ServerState::from_context(&context));
    Client::tracked(server.rocket())
        .await
        .expect("valid rocket instance")
}

async fn post_recommend(client: &Client, body: &str) -> (Status, serde_json::Value) {
    let response = client
        .post("/recommend")
        .header(ContentType::JSON)
        .body(body)
        .dispatch()
        .await;
    let status = response.status();
    let body = response.into_string().await.expect("response body");
    (status, serde_json::from_str(&body).expect("json body"))
}

#[rocket::async_test]
async fn test_health_reports_catalog_size() {
    let client = client().await;

    let response = client.get("/health").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    assert!(response.headers().get_one("X-Request-ID").is_some());
    let body = response.into_string().await.expect("response body");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["catalog_size"], 6);
    assert_eq!(json["index_provider"], "flat");
}

#[rocket::async_test]
async fn test_recommend_returns_ranked_items() {
    let client = client().await;

    let (status, json) =
        post_recommend(&client, r#"{"query": "java programming", "top_k": 3}"#).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(json["query"], "java programming");
    assert_eq!(json["rerank"], "applied");
    let items = json["recommendations"].as_array().expect("array");
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|item| item["url"].is_string()));
}

#[rocket::async_test]
async fn test_oversized_top_k_is_clamped() {
    let client = client().await;

    let (status, json) =
        post_recommend(&client, r#"{"query": "programming test", "top_k": 500}"#).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(json["recommendations"].as_array().expect("array").len(), 6);
}

#[rocket::async_test]
async fn test_blank_query_is_bad_request() {
    let client = client().await;

    let (status, json) = post_recommend(&client, r#"{"query": "   "}"#).await;

    assert_eq!(status, Status::BadRequest);
    assert_eq!(json["code"], "VALIDATION");
}

#[rocket::async_test]
async fn test_overlong_query_is_bad_request() {
    let client = client().await;
    let body = serde_json::json!({ "query": "a".repeat(5001) }).to_string();

    let (status, json) = post_recommend(&client, &body).await;

    assert_eq!(status, Status::BadRequest);
    assert_eq!(json["code"], "VALIDATION");
    assert!(json["error"].as_str().unwrap().contains("5001"));
}

#[rocket::async_test]
async fn test_malformed_body_gets_json_error() {
    let client = client().await;

    let (status, json) = post_recommend(&client, r#"{"query": "#).await;

    assert!(status == Status::BadRequest || status == Status::UnprocessableEntity);
    assert_eq!(json["code"], "INVALID_REQUEST");
}

#[rocket::async_test]
async fn test_unknown_route_gets_json_error() {
    let client = client().await;

    let response = client.get("/nowhere").dispatch().await;

    assert_eq!(response.status(), Status::NotFound);
    let body = response.into_string().await.expect("response body");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["code"], "NOT_FOUND");
}

#[rocket::async_test]
async fn test_cors_headers_follow_config() {
    let client = client().await;

    let response = client.get("/").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
}

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use custom_dns_api::{create_api_routes, state::RecordUseCases, AppState};
use custom_dns_application::ports::RecordStore;
use custom_dns_application::use_cases::{
    DeleteRecordUseCase, ListRecordsUseCase, LookupRecordUseCase, SetRecordUseCase,
};
use custom_dns_infrastructure::repositories::InMemoryRecordStore;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_app() -> Router {
    let store: Arc<dyn RecordStore> = Arc::new(InMemoryRecordStore::new());
    let state = AppState {
        records: RecordUseCases {
            set: Arc::new(SetRecordUseCase::new(store.clone())),
            delete: Arc::new(DeleteRecordUseCase::new(store.clone())),
            list: Arc::new(ListRecordsUseCase::new(store.clone())),
            lookup: Arc::new(LookupRecordUseCase::new(store)),
        },
    };
    create_api_routes(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

fn put_record(body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri("/records")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = create_test_app();

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_put_creates_then_updates() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        put_record(json!({
            "hostname": "app.example.com",
            "record_type": "a",
            "values": ["10.0.0.1", "10.0.0.2"],
            "ttl": 300
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["a"], json!(["10.0.0.1", "10.0.0.2"]));
    assert_eq!(body["txt"], Value::Null);

    let (status, body) = send(
        &app,
        put_record(json!({
            "hostname": "app.example.com",
            "record_type": "A",
            "values": ["10.0.0.3"],
            "ttl": 60
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["a"], json!(["10.0.0.3"]));
}

#[tokio::test]
async fn test_put_rejects_invalid_input() {
    let app = create_test_app();

    let cases = [
        json!({"hostname": "-bad.example.com", "record_type": "a", "values": ["1.1.1.1"], "ttl": 60}),
        json!({"hostname": "ok.example.com", "record_type": "a", "values": ["1.1.1"], "ttl": 60}),
        json!({"hostname": "ok.example.com", "record_type": "aaaa", "values": ["gggg::1"], "ttl": 60}),
        json!({"hostname": "ok.example.com", "record_type": "mx", "values": ["x"], "ttl": 60}),
        json!({"hostname": "ok.example.com", "record_type": "txt", "values": ["y".repeat(256)], "ttl": 60}),
    ];

    for case in cases {
        let (status, body) = send(&app, put_record(case.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "case: {}", case);
        assert!(body["error"].is_string());
    }

    let (_, listing) = send(&app, get("/records")).await;
    assert_eq!(listing["a"], json!([]));
    assert_eq!(listing["aaaa"], json!([]));
    assert_eq!(listing["txt"], json!([]));
}

#[tokio::test]
async fn test_list_groups_by_type() {
    let app = create_test_app();
    send(
        &app,
        put_record(json!({"hostname": "*.example.com", "record_type": "txt", "values": ["a", "b"], "ttl": 30})),
    )
    .await;
    send(
        &app,
        put_record(json!({"hostname": "v6.example.com", "record_type": "aaaa", "values": ["::1"], "ttl": 30})),
    )
    .await;

    let (status, body) = send(&app, get("/records")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["a"], json!([]));
    assert_eq!(
        body["txt"],
        json!([{"hostname": "*.example.com", "ttl": 30, "value_count": 2}])
    );
    assert_eq!(body["aaaa"][0]["hostname"], "v6.example.com");
}

#[tokio::test]
async fn test_lookup() {
    let app = create_test_app();
    send(
        &app,
        put_record(json!({"hostname": "domain:corp.example", "record_type": "a", "values": [], "ttl": 30})),
    )
    .await;

    let (status, body) = send(&app, get("/records/lookup?hostname=domain:corp.example")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["a"], json!([]));
    assert_eq!(body["aaaa"], Value::Null);
}

#[tokio::test]
async fn test_lookup_requires_hostname() {
    let app = create_test_app();

    let (status, body) = send(&app, get("/records/lookup")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_delete() {
    let app = create_test_app();
    send(
        &app,
        put_record(json!({"hostname": "gone.example.com", "record_type": "txt", "values": ["bye"], "ttl": 30})),
    )
    .await;

    let (status, _) = send(&app, delete("/records/txt/gone.example.com")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, delete("/records/txt/gone.example.com")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_delete_unknown_type() {
    let app = create_test_app();

    let (status, _) = send(&app, delete("/records/cname/x.example.com")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

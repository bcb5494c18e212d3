use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::shared::infrastructure::state_store::StateStore;
use crate::shared::infrastructure::state_store::json_file::JsonFileStore;
use crate::shell::http::router;
use crate::shell::state::AppState;

fn app(dir: &tempfile::TempDir) -> Router {
    let store: Arc<dyn StateStore> =
        Arc::new(JsonFileStore::new(dir.path().join("time-logs.json")));
    router(AppState { store })
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn it_should_persist_logs_and_export_them_as_csv() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir);

    let document = serde_json::json!({
        "logs": [
            {"activityName":"Deep Work","startTime":"2024-01-15T09:00:00","endTime":"2024-01-15T10:30:00"},
            {"activityName":"Email","startTime":"2024-01-15T10:30:00","endTime":"2024-01-15T10:45:00"}
        ],
        "activities": ["Deep Work", "Email"]
    });

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/logs")
                .header("content-type", "application/json")
                .body(Body::from(document.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(Request::get("/api/logs").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stored: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(stored, document);

    let export = serde_json::json!({
        "logs": stored["logs"],
        "startDate": "2024-01-15",
        "endDate": "2024-01-15"
    });
    let response = app
        .oneshot(
            Request::post("/api/export")
                .header("content-type", "application/json")
                .body(Body::from(export.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-disposition"].to_str().unwrap(),
        "attachment; filename=\"time-log-2024-01-15.csv\""
    );

    let csv = body_string(response).await;
    assert!(csv.contains("1/15/2024,\"Deep Work\",09:00 AM,10:30 AM,1h 30m"));
    assert!(csv.contains("1/15/2024,\"Email\",10:30 AM,10:45 AM,15m"));
    assert!(csv.ends_with("Total Hours Worked\nTotal,1h 45m\n"));
}

#[tokio::test]
async fn it_should_initialize_the_store_on_first_read() {
    let dir = tempfile::tempdir().unwrap();

    let response = app(&dir)
        .oneshot(Request::get("/api/logs").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let state: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(state, serde_json::json!({ "logs": [], "activities": [] }));
    assert!(dir.path().join("time-logs.json").exists());
}

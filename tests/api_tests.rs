use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use utilihub::config::Config;

fn spawn_app() -> Router {
    let config = Config::default();

    let state = utilihub::api::create_app_state_from_config(config, None)
        .expect("Failed to create app state");
    utilihub::api::router(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_empty_input_is_rejected_without_a_lookup() {
    let app = spawn_app();

    let cases = [
        ("/api/weather", "Please enter a city name"),
        ("/api/weather?city=", "Please enter a city name"),
        ("/api/weather?city=%20%20", "Please enter a city name"),
        (
            "/api/population?country=",
            "Please enter a country name or code",
        ),
        ("/api/education?city=", "Please enter a city name"),
        ("/api/water?city=", "Please enter a city name"),
        ("/api/recipes?food=", "Please enter a food item"),
    ];

    for (uri, message) in cases {
        let (status, body) = get(app.clone(), uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {uri}");
        assert_eq!(body["success"], serde_json::json!(false), "uri: {uri}");
        assert_eq!(body["error"], serde_json::json!(message), "uri: {uri}");
        assert!(body.get("data").is_none(), "uri: {uri}");
    }
}

#[tokio::test]
async fn test_system_status() {
    let app = spawn_app();

    let (status, body) = get(app, "/api/system/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], serde_json::json!(true));
    assert_eq!(
        body["data"]["version"],
        serde_json::json!(env!("CARGO_PKG_VERSION"))
    );
    assert!(
        body["data"]["endpoints"]["overpass_url"]
            .as_str()
            .unwrap()
            .contains("overpass")
    );
}

#[tokio::test]
async fn test_home_serves_embedded_shell() {
    let app = spawn_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with(mime::TEXT_HTML.as_ref()));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("Utility Hub"));
    assert!(html.contains("/weather.html"));
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_shell() {
    let app = spawn_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/no/such/page")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&body).contains("Utility Hub"));
}

#[tokio::test]
async fn test_security_headers_are_set() {
    let app = spawn_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert!(headers.contains_key("content-security-policy"));
}

#[tokio::test]
async fn test_metrics_endpoint_without_recorder() {
    let app = spawn_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // No Prometheus handle is installed in tests; the endpoint still answers.
    assert_eq!(response.status(), StatusCode::OK);
}

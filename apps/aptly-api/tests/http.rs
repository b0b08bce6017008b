use aptly_api::{routes, state::AppState};
use aptly_service::RecommendService;
use aptly_testkit as testkit;
use axum::{
	body::{self, Body},
	http::{Request, StatusCode},
};
use tower::util::ServiceExt;

fn state_with_embedding(vector: Vec<f32>) -> AppState {
	let snapshot_dir = testkit::write_sample_snapshot();
	let config = testkit::test_config(
		snapshot_dir.records_path.clone(),
		snapshot_dir.embeddings_path.clone(),
	);
	let snapshot = aptly_catalog::snapshot::load(
		&snapshot_dir.records_path,
		&snapshot_dir.embeddings_path,
		testkit::SAMPLE_DIMENSIONS,
	)
	.expect("Failed to load snapshot.");
	let service =
		RecommendService::with_providers(config, snapshot, testkit::providers_with(vector));

	AppState::with_service(service)
}

fn test_state() -> AppState {
	state_with_embedding(testkit::origin_query())
}

#[tokio::test]
async fn health_ok() {
	let app = routes::router(test_state());
	let response = app
		.oneshot(
			Request::builder().uri("/health").body(Body::empty()).expect("Failed to build request."),
		)
		.await
		.expect("Failed to call /health.");

	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn recommend_returns_composed_items() {
	let app = routes::router(test_state());
	let payload = serde_json::json!({
		"query": "Java developer with strong communication skills"
	});
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/v1/recommend")
				.header("content-type", "application/json")
				.body(Body::from(payload.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call recommend.");

	assert_eq!(response.status(), StatusCode::OK);

	let body = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json: serde_json::Value = serde_json::from_slice(&body).expect("Failed to parse response.");
	let items = json.as_array().expect("Expected a JSON array.");

	assert_eq!(items.len(), 6);
	assert_eq!(items[0]["assessment_name"], "Java Fundamentals");
	assert_eq!(items[0]["test_type"], "K");
	assert_eq!(items[4]["test_type"], "P");
	assert!(items[0]["url"].as_str().expect("Expected a url.").starts_with("https://"));
}

#[tokio::test]
async fn recommend_honors_top_k() {
	let app = routes::router(test_state());
	let payload = serde_json::json!({
		"query": "general screening",
		"top_k": 2
	});
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/v1/recommend")
				.header("content-type", "application/json")
				.body(Body::from(payload.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call recommend.");

	assert_eq!(response.status(), StatusCode::OK);

	let body = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json: serde_json::Value = serde_json::from_slice(&body).expect("Failed to parse response.");

	assert_eq!(json.as_array().expect("Expected a JSON array.").len(), 2);
}

#[tokio::test]
async fn provider_failures_map_to_bad_gateway() {
	// A provider answering with the wrong vector width is a provider fault.
	let app = routes::router(state_with_embedding(vec![0.0, 0.0]));
	let payload = serde_json::json!({ "query": "general screening" });
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/v1/recommend")
				.header("content-type", "application/json")
				.body(Body::from(payload.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call recommend.");

	assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

	let body = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json: serde_json::Value = serde_json::from_slice(&body).expect("Failed to parse response.");

	assert_eq!(json["error_code"], "embedding_provider");
}

#[tokio::test]
async fn rejects_blank_query() {
	let app = routes::router(test_state());
	let payload = serde_json::json!({ "query": "   " });
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/v1/recommend")
				.header("content-type", "application/json")
				.body(Body::from(payload.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call recommend.");

	assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

	let body = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json: serde_json::Value = serde_json::from_slice(&body).expect("Failed to parse response.");

	assert_eq!(json["error_code"], "invalid_request");
}

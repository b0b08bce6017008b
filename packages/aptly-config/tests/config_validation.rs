use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

const SAMPLE_CONFIG_TOML: &str = r#"
[service]
http_bind = "127.0.0.1:8080"
log_level = "info"

[catalog]
records_path = "snapshot/catalog.json"
embeddings_path = "snapshot/embeddings.json"

[providers.embedding]
provider_id = "openai"
api_base = "https://api.openai.com"
api_key = "test-key"
path = "/v1/embeddings"
model = "text-embedding-3-small"
dimensions = 384
timeout_ms = 10000

[recommend]
candidate_k = 10
default_top_k = 6
"#;

fn sample_toml_with<F>(mutate: F) -> String
where
	F: FnOnce(&mut toml::map::Map<String, Value>),
{
	let mut value: Value = toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let root = value.as_table_mut().expect("Sample config must be a table.");

	mutate(root);

	toml::to_string(&value).expect("Failed to render sample config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("aptly_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn load_error_message(payload: String) -> String {
	let path = write_temp_config(payload);
	let result = aptly_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	result.expect_err("Expected a validation error.").to_string()
}

#[test]
fn loads_sample_config() {
	let path = write_temp_config(SAMPLE_CONFIG_TOML.to_string());
	let result = aptly_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = result.expect("Expected sample config to load.");

	assert_eq!(cfg.service.http_bind, "127.0.0.1:8080");
	assert!(cfg.service.bind_localhost_only);
	assert_eq!(cfg.providers.embedding.dimensions, 384);
	assert_eq!(cfg.recommend.candidate_k, 10);
	assert_eq!(cfg.recommend.default_top_k, 6);
}

#[test]
fn recommend_section_is_optional() {
	let payload = sample_toml_with(|root| {
		root.remove("recommend");
	});
	let path = write_temp_config(payload);
	let result = aptly_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = result.expect("Expected config without [recommend] to load.");

	assert_eq!(cfg.recommend.candidate_k, 10);
	assert_eq!(cfg.recommend.default_top_k, 6);
}

#[test]
fn rejects_zero_embedding_dimensions() {
	let payload = sample_toml_with(|root| {
		let embedding = root
			.get_mut("providers")
			.and_then(Value::as_table_mut)
			.and_then(|providers| providers.get_mut("embedding"))
			.and_then(Value::as_table_mut)
			.expect("Sample config must include [providers.embedding].");

		embedding.insert("dimensions".to_string(), Value::Integer(0));
	});
	let message = load_error_message(payload);

	assert!(
		message.contains("providers.embedding.dimensions must be greater than zero."),
		"Unexpected error message: {message}"
	);
}

#[test]
fn rejects_empty_api_key() {
	let payload = sample_toml_with(|root| {
		let embedding = root
			.get_mut("providers")
			.and_then(Value::as_table_mut)
			.and_then(|providers| providers.get_mut("embedding"))
			.and_then(Value::as_table_mut)
			.expect("Sample config must include [providers.embedding].");

		embedding.insert("api_key".to_string(), Value::String(" ".to_string()));
	});
	let message = load_error_message(payload);

	assert!(
		message.contains("providers.embedding.api_key must be non-empty."),
		"Unexpected error message: {message}"
	);
}

#[test]
fn rejects_candidate_pool_smaller_than_default_top_k() {
	let payload = sample_toml_with(|root| {
		let recommend = root
			.get_mut("recommend")
			.and_then(Value::as_table_mut)
			.expect("Sample config must include [recommend].");

		recommend.insert("candidate_k".to_string(), Value::Integer(4));
	});
	let message = load_error_message(payload);

	assert!(
		message.contains("recommend.candidate_k must be at least recommend.default_top_k."),
		"Unexpected error message: {message}"
	);
}

#[test]
fn rejects_empty_http_bind() {
	let payload = sample_toml_with(|root| {
		let service = root
			.get_mut("service")
			.and_then(Value::as_table_mut)
			.expect("Sample config must include [service].");

		service.insert("http_bind".to_string(), Value::String(String::new()));
	});
	let message = load_error_message(payload);

	assert!(
		message.contains("service.http_bind must be non-empty."),
		"Unexpected error message: {message}"
	);
}

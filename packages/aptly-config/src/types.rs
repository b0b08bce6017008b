use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub catalog: Catalog,
	pub providers: Providers,
	#[serde(default)]
	pub recommend: Recommend,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
	#[serde(default = "default_bind_localhost_only")]
	pub bind_localhost_only: bool,
}

/// Paths to the snapshot pair produced by the offline catalog build.
///
/// The two files must come from the same build run; the loader only verifies
/// that their lengths and dimensions agree.
#[derive(Debug, Deserialize)]
pub struct Catalog {
	pub records_path: PathBuf,
	pub embeddings_path: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub embedding: EmbeddingProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub dimensions: u32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Recommend {
	/// Raw nearest-neighbor pool fetched before quota composition. Must be
	/// large enough to fill the biggest per-type quota after filtering.
	pub candidate_k: u32,
	pub default_top_k: u32,
}
impl Default for Recommend {
	fn default() -> Self {
		Self { candidate_k: 10, default_top_k: 6 }
	}
}

fn default_bind_localhost_only() -> bool {
	true
}

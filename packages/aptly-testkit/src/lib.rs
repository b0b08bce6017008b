//! Shared fixtures for service and HTTP tests: a small deterministic catalog
//! snapshot and a canned embedding provider that never leaves the process.

use std::{fs, path::PathBuf, sync::Arc};

use aptly_catalog::{CatalogRecord, CatalogStore, Snapshot, TestType, VectorIndex};
use aptly_config::{
	Catalog, Config, EmbeddingProviderConfig, Providers as ProvidersConfig, Recommend, Service,
};
use aptly_service::{BoxFuture, EmbeddingProvider, Providers};
use tempfile::TempDir;

pub const SAMPLE_DIMENSIONS: usize = 4;

/// Twelve records covering both test types, report exports, an unrecognized
/// type, and two records that fall outside the default candidate pool of ten.
pub fn sample_records() -> Vec<CatalogRecord> {
	let record = |name: &str, test_type: TestType| CatalogRecord {
		assessment_name: name.to_string(),
		url: format!("https://example.com/{}", name.to_lowercase().replace(' ', "-")),
		test_type,
		category: "Sample".to_string(),
		description: String::new(),
	};

	vec![
		record("Java Fundamentals", TestType::K),
		record("Spring Boot Developer", TestType::K),
		record("Communication Styles", TestType::P),
		record("Coding Simulation Report", TestType::K),
		record("Leadership Judgement", TestType::P),
		record("General Ability Bundle", TestType::Unknown),
		record("SQL Server", TestType::K),
		record("Workplace Behavior", TestType::P),
		record("Python Basics", TestType::K),
		record("Sales Report Profile", TestType::P),
		record("Data Structures", TestType::K),
		record("Collaboration Profile", TestType::P),
	]
}

/// Record `i` sits at distance `i` from the origin, so a query at the origin
/// retrieves records in catalog order.
pub fn sample_vectors() -> Vec<Vec<f32>> {
	(0..sample_records().len())
		.map(|i| vec![i as f32, 0.0, 0.0, 0.0])
		.collect()
}

pub fn sample_snapshot() -> Snapshot {
	let index = VectorIndex::new(SAMPLE_DIMENSIONS, sample_vectors())
		.expect("Failed to build sample index.");

	Snapshot { store: CatalogStore::new(sample_records()), index }
}

/// A query vector at the origin; the nearest candidates are then the first
/// records of [`sample_records`] in order.
pub fn origin_query() -> Vec<f32> {
	vec![0.0; SAMPLE_DIMENSIONS]
}

/// Embedding provider that answers every text with the same fixed vector.
pub struct StaticEmbedding {
	pub vector: Vec<f32>,
}
impl EmbeddingProvider for StaticEmbedding {
	fn embed<'a>(
		&'a self,
		_cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, aptly_providers::Result<Vec<Vec<f32>>>> {
		let vectors = texts.iter().map(|_| self.vector.clone()).collect();

		Box::pin(async move { Ok(vectors) })
	}
}

pub fn providers_with(vector: Vec<f32>) -> Providers {
	Providers::new(Arc::new(StaticEmbedding { vector }))
}

pub fn test_config(records_path: PathBuf, embeddings_path: PathBuf) -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "debug".to_string(),
			bind_localhost_only: true,
		},
		catalog: Catalog { records_path, embeddings_path },
		providers: ProvidersConfig {
			embedding: EmbeddingProviderConfig {
				provider_id: "test".to_string(),
				api_base: "http://127.0.0.1:0".to_string(),
				api_key: "test-key".to_string(),
				path: "/v1/embeddings".to_string(),
				model: "test-embedding".to_string(),
				dimensions: SAMPLE_DIMENSIONS as u32,
				timeout_ms: 1_000,
				default_headers: serde_json::Map::new(),
			},
		},
		recommend: Recommend::default(),
	}
}

/// A snapshot pair written to disk, for tests exercising the loader path.
pub struct SnapshotDir {
	pub records_path: PathBuf,
	pub embeddings_path: PathBuf,
	// Held so the directory outlives the paths.
	_dir: TempDir,
}

pub fn write_sample_snapshot() -> SnapshotDir {
	let dir = TempDir::new().expect("Failed to create temp dir.");
	let records_path = dir.path().join("catalog.json");
	let embeddings_path = dir.path().join("embeddings.json");
	let records = serde_json::to_string(&sample_records()).expect("Failed to serialize records.");
	let embeddings = serde_json::json!({
		"dimensions": SAMPLE_DIMENSIONS,
		"vectors": sample_vectors(),
	});

	fs::write(&records_path, records).expect("Failed to write records.");
	fs::write(&embeddings_path, embeddings.to_string()).expect("Failed to write embeddings.");

	SnapshotDir { records_path, embeddings_path, _dir: dir }
}

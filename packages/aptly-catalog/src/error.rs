pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read snapshot file at {path:?}.")]
	ReadSnapshot { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse snapshot file at {path:?}.")]
	ParseSnapshot { path: std::path::PathBuf, source: serde_json::Error },
	#[error("Vector dimension mismatch: expected {expected}, got {actual}.")]
	DimensionMismatch { expected: usize, actual: usize },
	#[error("Catalog and embeddings are misaligned: {records} records, {vectors} vectors.")]
	Misaligned { records: usize, vectors: usize },
}

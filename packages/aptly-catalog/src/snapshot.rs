use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
	Error, Result,
	index::VectorIndex,
	models::CatalogRecord,
	store::CatalogStore,
};

/// The embeddings half of a snapshot pair, as written by the offline build.
#[derive(Debug, Deserialize, Serialize)]
pub struct EmbeddingsFile {
	pub dimensions: usize,
	pub vectors: Vec<Vec<f32>>,
}

/// A catalog store plus its positionally aligned vector index, loaded
/// together from one offline build.
#[derive(Debug)]
pub struct Snapshot {
	pub store: CatalogStore,
	pub index: VectorIndex,
}

/// Loads the records/embeddings pair and verifies the alignment it can:
/// record and vector counts must match, and every vector must have both the
/// declared and the expected dimension. Content-level misalignment (same
/// counts, different build runs) is a precondition on the offline build and
/// is not detectable here.
pub fn load(
	records_path: &Path,
	embeddings_path: &Path,
	expected_dimensions: usize,
) -> Result<Snapshot> {
	let records: Vec<CatalogRecord> = read_json(records_path)?;
	let embeddings: EmbeddingsFile = read_json(embeddings_path)?;

	if embeddings.dimensions != expected_dimensions {
		return Err(Error::DimensionMismatch {
			expected: expected_dimensions,
			actual: embeddings.dimensions,
		});
	}
	if records.len() != embeddings.vectors.len() {
		return Err(Error::Misaligned {
			records: records.len(),
			vectors: embeddings.vectors.len(),
		});
	}

	let index = VectorIndex::new(embeddings.dimensions, embeddings.vectors)?;

	Ok(Snapshot { store: CatalogStore::new(records), index })
}

fn read_json<T>(path: &Path) -> Result<T>
where
	T: serde::de::DeserializeOwned,
{
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadSnapshot { path: path.to_path_buf(), source: err })?;

	serde_json::from_str(&raw)
		.map_err(|err| Error::ParseSnapshot { path: path.to_path_buf(), source: err })
}

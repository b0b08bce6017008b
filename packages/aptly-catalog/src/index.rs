use crate::{Error, Result};

/// A hit returned by [`VectorIndex::search`]. `position` resolves to the
/// record at the same offset in the catalog store the index was built with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchHit {
	pub position: usize,
	pub distance: f32,
}

/// Exact nearest-neighbor index over dense `f32` embeddings.
///
/// Catalog sizes are in the hundreds, so a brute-force scan with squared
/// Euclidean distance is the simplest correct implementation; no approximate
/// structure is involved.
#[derive(Debug)]
pub struct VectorIndex {
	dimensions: usize,
	vectors: Vec<Vec<f32>>,
}
impl VectorIndex {
	pub fn new(dimensions: usize, vectors: Vec<Vec<f32>>) -> Result<Self> {
		for vector in &vectors {
			if vector.len() != dimensions {
				return Err(Error::DimensionMismatch { expected: dimensions, actual: vector.len() });
			}
		}

		Ok(Self { dimensions, vectors })
	}

	pub fn dimensions(&self) -> usize {
		self.dimensions
	}

	pub fn len(&self) -> usize {
		self.vectors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.vectors.is_empty()
	}

	/// Returns up to `k` hits ordered by ascending distance (nearest first).
	/// `k` is clamped to the index length; `k == 0` and an empty index both
	/// yield an empty result rather than an error.
	pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>> {
		if query.len() != self.dimensions {
			return Err(Error::DimensionMismatch { expected: self.dimensions, actual: query.len() });
		}
		if k == 0 || self.vectors.is_empty() {
			return Ok(Vec::new());
		}

		let mut hits = self
			.vectors
			.iter()
			.enumerate()
			.map(|(position, vector)| SearchHit { position, distance: squared_l2(query, vector) })
			.collect::<Vec<_>>();

		hits.sort_by(|a, b| {
			a.distance.partial_cmp(&b.distance).unwrap_or(std::cmp::Ordering::Equal)
		});
		hits.truncate(k.min(self.vectors.len()));

		Ok(hits)
	}
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
	a.iter()
		.zip(b)
		.map(|(x, y)| {
			let d = x - y;

			d * d
		})
		.sum()
}

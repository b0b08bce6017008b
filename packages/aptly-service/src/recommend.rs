use aptly_domain::{infer_intent, rerank};
use serde::{Deserialize, Serialize};

use crate::{Error, RecommendService, Result};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RecommendRequest {
	pub query: String,
	#[serde(default)]
	pub top_k: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RecommendItem {
	pub assessment_name: String,
	pub url: String,
	pub test_type: String,
}

impl RecommendService {
	/// The full pipeline: embed, retrieve the candidate pool, classify the
	/// query, compose by quota, project to the response shape.
	pub async fn recommend(&self, req: &RecommendRequest) -> Result<Vec<RecommendItem>> {
		let query = req.query.trim();

		if query.is_empty() {
			return Err(Error::InvalidRequest { message: "Query must not be empty.".to_string() });
		}

		let top_k = req.top_k.unwrap_or(self.cfg.recommend.default_top_k).max(1) as usize;
		let vector = self.embed_query(query).await?;
		let candidate_k =
			(self.cfg.recommend.candidate_k as usize).min(self.snapshot.store.len());
		let hits = self.snapshot.index.search(&vector, candidate_k)?;
		let candidates = hits
			.iter()
			.filter_map(|hit| self.snapshot.store.get(hit.position))
			.cloned()
			.collect::<Vec<_>>();
		let intent = infer_intent(query);

		tracing::debug!(
			intent = intent.as_str(),
			candidates = candidates.len(),
			top_k,
			"Composing recommendations."
		);

		let selected = rerank(&candidates, intent, top_k);

		Ok(selected
			.into_iter()
			.map(|record| RecommendItem {
				assessment_name: record.assessment_name,
				url: record.url,
				test_type: record.test_type.as_str().to_string(),
			})
			.collect())
	}
}

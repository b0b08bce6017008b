pub mod recommend;

mod error;
pub use error::{Error, Result};

use std::{future::Future, pin::Pin, sync::Arc};

use aptly_catalog::Snapshot;
use aptly_config::{Config, EmbeddingProviderConfig};
use aptly_providers::embedding;
pub use recommend::{RecommendItem, RecommendRequest};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, aptly_providers::Result<Vec<Vec<f32>>>>;
}

#[derive(Clone)]
pub struct Providers {
	pub embedding: Arc<dyn EmbeddingProvider>,
}

/// The recommendation pipeline over an in-memory catalog snapshot.
pub struct RecommendService {
	pub cfg: Config,
	pub snapshot: Snapshot,
	pub providers: Providers,
}

struct DefaultProviders;

impl EmbeddingProvider for DefaultProviders {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, aptly_providers::Result<Vec<Vec<f32>>>> {
		Box::pin(embedding::embed(cfg, texts))
	}
}

impl Providers {
	pub fn new(embedding: Arc<dyn EmbeddingProvider>) -> Self {
		Self { embedding }
	}
}

impl Default for Providers {
	fn default() -> Self {
		Self { embedding: Arc::new(DefaultProviders) }
	}
}

impl RecommendService {
	pub fn new(cfg: Config, snapshot: Snapshot) -> Self {
		Self { cfg, snapshot, providers: Providers::default() }
	}

	pub fn with_providers(cfg: Config, snapshot: Snapshot, providers: Providers) -> Self {
		Self { cfg, snapshot, providers }
	}

	/// Embed the query text and hand back the single vector, re-checking its
	/// width against the loaded index.
	pub(crate) async fn embed_query(&self, query: &str) -> Result<Vec<f32>> {
		let embeddings = self
			.providers
			.embedding
			.embed(&self.cfg.providers.embedding, &[query.to_string()])
			.await?;
		let Some(vector) = embeddings.into_iter().next() else {
			return Err(Error::Provider {
				message: "Embedding provider returned no vectors.".to_string(),
			});
		};

		if vector.len() != self.snapshot.index.dimensions() {
			return Err(Error::Provider {
				message: format!(
					"Embedding vector has {} dimensions, index expects {}.",
					vector.len(),
					self.snapshot.index.dimensions()
				),
			});
		}

		Ok(vector)
	}
}

use std::sync::Arc;

use aptly_catalog::snapshot;
use aptly_service::RecommendService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<RecommendService>,
}
impl AppState {
	pub fn new(config: aptly_config::Config) -> color_eyre::Result<Self> {
		let snapshot = snapshot::load(
			&config.catalog.records_path,
			&config.catalog.embeddings_path,
			config.providers.embedding.dimensions as usize,
		)?;

		tracing::info!(
			records = snapshot.store.len(),
			dimensions = snapshot.index.dimensions(),
			"Catalog snapshot loaded."
		);

		let service = RecommendService::new(config, snapshot);

		Ok(Self { service: Arc::new(service) })
	}

	pub fn with_service(service: RecommendService) -> Self {
		Self { service: Arc::new(service) }
	}
}

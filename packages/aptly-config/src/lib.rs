mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Catalog, Config, EmbeddingProviderConfig, Providers, Recommend, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.catalog.records_path.as_os_str().is_empty() {
		return Err(Error::Validation {
			message: "catalog.records_path must be non-empty.".to_string(),
		});
	}
	if cfg.catalog.embeddings_path.as_os_str().is_empty() {
		return Err(Error::Validation {
			message: "catalog.embeddings_path must be non-empty.".to_string(),
		});
	}
	if cfg.providers.embedding.dimensions == 0 {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must be greater than zero.".to_string(),
		});
	}
	if cfg.providers.embedding.api_key.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.embedding.api_key must be non-empty.".to_string(),
		});
	}
	if cfg.recommend.default_top_k == 0 {
		return Err(Error::Validation {
			message: "recommend.default_top_k must be greater than zero.".to_string(),
		});
	}
	if cfg.recommend.candidate_k < cfg.recommend.default_top_k {
		return Err(Error::Validation {
			message: "recommend.candidate_k must be at least recommend.default_top_k.".to_string(),
		});
	}

	Ok(())
}

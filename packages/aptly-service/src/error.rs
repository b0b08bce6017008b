pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Provider error: {message}")]
	Provider { message: String },
	#[error("Catalog error: {message}")]
	Catalog { message: String },
}

impl From<aptly_providers::Error> for Error {
	fn from(err: aptly_providers::Error) -> Self {
		Self::Provider { message: err.to_string() }
	}
}

impl From<aptly_catalog::Error> for Error {
	fn from(err: aptly_catalog::Error) -> Self {
		Self::Catalog { message: err.to_string() }
	}
}

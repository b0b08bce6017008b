mod error;

pub mod index;
pub mod models;
pub mod snapshot;
pub mod store;

pub use error::{Error, Result};
pub use index::{SearchHit, VectorIndex};
pub use models::{CatalogRecord, TestType};
pub use snapshot::Snapshot;
pub use store::CatalogStore;

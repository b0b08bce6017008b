use serde::{Deserialize, Serialize};

/// Coarse assessment category carried by each catalog record.
///
/// `K` marks knowledge/skill assessments, `P` personality/behavior ones. The
/// upstream dataset occasionally carries other letters; they all map to
/// `Unknown` and never reach a recommendation.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TestType {
	K,
	P,
	#[serde(other)]
	Unknown,
}
impl TestType {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::K => "K",
			Self::P => "P",
			Self::Unknown => "Unknown",
		}
	}
}

/// One entry of the scraped vendor catalog. Immutable after the snapshot is
/// loaded; `url` is the unique key.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CatalogRecord {
	pub assessment_name: String,
	pub url: String,
	pub test_type: TestType,
	pub category: String,
	#[serde(default)]
	pub description: String,
}

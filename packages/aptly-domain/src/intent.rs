use serde::{Deserialize, Serialize};

const TECHNICAL_KEYWORDS: [&str; 4] = ["java", "developer", "coding", "software"];
const BEHAVIORAL_KEYWORDS: [&str; 3] = ["communication", "leadership", "behavior"];

/// Coarse classification of a query's emphasis. Only used to pick selection
/// quotas; never persisted.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentLabel {
	Technical,
	Behavioral,
	Balanced,
}
impl IntentLabel {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Technical => "technical",
			Self::Behavioral => "behavioral",
			Self::Balanced => "balanced",
		}
	}
}

/// Case-insensitive substring match against the two fixed keyword sets.
/// Matching both sets or neither lands on `Balanced`; the function is total
/// and an empty query is `Balanced`.
pub fn infer_intent(text: &str) -> IntentLabel {
	let lowered = text.to_lowercase();
	let technical = TECHNICAL_KEYWORDS.iter().any(|keyword| lowered.contains(keyword));
	let behavioral = BEHAVIORAL_KEYWORDS.iter().any(|keyword| lowered.contains(keyword));

	match (technical, behavioral) {
		(true, false) => IntentLabel::Technical,
		(false, true) => IntentLabel::Behavioral,
		_ => IntentLabel::Balanced,
	}
}

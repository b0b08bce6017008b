use aptly_catalog::{CatalogRecord, TestType};

use crate::intent::IntentLabel;

/// Records whose name contains this marker are report exports, not runnable
/// assessments, and never surface in recommendations.
const REPORT_MARKER: &str = "report";

/// Per-intent selection quota: how many knowledge (`K`) and personality
/// (`P`) candidates to take before truncating to the caller's limit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Quota {
	pub knowledge: usize,
	pub personality: usize,
}

pub fn quota_for(intent: IntentLabel) -> Quota {
	match intent {
		IntentLabel::Balanced => Quota { knowledge: 4, personality: 2 },
		IntentLabel::Technical => Quota { knowledge: 5, personality: 1 },
		IntentLabel::Behavioral => Quota { knowledge: 1, personality: 5 },
	}
}

/// Rule-based composition of the retrieved candidate pool.
///
/// The upstream order is the index's similarity ranking, so taking the head
/// of each per-type subsequence keeps the most similar items of that type.
/// Selected `K` items always precede selected `P` items, regardless of
/// intent. Subsets shorter than their quota yield a shorter result; there is
/// no padding and no error path.
pub fn rerank(
	candidates: &[CatalogRecord],
	intent: IntentLabel,
	limit: usize,
) -> Vec<CatalogRecord> {
	let quota = quota_for(intent);
	let knowledge = candidates
		.iter()
		.filter(|record| record.test_type == TestType::K && is_assessment(record));
	let personality = candidates
		.iter()
		.filter(|record| record.test_type == TestType::P && is_assessment(record));
	let mut selected = Vec::with_capacity(quota.knowledge + quota.personality);

	selected.extend(knowledge.take(quota.knowledge).cloned());
	selected.extend(personality.take(quota.personality).cloned());
	selected.truncate(limit);

	selected
}

fn is_assessment(record: &CatalogRecord) -> bool {
	!record.assessment_name.to_lowercase().contains(REPORT_MARKER)
}

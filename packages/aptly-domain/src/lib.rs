pub mod intent;
pub mod rerank;

pub use intent::{IntentLabel, infer_intent};
pub use rerank::{Quota, quota_for, rerank};

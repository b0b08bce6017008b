use std::{
	collections::HashSet,
	fs,
	path::{Path, PathBuf},
	time::Instant,
};

use clap::Parser;
use color_eyre::eyre;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use aptly_catalog::snapshot;
use aptly_service::{RecommendRequest, RecommendService};

#[derive(Debug, Parser)]
#[command(
	version = aptly_cli::VERSION,
	rename_all = "kebab",
	styles = aptly_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	#[arg(long, short = 'd', value_name = "FILE")]
	pub dataset: PathBuf,
	#[arg(long, value_name = "N")]
	pub top_k: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct EvalDataset {
	name: Option<String>,
	queries: Vec<EvalQuery>,
}

#[derive(Debug, Deserialize)]
struct EvalQuery {
	id: Option<String>,
	query: String,
	expected_urls: Vec<String>,
}

#[derive(Debug, Serialize)]
struct EvalOutput {
	dataset: EvalDatasetInfo,
	settings: EvalSettings,
	summary: EvalSummary,
	queries: Vec<QueryReport>,
}

#[derive(Debug, Serialize)]
struct EvalDatasetInfo {
	name: String,
	query_count: usize,
	skipped_count: usize,
}

#[derive(Debug, Serialize)]
struct EvalSettings {
	config_path: String,
	candidate_k: u32,
	top_k: u32,
}

#[derive(Debug, Serialize)]
struct EvalSummary {
	avg_recall_at_k: f64,
	avg_precision_at_k: f64,
	mean_rr: f64,
	latency_ms_p50: f64,
	latency_ms_p95: f64,
}

#[derive(Debug, Serialize)]
struct QueryReport {
	id: String,
	query: String,
	expected_count: usize,
	retrieved_count: usize,
	relevant_count: usize,
	recall_at_k: f64,
	precision_at_k: f64,
	rr: f64,
	latency_ms: f64,
	expected_urls: Vec<String>,
	retrieved_urls: Vec<String>,
}

struct Metrics {
	recall_at_k: f64,
	precision_at_k: f64,
	rr: f64,
	relevant_count: usize,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = aptly_config::load(&args.config)?;
	let filter = EnvFilter::new(config.service.log_level.clone());

	tracing_subscriber::fmt().with_env_filter(filter).init();

	let dataset = load_dataset(args.dataset.as_path())?;
	let snapshot = snapshot::load(
		&config.catalog.records_path,
		&config.catalog.embeddings_path,
		config.providers.embedding.dimensions as usize,
	)?;
	let known_urls = snapshot
		.store
		.records()
		.iter()
		.map(|record| record.url.clone())
		.collect::<HashSet<_>>();
	let top_k = args.top_k.unwrap_or(config.recommend.default_top_k).max(1);
	let settings = EvalSettings {
		config_path: args.config.display().to_string(),
		candidate_k: config.recommend.candidate_k,
		top_k,
	};
	let service = RecommendService::new(config, snapshot);
	let dataset_name = dataset.name.clone().unwrap_or_else(|| "unnamed".to_string());

	let mut reports = Vec::with_capacity(dataset.queries.len());
	let mut latencies_ms = Vec::with_capacity(dataset.queries.len());
	let mut skipped_count = 0usize;

	for (position, query) in dataset.queries.iter().enumerate() {
		// Expected URLs absent from the loaded catalog cannot be retrieved;
		// queries with nothing left to find would only skew the averages.
		let expected = query
			.expected_urls
			.iter()
			.filter(|url| known_urls.contains(url.as_str()))
			.cloned()
			.collect::<HashSet<_>>();

		if expected.is_empty() {
			skipped_count += 1;

			tracing::warn!(query = query.query.as_str(), "Skipping query; no expected URL is in the catalog.");

			continue;
		}

		let id = query.id.clone().unwrap_or_else(|| format!("q{}", position + 1));
		let request = RecommendRequest { query: query.query.clone(), top_k: Some(top_k) };
		let started = Instant::now();
		let items = service.recommend(&request).await?;
		let latency_ms = started.elapsed().as_secs_f64() * 1_000.0;
		let retrieved_urls = items.into_iter().map(|item| item.url).collect::<Vec<_>>();
		let metrics = compute_metrics(&retrieved_urls, &expected);

		latencies_ms.push(latency_ms);
		reports.push(QueryReport {
			id,
			query: query.query.clone(),
			expected_count: expected.len(),
			retrieved_count: retrieved_urls.len(),
			relevant_count: metrics.relevant_count,
			recall_at_k: metrics.recall_at_k,
			precision_at_k: metrics.precision_at_k,
			rr: metrics.rr,
			latency_ms,
			expected_urls: query.expected_urls.clone(),
			retrieved_urls,
		});
	}

	latencies_ms.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

	let summary = EvalSummary {
		avg_recall_at_k: mean(reports.iter().map(|report| report.recall_at_k)),
		avg_precision_at_k: mean(reports.iter().map(|report| report.precision_at_k)),
		mean_rr: mean(reports.iter().map(|report| report.rr)),
		latency_ms_p50: percentile(&latencies_ms, 0.5),
		latency_ms_p95: percentile(&latencies_ms, 0.95),
	};
	let output = EvalOutput {
		dataset: EvalDatasetInfo {
			name: dataset_name,
			query_count: reports.len(),
			skipped_count,
		},
		settings,
		summary,
		queries: reports,
	};
	let json = serde_json::to_string_pretty(&output)?;

	println!("{json}");

	Ok(())
}

fn load_dataset(path: &Path) -> color_eyre::Result<EvalDataset> {
	let raw = fs::read_to_string(path)?;
	let dataset: EvalDataset = serde_json::from_str(&raw)?;

	if dataset.queries.is_empty() {
		return Err(eyre::eyre!("Dataset must include at least one query."));
	}

	Ok(dataset)
}

fn compute_metrics(retrieved: &[String], expected: &HashSet<String>) -> Metrics {
	let mut relevant_count = 0usize;
	let mut rr = 0.0_f64;

	for (idx, url) in retrieved.iter().enumerate() {
		if expected.contains(url) {
			relevant_count += 1;

			if rr == 0.0 {
				rr = 1.0 / (idx + 1) as f64;
			}
		}
	}

	let precision_at_k =
		if retrieved.is_empty() { 0.0 } else { relevant_count as f64 / retrieved.len() as f64 };
	let recall_at_k =
		if expected.is_empty() { 0.0 } else { relevant_count as f64 / expected.len() as f64 };

	Metrics { recall_at_k, precision_at_k, rr, relevant_count }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
	let mut sum = 0.0_f64;
	let mut count = 0usize;

	for value in values {
		sum += value;
		count += 1;
	}

	if count == 0 { 0.0 } else { sum / count as f64 }
}

fn percentile(values: &[f64], percentile: f64) -> f64 {
	if values.is_empty() {
		return 0.0;
	}

	let clamped = percentile.clamp(0.0, 1.0);
	let pos = clamped * (values.len() as f64 - 1.0);
	let lower = pos.floor() as usize;
	let upper = pos.ceil() as usize;

	if lower == upper {
		values[lower]
	} else {
		let weight = pos - lower as f64;

		values[lower] * (1.0 - weight) + values[upper] * weight
	}
}

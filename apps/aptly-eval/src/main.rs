use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = aptly_eval::Args::parse();
	aptly_eval::run(args).await
}

use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = aptly_api::Args::parse();
	aptly_api::run(args).await
}

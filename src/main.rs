use text_pipeline::cli::{parse_cli, run_with_cli};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = parse_cli();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .init();

    tracing::info!("Starting text-pipeline v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_with_cli(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

//! StatCard showcase server
//!
//! Serves a server-side rendered page of stat cards with an Axum backend.

use clap::Parser;
use tracing::info;

mod config;
mod routes;
mod state;
mod ui;

use config::Config;
use state::AppState;

/// StatCard showcase server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address to bind to
    #[arg(short, long, env = "STATCARD_ADDR", default_value = "0.0.0.0:8080")]
    addr: String,

    /// Path to configuration file
    #[arg(short, long, env = "STATCARD_CONFIG")]
    config: Option<String>,

    /// Print the rendered page to stdout and exit
    #[arg(long)]
    render: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,statcard_server=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args
    let args = Args::parse();

    // Load configuration
    let config = Config::load(args.config.as_deref())?;
    info!(cards = config.cards.len(), theme = config.theme.as_str(), "Configuration loaded");

    if args.render {
        println!("{}", ui::render_document(&config));
        return Ok(());
    }

    let state = AppState::new(config);

    // Build Axum router
    let app = routes::app_routes(state)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                },
            ),
        )
        .layer(tower_http::compression::CompressionLayer::new());

    // Start server
    let listener = tokio::net::TcpListener::bind(&args.addr).await?;
    info!(addr = %args.addr, "Server listening");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

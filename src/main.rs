use clap::{Parser, Subcommand};
use healthcors::config::Config;
use healthcors::error::AppResult;
use healthcors::server;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// healthcors - liveness probe with a CORS policy for a browser front end
#[derive(Parser, Debug)]
#[command(name = "healthcors")]
#[command(version)]
#[command(about = "Liveness probe with a CORS policy for a browser front end", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the web server (default)
    Serve {
        /// Host to bind to (overrides SERVER_HOST env var)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides SERVER_PORT env var)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    // Load configuration
    let mut config = Config::from_env()?;

    let (host, port) = match cli.command {
        Some(Commands::Serve { host, port }) => (host, port),
        None => (None, None),
    };

    // Override config with CLI args if provided
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;

    let addr = config.server.addr();
    server::run_server(config, addr).await
}

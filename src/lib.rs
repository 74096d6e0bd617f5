use clap::{Parser, Subcommand};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

pub mod ai;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;

#[derive(Parser)]
#[command(name = "nl2sql")]
#[command(about = "nl2sql - Natural language to SQL over Groq", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Send questions to a running server
    Ask {
        /// Host to connect to
        #[arg(long, default_value = "localhost:8080")]
        host: String,
        /// One question to convert; omit it for example queries plus an
        /// interactive prompt
        question: Option<String>,
    },
    /// Check server status
    Status {
        /// Host to connect to
        #[arg(long, default_value = "localhost:8080")]
        host: String,
    },
    /// Initialize a new configuration file
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "nl2sql.toml")]
        output: String,
    },
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Pick up GROQ_API_KEY and friends from a local .env before anything
    // reads the environment.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { port, config }) => {
            start_server(port, config).await?;
        }
        Some(Commands::Ask { host, question }) => {
            cli::run_ask(host, question).await?;
        }
        Some(Commands::Status { host }) => {
            cli::run_status(host).await?;
        }
        Some(Commands::Init { output }) => {
            cli::run_init(output).await?;
        }
        None => {
            // Default to serving with pure config/env defaults
            start_server(None, None).await?;
        }
    }

    Ok(())
}

async fn start_server(
    port_override: Option<u16>,
    config_path: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = config::Config::load(config_path.as_deref())?;
    if let Some(port) = port_override {
        config.server.port = port;
    }
    config.validate().map_err(|errors| errors.join("; "))?;

    // Initialize Logging/Tracing
    let level = config.logging.level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    info!("Starting nl2sql - natural language to SQL bridge...");
    info!("Model: {} via {}", config.groq.model, config.groq.base_url);

    if config.groq.api_key.is_none() {
        warn!("GROQ_API_KEY not set; /convert will return errors until the server is restarted with a key");
    }

    let generator = Arc::new(ai::generator_from_config(&config.groq));
    let app = api::router(generator);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("nl2sql listening on {}", addr);
    info!("API Endpoints:");
    info!("  - Convert: http://{}/convert", addr);
    info!("  - Health:  http://{}/health", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

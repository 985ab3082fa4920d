//! Adder service entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use adder_service::api::create_router;
use adder_service::config::Config;
use adder_service::error::ServiceError;
use adder_service::metrics;
use adder_service::utils::shutdown_signal;

/// HTTP service with a health check and a two-number addition endpoint.
#[derive(Parser, Debug)]
#[command(name = "adder-service")]
#[command(about = "Health check and two-number addition over HTTP")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// HTTP server port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            // Environment is unusable, log with defaults.
            init_logging(&Config::default(), args.verbose);
            if matches!(args.command, Some(Command::CheckConfig)) {
                println!("Loading configuration... FAILED");
                println!("  Error: {}", e);
            }
            error!("Failed to load configuration: {}", e);
            return Err(ServiceError::from(e).into());
        }
    };
    if let Some(port) = args.port {
        config.port = port;
    }

    init_logging(&config, args.verbose);
    metrics::init_metrics();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Serve) | None => cmd_serve(config).await,
    }
}

fn init_logging(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("adder_service=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("ADDER SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");
    println!("Loading configuration... OK");

    print!("Validating configuration... ");
    if let Err(e) = config.validate() {
        println!("FAILED");
        println!("  Error: {}", e);
        return Err(ServiceError::InvalidConfig(e).into());
    }
    println!("OK");

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}", config.bind_addr());
    println!("  Log Filter: {}", config.rust_log);
    println!("  Log Format: {}", config.log_format);
    match config.metrics_addr() {
        Some(addr) => println!("  Metrics: {}", addr),
        None => println!("  Metrics: Disabled"),
    }
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(ServiceError::InvalidConfig(e).into());
    }

    if let Some(addr) = config.metrics_addr() {
        metrics::install_exporter(addr)?;
    }

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        ServiceError::Io(e)
    })?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServiceError::Io)?;

    info!("HTTP server stopped");
    Ok(())
}

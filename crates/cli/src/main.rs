use anyhow::Context;
use clap::Parser;
use mta_sts_api::AppState;
use mta_sts_domain::{CliOverrides, Config};
use std::net::SocketAddr;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "mta-sts-responder")]
#[command(version)]
#[command(about = "Serves MTA-STS policies built from each domain's MX records")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// DNS-over-HTTPS JSON endpoint used for MX lookups
    #[arg(long, value_name = "URL")]
    resolver_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        resolver_url: cli.resolver_url.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting MTA-STS responder v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = cli.config.clone().or_else(Config::get_config_path) {
        info!(path = %path, "Loaded configuration file");
    }

    let use_cases = di::UseCases::new(&config)?;
    let app_state = AppState {
        serve_policy: use_cases.serve_policy,
    };

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid listen address {}:{}",
                config.server.bind_address, config.server.port
            )
        })?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}

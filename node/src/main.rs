use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use mergington_activities::ActivityRegistry;
use mergington_rpc::{start_server, AppState};
use metrics::describe_counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod settings;
mod version;

use settings::{AppConfig, LogFormat};
use version::{git_commit_hash, SERVICE_VERSION};

fn build_cli() -> Command {
    Command::new("mergington-node")
        .version(SERVICE_VERSION)
        .about("Mergington High School extracurricular activity service")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path"),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("HOST")
                .help("Override the bind host"),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .value_parser(value_parser!(u16))
                .help("Override the bind port"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .value_parser(["trace", "debug", "info", "warn", "error"])
                .help("Override the log level"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_name("FORMAT")
                .value_parser(["pretty", "json"])
                .help("Select log output format"),
        )
        .arg(
            Arg::new("static-dir")
                .long("static-dir")
                .value_name("DIR")
                .help("Directory holding the front-end assets served under /static"),
        )
        .arg(
            Arg::new("disable-metrics")
                .long("disable-metrics")
                .action(ArgAction::SetTrue)
                .help("Do not install the Prometheus metrics recorder"),
        )
}

fn apply_cli_overrides(config: &mut AppConfig, matches: &ArgMatches) -> Result<()> {
    if let Some(host) = matches.get_one::<String>("host") {
        config.host = host.clone();
    }
    if let Some(port) = matches.get_one::<u16>("port") {
        config.port = *port;
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.log_level = level.clone();
    }
    if let Some(format) = matches.get_one::<String>("log-format") {
        config.log_format = format.parse()?;
    }
    if let Some(dir) = matches.get_one::<String>("static-dir") {
        config.static_dir = Some(PathBuf::from(dir));
    }
    if matches.get_flag("disable-metrics") {
        config.metrics_enabled = false;
    }
    Ok(())
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    }
    .context("failed to install tracing subscriber")
}

fn init_metrics(config: &AppConfig) -> Option<PrometheusHandle> {
    if !config.metrics_enabled {
        info!("Prometheus metrics exporter disabled via configuration");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            info!("Prometheus metrics exporter registered");
            describe_counter!(
                "activity_signups_total",
                "Number of accepted activity signups"
            );
            describe_counter!(
                "activity_unregistrations_total",
                "Number of accepted activity unregistrations"
            );
            describe_counter!(
                "activity_requests_rejected_total",
                "Number of signup or unregister requests rejected, by reason"
            );
            Some(handle)
        }
        Err(err) => {
            warn!("Failed to install Prometheus metrics exporter: {}", err);
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down Mergington activity service");
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let mut config = AppConfig::load(matches.get_one::<String>("config").map(String::as_str))?;
    apply_cli_overrides(&mut config, &matches)?;

    init_logging(&config)?;
    info!(
        "Mergington activity service {} ({})",
        SERVICE_VERSION,
        git_commit_hash()
    );
    if let Some(path) = &config.config_path {
        info!("Loaded configuration from {}", path.display());
    }

    let metrics = init_metrics(&config);

    let registry = Arc::new(ActivityRegistry::new());
    info!("Activity registry seeded with {} activities", registry.len());

    let state = AppState::new(registry)
        .with_metrics(metrics)
        .with_static_dir(config.static_dir.clone());

    let addr = config.bind_addr();
    start_server(state, &addr, shutdown_signal()).await?;

    info!("Mergington activity service shutdown complete");
    Ok(())
}

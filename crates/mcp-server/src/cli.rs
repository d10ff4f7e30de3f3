use anyhow::{Context, Result};
use clap::Parser;
use confluence_client::{missing_env_vars, ClientProvider};
use rmcp::transport::stdio;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::StreamableHttpService;
use rmcp::ServiceExt;
use std::future::IntoFuture;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::tools::ConfluenceService;

const HTTP_ENDPOINT: &str = "/mcp";

#[derive(Parser, Debug)]
#[command(name = "confluence-mcp")]
#[command(about = "MCP server exposing Confluence pages, comments and spaces", long_about = None)]
#[command(version)]
struct Cli {
    /// Dotenv file with ATLASSIAN_HOST, ATLASSIAN_EMAIL and ATLASSIAN_TOKEN
    #[arg(long, value_name = "PATH")]
    env: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log errors only
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Timeout for each Confluence request, in seconds
    #[arg(long, env = "CONFLUENCE_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Serve streamable HTTP on this port at /mcp instead of stdio
    #[arg(long, alias = "http_port", value_name = "PORT")]
    http_port: Option<u16>,
}

fn init_logging(cli: &Cli) {
    // stdout carries MCP frames; logs go to stderr only.
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn load_env_file(path: &Path) {
    match dotenvy::from_path(path) {
        Ok(()) => log::info!("Loaded environment from {}", path.display()),
        Err(err) => log::warn!("Failed to load env file {}: {err}", path.display()),
    }
}

async fn shutdown_signal() {
    let interrupt = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            log::warn!("Failed to listen for SIGINT: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                log::warn!("Failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => log::info!("Received SIGINT"),
        _ = terminate => log::info!("Received SIGTERM"),
    }
}

fn warn_missing_credentials(stdio_mode: bool) {
    let missing = missing_env_vars();
    for var in &missing {
        log::warn!("Required environment variable {var} is not set");
    }
    if stdio_mode && !missing.is_empty() {
        log::warn!("Tool calls will fail until the credentials are provided (environment or --env <file>)");
    }
}

async fn serve_stdio(service: ConfluenceService) -> Result<()> {
    let server = service.serve(stdio()).await?;

    tokio::select! {
        reason = server.waiting() => {
            log::debug!("MCP session ended: {:?}", reason?);
        }
        _ = shutdown_signal() => {}
    }
    Ok(())
}

async fn serve_http(service: ConfluenceService, port: u16) -> Result<()> {
    let mcp = StreamableHttpService::new(
        move || Ok(service.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service(HTTP_ENDPOINT, mcp);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("bind HTTP port {port}"))?;
    log::info!("Serving MCP at http://localhost:{port}{HTTP_ENDPOINT}");

    tokio::select! {
        result = axum::serve(listener, router).into_future() => result.context("HTTP server")?,
        _ = shutdown_signal() => log::info!("Stopping streamable HTTP server"),
    }
    Ok(())
}

/// Runs the MCP server over stdio, or over streamable HTTP with `--http-port`,
/// until the session ends or a stop signal arrives.
pub async fn main_entry() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Some(path) = cli.env.as_deref() {
        load_env_file(path);
    }
    warn_missing_credentials(cli.http_port.is_none());

    let timeout = Duration::from_secs(cli.timeout_secs.max(1));
    let provider = Arc::new(ClientProvider::from_env_with_timeout(timeout));
    let service = ConfluenceService::new(provider);

    log::info!("Starting Confluence MCP server");
    match cli.http_port {
        Some(port) => serve_http(service, port).await?,
        None => serve_stdio(service).await?,
    }

    log::info!("Confluence MCP server stopped");
    Ok(())
}

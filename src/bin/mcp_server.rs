//! facility-extract MCP Server
//!
//! This binary provides a Model Context Protocol (MCP) server for facility extraction.
//! It exposes the projection and selector tools to AI assistants and other MCP clients.

use clap::Parser;
use facility_extract::facility::Catalog;
use facility_extract::mcp::FacilityServer;
use rmcp::{ServiceExt, transport::stdio};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mcp-server")]
#[command(version)]
#[command(about = "Facility extraction MCP server", long_about = None)]
struct Cli {
    /// Course catalog JSON file (default: built-in catalog)
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // stdout carries the protocol, so logs go to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)
            .map_err(|e| format!("Failed to load catalog from {}: {}", path.display(), e))?,
        None => Catalog::builtin(),
    };

    log::info!("facility-extract MCP Server v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Catalog: {} courses", catalog.courses().len());
    log::info!("Transport: stdio");

    let server = FacilityServer::with_catalog(catalog).serve(stdio()).await?;
    let quit_reason = server.waiting().await?;
    log::info!("Server quit with reason: {:?}", quit_reason);

    Ok(())
}

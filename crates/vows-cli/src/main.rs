//! Vows CLI Application
//!
//! Command-line interface and MCP server for the vows wedding planning
//! timeline.

mod args;
mod cli;
mod mcp;
mod notifier;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, ListEventsArgs};
use log::info;
use mcp::{run_stdio_server, VowsMcpServer};
use notifier::LogNotifier;
use renderer::TerminalRenderer;
use vows_core::EventStoreBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        empty,
        no_color,
        command,
    } = Args::parse();

    let store = EventStoreBuilder::new()
        .with_sample_timeline(!empty)
        .with_notifier(Box::new(LogNotifier))
        .build()
        .context("Failed to initialize timeline")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Vows started");

    match command {
        Some(List(args)) => Cli::new(store, renderer).list_events(&args),
        Some(Show(args)) => Cli::new(store, renderer).show_event(&args.into()),
        Some(Add(args)) => Cli::new(store, renderer).add_event(&args.into()),
        Some(Toggle(args)) => Cli::new(store, renderer).toggle_status(&args.into()),
        Some(Summary(args)) => Cli::new(store, renderer).summary(&args.into()),
        Some(Serve) => {
            info!("Starting vows MCP server");
            run_stdio_server(VowsMcpServer::new(store))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(store, renderer).list_events(&ListEventsArgs::default()),
    }
}

use clap::{Parser, Subcommand};

use crate::cli::{AddEventArgs, ListEventsArgs, ShowEventArgs, SummaryArgs, ToggleStatusArgs};

/// Wedding planning timeline
///
/// Vows keeps the milestones of a wedding plan (venue visits, tastings,
/// fittings, the big day itself) in date order and tracks which ones are
/// done. Each invocation starts from the sample timeline unless `--empty` is
/// given; `serve` keeps one timeline alive for a whole MCP session.
#[derive(Parser)]
#[command(version, about, name = "vows")]
pub struct Args {
    /// Start from an empty timeline instead of the sample wedding timeline
    #[arg(long, global = true)]
    pub empty: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the vows CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List timeline events in date order
    #[command(alias = "ls")]
    List(ListEventsArgs),
    /// Show a single event
    Show(ShowEventArgs),
    /// Add an event to the timeline
    #[command(alias = "a")]
    Add(AddEventArgs),
    /// Toggle an event between completed and upcoming
    #[command(alias = "t")]
    Toggle(ToggleStatusArgs),
    /// Show planning progress and the wedding countdown
    Summary(SummaryArgs),
    /// Start the MCP server
    Serve,
}

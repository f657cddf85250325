//! MCP server implementation for vows
//!
//! Exposes the wedding timeline over the Model Context Protocol so an
//! assistant can read the plan, add events and tick milestones off. One
//! store lives for the whole session.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};
use vows_core::EventStore;

pub mod errors;
pub mod handlers;

pub use handlers::{EventDraft, Id, ListEvents, McpResult, SummarizeTimeline};

/// MCP server for vows
#[derive(Clone)]
pub struct VowsMcpServer {
    store: Arc<Mutex<EventStore>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl VowsMcpServer {
    /// Create a new server around a session store
    pub fn new(store: EventStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "list_events",
        description = "List the wedding timeline in date order. Each event shows its ID, title, status, date, time, location and category. Optionally pass status ('upcoming', 'in-progress' or 'completed') to filter."
    )]
    async fn list_events(&self, params: Parameters<ListEvents>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.store.clone());
        handlers.list_events(params).await
    }

    #[tool(
        name = "show_event",
        description = "Show the full details of a single timeline event by its ID, including its description."
    )]
    async fn show_event(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.store.clone());
        handlers.show_event(params).await
    }

    #[tool(
        name = "add_event",
        description = "Add an event to the wedding timeline. Requires title, location and date (YYYY-MM-DD). Optional: time (e.g. '2:00 PM', defaults to '12:00 PM'), type (venue, catering, attire, photography, flowers, music, planning or wedding-day; defaults to planning), status (defaults to upcoming) and description. The timeline is re-sorted by date and the new event ID is returned."
    )]
    async fn add_event(&self, params: Parameters<EventDraft>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.store.clone());
        handlers.add_event(params).await
    }

    #[tool(
        name = "toggle_status",
        description = "Toggle an event between completed and upcoming. An in-progress event becomes completed. Returns the new and previous status."
    )]
    async fn toggle_status(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.store.clone());
        handlers.toggle_status(params).await
    }

    #[tool(
        name = "timeline_summary",
        description = "Summarize planning progress: how many events are completed, upcoming and in progress, the next upcoming event and the number of days until the wedding day. Pass today (YYYY-MM-DD) to count from a specific date."
    )]
    async fn timeline_summary(&self, params: Parameters<SummarizeTimeline>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.store.clone());
        handlers.timeline_summary(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for VowsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "vows".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(r#"Vows keeps a wedding planning timeline: dated milestones such as venue visits, tastings, fittings and the wedding day itself.

## Events
- Every event has an ID, title, location, date (YYYY-MM-DD), display time, category (`type`) and status
- Status is one of upcoming, in-progress or completed
- The timeline is always kept in date order; events on the same date stay in the order they were added

## Workflow
1. Use `list_events` to see the timeline and find event IDs
2. Add milestones with `add_event`; title, location and date are required
3. Mark milestones done (or reopen them) with `toggle_status`
4. Use `timeline_summary` for progress and the countdown to the wedding day

The timeline lives in memory for the duration of this session."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: VowsMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting vows MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

//! MCP tool handlers implementation

use std::sync::Arc;

use jiff::Zoned;
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;
use vows_core::{
    display::{CreateResult, EventList, SummaryReport, ToggleResult},
    params as core, EventStore, TimelineError,
};

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// The core parameter types stay free of rmcp. This transparent wrapper adds
// what the tool router needs (Deserialize, JsonSchema) and forwards both to
// the wrapped type, so the JSON a client sends is exactly the core shape.

/// Generic MCP wrapper for core parameter types
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type EventDraft = McpParams<core::EventDraft>;
pub type ListEvents = McpParams<core::ListEvents>;
pub type SummarizeTimeline = McpParams<core::SummarizeTimeline>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    store: Arc<Mutex<EventStore>>,
}

impl McpHandlers {
    pub fn new(store: Arc<Mutex<EventStore>>) -> Self {
        Self { store }
    }

    pub async fn list_events(&self, Parameters(params): Parameters<ListEvents>) -> McpResult {
        debug!("list_events: {params:?}");

        let status = params
            .as_ref()
            .status_filter()
            .map_err(|e| to_mcp_error("Failed to list events", &e))?;

        let store = self.store.lock().await;
        let events = match status {
            Some(status) => store.events_with_status(status),
            None => store.list_events().to_vec(),
        };

        let title = match status {
            Some(status) => format!("Wedding Timeline ({status})"),
            None => "Wedding Timeline".to_string(),
        };
        text(EventList::with_title(&events, &title).to_string())
    }

    pub async fn show_event(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_event: {params:?}");

        let id = &params.as_ref().id;
        let store = self.store.lock().await;
        let event = store
            .get_event(id)
            .ok_or_else(|| to_mcp_error("Failed to show event", &TimelineError::not_found(id)))?;

        text(event.to_string())
    }

    pub async fn add_event(&self, Parameters(params): Parameters<EventDraft>) -> McpResult {
        debug!("add_event: {params:?}");

        let event = self
            .store
            .lock()
            .await
            .add_event(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to add event", &e))?;

        text(CreateResult::new(event).to_string())
    }

    pub async fn toggle_status(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("toggle_status: {params:?}");

        let id = &params.as_ref().id;
        let mut store = self.store.lock().await;
        let previous = store.get_event(id).map(|event| event.status);
        let event = store
            .toggle_status(id)
            .map_err(|e| to_mcp_error("Failed to toggle event status", &e))?;

        let previous = previous.unwrap_or_else(|| event.status.toggled());
        text(ToggleResult::new(previous, event).to_string())
    }

    pub async fn timeline_summary(
        &self,
        Parameters(params): Parameters<SummarizeTimeline>,
    ) -> McpResult {
        debug!("timeline_summary: {params:?}");

        let today = params
            .as_ref()
            .reference_date(Zoned::now().date())
            .map_err(|e| to_mcp_error("Failed to summarize timeline", &e))?;

        let store = self.store.lock().await;
        let report = SummaryReport {
            summary: store.summary(),
            next_event: store.next_upcoming(today),
            days_until_wedding: store.days_until_wedding(today),
        };
        text(report.to_string())
    }
}

//! Error handling utilities for MCP server

use rmcp::ErrorData;
use vows_core::TimelineError;

/// Helper to convert timeline errors to MCP errors
///
/// Bad input and unknown IDs are the caller's fault and map to
/// `invalid_params`; anything else is reported as an internal error.
pub fn to_mcp_error(message: &str, error: &TimelineError) -> ErrorData {
    let message = format!("{message}: {error}");
    if error.is_validation() || error.is_not_found() {
        ErrorData::invalid_params(message, None)
    } else {
        ErrorData::internal_error(message, None)
    }
}

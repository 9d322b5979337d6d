//! MCP server for form input handling.
//!
//! This module provides the MCP protocol server that exposes the phone,
//! email and submission rules to clients through the Model Context Protocol.

pub mod handlers;

pub use handlers::FormInputMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the form input MCP server with stdio transport.
///
/// It communicates via stdin/stdout using the MCP protocol and returns
/// once the client disconnects.
pub async fn run_server(server: FormInputMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}

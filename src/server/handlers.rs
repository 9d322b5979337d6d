//! MCP tool handlers for the form input server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::config::Config;
use crate::observability::MetricsTracker;
use crate::tools::{EmailTools, PhoneTools, SubmissionTools};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;

/// The MCP server exposing phone, email and submission tools.
#[derive(Clone)]
pub struct FormInputMcpServer {
    phone_tools: PhoneTools,
    email_tools: EmailTools,
    submission_tools: SubmissionTools,
    metrics: MetricsTracker,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for FormInputMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "persian-form-input".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Formatting and validation for Persian admin forms - phone grouping, email typo suggestions, Persian digit normalization, and per-form submission guards.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct InputParams {
    input: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct BeginSubmissionParams {
    form_id: String,
    phone: String,
    email: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FormIdParams {
    form_id: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &impl serde::Serialize) -> Result<CallToolResult, McpError> {
    let json_response = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(json_response)]))
}

// Tool router implementation
#[tool_router]
impl FormInputMcpServer {
    /// Create a new form input MCP server.
    pub fn new(config: &Config) -> Self {
        let metrics = MetricsTracker::with_enabled(config.metrics_enabled);

        Self {
            phone_tools: PhoneTools::new(metrics.clone()),
            email_tools: EmailTools::new(metrics.clone(), config.email_suggestion_min_length),
            submission_tools: SubmissionTools::new(config.overlay_delay(), metrics.clone()),
            metrics,
            tool_router: Self::tool_router(),
        }
    }

    /// Classify and format a phone number.
    #[tool(
        description = "Classify a phone number (mobile, landline, mobile without leading zero, unknown), return its grouped display form (e.g. 0912 345 6789 or 021 1234 5678), validity badge and stored form. Persian digits are accepted."
    )]
    async fn format_phone(
        &self,
        params: Parameters<InputParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = self.phone_tools.check_phone(&params.0.input);
        json_result(&response)
    }

    /// Validate an email and suggest a typo correction.
    #[tool(
        description = "Validate an email address after normalizing Persian/Arabic digits and @ look-alikes. Returns validity, badge, and a corrected address for common provider typos (gmial.com, yahooo.com, ...)."
    )]
    async fn check_email(
        &self,
        params: Parameters<InputParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = self.email_tools.check_email(&params.0.input);
        json_result(&response)
    }

    /// Map Persian/Arabic digits to ASCII.
    #[tool(
        description = "Replace Persian (۰-۹) and Arabic-Indic (٠-٩) digits with 0-9 and ＠/٪ with @. Other characters are unchanged."
    )]
    async fn normalize_digits(
        &self,
        params: Parameters<InputParams>,
    ) -> Result<CallToolResult, McpError> {
        let normalized = self.email_tools.normalize_digits(&params.0.input);
        json_result(&serde_json::json!({ "normalized": normalized }))
    }

    /// Validate a customer form and start its submission.
    #[tool(
        description = "Validate a customer form's phone and email and start its submission. Refuses a second submission from the same form until it is restored. Returns the stored values or the field to focus."
    )]
    async fn begin_submission(
        &self,
        params: Parameters<BeginSubmissionParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: begin_submission called");
        tracing::debug!("Parameters: form_id={}", params.form_id);

        let response = self
            .submission_tools
            .begin_submission(&params.form_id, &params.phone, &params.email, chrono::Utc::now())
            .await;

        json_result(&response)
    }

    /// Reset a form restored from the browser history cache.
    #[tool(
        description = "Reset a form after the page is restored from the browser's back/forward cache, allowing it to submit again"
    )]
    async fn restore_form(
        &self,
        params: Parameters<FormIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let form_id = params.0.form_id;
        let was_submitting = self.submission_tools.restore_form(&form_id).await;

        json_result(&serde_json::json!({
            "form_id": form_id,
            "was_submitting": was_submitting,
        }))
    }

    /// Report whether a form is submitting and its overlay is due.
    #[tool(description = "Report whether a form has a submission in flight and whether its loading overlay is due")]
    async fn form_status(
        &self,
        params: Parameters<FormIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .submission_tools
            .form_status(&params.0.form_id, chrono::Utc::now())
            .await;

        json_result(&response)
    }

    /// Summarize tool usage counters.
    #[tool(description = "Summarize how many phone checks, email checks, suggestions and submissions the server has handled")]
    async fn get_metrics(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            self.metrics.summary(),
        )]))
    }
}

//! Persian Form Input - phone and email input rules for Persian-language admin forms.
//!
//! This library holds the formatting and validation logic that the customer
//! and user forms run on every keystroke and at submit time, plus an MCP
//! server exposing it as tools.
//!
//! # Architecture
//!
//! - **domain**: Pure rules: phone classification/grouping, email syntax and
//!   typo suggestions, Persian/Arabic digit normalization
//! - **form**: Per-control feedback, validity messages, and the per-form submission guard
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **observability**: Usage counters
//! - **tools**: MCP tool implementations
//! - **server**: MCP protocol server

pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod observability;
pub mod server;
pub mod tools;

// Re-export commonly used types
pub use config::Config;
pub use domain::{EmailAddress, PhoneKind, PhoneNumber, ValidationError};
pub use error::{ConfigError, FormField, SubmitError};
pub use form::{FormController, Submission};
pub use observability::MetricsTracker;
pub use server::FormInputMcpServer;
pub use tools::{EmailTools, PhoneTools, SubmissionTools};

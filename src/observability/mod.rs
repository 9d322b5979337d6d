//! Observability module for monitoring and metrics.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};

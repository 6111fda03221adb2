use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Initialize tracing with JSON output for structured logging.
/// This provides the correlation IDs and structured data needed to follow a
/// workflow run step by step.
pub fn init_telemetry() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true),
        )
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Workflow telemetry initialized with structured logging");
    Ok(())
}

/// Generate a correlation ID for linking the steps of one workflow run
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a span with common workflow run attributes
pub fn create_workflow_span(record_name: &str, correlation_id: &str) -> tracing::Span {
    tracing::info_span!(
        "user_workflow",
        record.name = record_name,
        correlation.id = correlation_id,
        otel.kind = "internal"
    )
}

/// Shutdown telemetry gracefully
pub fn shutdown_telemetry() {
    // For structured logging, no explicit shutdown needed
    tracing::info!("Workflow telemetry shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_ids_are_unique() {
        assert_ne!(generate_correlation_id(), generate_correlation_id());
    }
}

// ReqRes Workflow Library - User API End-to-End Checks
// This exposes the core components for testing and integration

pub mod api;
pub mod cli;
pub mod config;
pub mod fixtures;
pub mod observability;
pub mod telemetry;
pub mod workflow;

// Re-export key types for easy access
pub use api::{ApiError, ApiResponse, UserApi, UserApiClient, API_KEY_HEADER};
pub use config::{config, ApiConfig, ReqresWorkflowConfig};
pub use fixtures::{load_user_records, UserRecord};
pub use observability::{api_metrics, ApiMetrics, OperationTimer};
pub use telemetry::{
    create_workflow_span, generate_correlation_id, init_telemetry, shutdown_telemetry,
};
pub use workflow::{
    StepOutcome, StepRecord, VerifyOutcome, WorkflowError, WorkflowReport, WorkflowRun,
    WorkflowRunner, WorkflowState, WorkflowStep,
};

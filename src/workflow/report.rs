use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::ApiResponse;

use super::outcome::{StepOutcome, WorkflowStep};

/// Diagnostic entry for one executed step. Attachment is observational only
/// and never affects control flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: WorkflowStep,
    pub status: Option<u16>,
    pub body: Option<String>,
    pub outcome: StepOutcome,
    pub recorded_at: DateTime<Utc>,
}

impl StepRecord {
    pub fn passed(step: WorkflowStep, response: &ApiResponse) -> Self {
        Self {
            step,
            status: Some(response.status),
            body: Some(response.pretty_body()),
            outcome: StepOutcome::Passed,
            recorded_at: Utc::now(),
        }
    }

    pub fn skipped(step: WorkflowStep, response: &ApiResponse, reason: &str) -> Self {
        Self {
            step,
            status: Some(response.status),
            body: Some(response.pretty_body()),
            outcome: StepOutcome::Skipped {
                reason: reason.to_string(),
            },
            recorded_at: Utc::now(),
        }
    }

    pub fn failed(step: WorkflowStep, response: &ApiResponse, error: &str) -> Self {
        Self {
            step,
            status: Some(response.status),
            body: Some(response.pretty_body()),
            outcome: StepOutcome::Failed {
                error: error.to_string(),
            },
            recorded_at: Utc::now(),
        }
    }

    /// Step that never produced a response (transport failure).
    pub fn unreachable(step: WorkflowStep, error: &str) -> Self {
        Self {
            step,
            status: None,
            body: None,
            outcome: StepOutcome::Failed {
                error: error.to_string(),
            },
            recorded_at: Utc::now(),
        }
    }
}

/// Accumulated diagnostics for one workflow run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowReport {
    pub record_name: String,
    pub correlation_id: String,
    pub steps: Vec<StepRecord>,
}

impl WorkflowReport {
    pub fn new(record_name: &str, correlation_id: &str) -> Self {
        Self {
            record_name: record_name.to_string(),
            correlation_id: correlation_id.to_string(),
            steps: Vec::new(),
        }
    }

    pub fn attach(&mut self, record: StepRecord) {
        self.steps.push(record);
    }

    pub fn passed(&self) -> bool {
        !self.steps.iter().any(|s| s.outcome.is_failure())
    }

    pub fn skipped_steps(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, StepOutcome::Skipped { .. }))
            .count()
    }

    /// Human-readable rendering for the CLI.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Workflow run for {} (correlation {})\n",
            self.record_name, self.correlation_id
        ));
        for record in &self.steps {
            let status = record
                .status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            let verdict = match &record.outcome {
                StepOutcome::Passed => "PASSED".to_string(),
                StepOutcome::Skipped { reason } => format!("SKIPPED ({reason})"),
                StepOutcome::Failed { error } => format!("FAILED ({error})"),
            };
            out.push_str(&format!(
                "  {:<16} HTTP {:<4} {}\n",
                record.step.as_str(),
                status,
                verdict
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn report_fails_when_any_step_fails() {
        let mut report = WorkflowReport::new("A", "cid");
        report.attach(StepRecord::passed(
            WorkflowStep::Create,
            &response(201, "{}"),
        ));
        assert!(report.passed());

        report.attach(StepRecord::failed(
            WorkflowStep::Update,
            &response(500, "{}"),
            "update expected HTTP 200, got 500",
        ));
        assert!(!report.passed());
    }

    #[test]
    fn skips_are_counted_but_not_failures() {
        let mut report = WorkflowReport::new("A", "cid");
        report.attach(StepRecord::skipped(
            WorkflowStep::VerifyUpdate,
            &response(404, "{}"),
            "backend does not persist writes",
        ));
        assert!(report.passed());
        assert_eq!(report.skipped_steps(), 1);
    }

    #[test]
    fn render_names_each_step() {
        let mut report = WorkflowReport::new("Mostafa Fahim", "cid");
        report.attach(StepRecord::passed(
            WorkflowStep::Create,
            &response(201, r#"{"id":"1"}"#),
        ));
        report.attach(StepRecord::unreachable(
            WorkflowStep::Update,
            "connection refused",
        ));

        let rendered = report.render();
        assert!(rendered.contains("Mostafa Fahim"));
        assert!(rendered.contains("create"));
        assert!(rendered.contains("HTTP 201"));
        assert!(rendered.contains("FAILED (connection refused)"));
    }
}

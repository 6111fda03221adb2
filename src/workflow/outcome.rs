use serde::{Deserialize, Serialize};

/// The five states of a workflow run, in strict dependency order. Each step
/// only executes when its predecessor completed without a failing assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowStep {
    Create,
    Update,
    VerifyUpdate,
    Delete,
    VerifyDeletion,
}

impl WorkflowStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStep::Create => "create",
            WorkflowStep::Update => "update",
            WorkflowStep::VerifyUpdate => "verify-update",
            WorkflowStep::Delete => "delete",
            WorkflowStep::VerifyDeletion => "verify-deletion",
        }
    }
}

impl std::fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the verify-update read. The backing service does not persist
/// writes, so a 404 here is a recognized skip rather than a failure; any
/// status other than 200/404 breaks the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerifyOutcome {
    Verified,
    SkippedNonPersistent { status: u16 },
    ContractViolation { status: u16, body: String },
}

impl VerifyOutcome {
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, VerifyOutcome::ContractViolation { .. })
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, VerifyOutcome::SkippedNonPersistent { .. })
    }
}

/// What happened to a single step, as recorded in the run report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    Passed,
    Skipped { reason: String },
    Failed { error: String },
}

impl StepOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, StepOutcome::Failed { .. })
    }
}

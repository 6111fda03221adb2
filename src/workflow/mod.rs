pub mod outcome;
pub mod report;
pub mod runner;

pub use outcome::{StepOutcome, VerifyOutcome, WorkflowStep};
pub use report::{StepRecord, WorkflowReport};
pub use runner::{WorkflowError, WorkflowRun, WorkflowRunner, WorkflowState};

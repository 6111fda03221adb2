use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One input record for a workflow run. Read from the fixture file at test
/// start and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub name: String,
    pub initial_job: String,
    pub updated_job: String,
}

/// Load the user records that parameterize repeated runs of the workflow.
pub fn load_user_records<P: AsRef<Path>>(path: P) -> Result<Vec<UserRecord>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture file {}", path.display()))?;
    let records: Vec<UserRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("Fixture file {} is not a valid user record list", path.display()))?;
    Ok(records)
}

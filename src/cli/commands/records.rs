use anyhow::Result;

use crate::config::config;
use crate::fixtures::load_user_records;

pub struct RecordsCommand {
    pub fixture: Option<String>,
}

impl RecordsCommand {
    pub fn new(fixture: Option<String>) -> Self {
        Self { fixture }
    }

    pub fn execute(&self) -> Result<()> {
        let config = config()?;
        let fixture_path = self.fixture.as_deref().unwrap_or(&config.fixtures.path);
        let records = load_user_records(fixture_path)?;

        println!("📋 {} user record(s) in {}", records.len(), fixture_path);
        for record in &records {
            println!(
                "   👤 {}: {} → {}",
                record.name, record.initial_job, record.updated_job
            );
        }
        Ok(())
    }
}

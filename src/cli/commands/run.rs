use anyhow::{bail, Result};

use crate::api::UserApiClient;
use crate::config::config;
use crate::fixtures::load_user_records;
use crate::observability::{api_metrics, OperationTimer};
use crate::workflow::WorkflowRunner;

pub struct RunCommand {
    pub fixture: Option<String>,
    pub fail_fast: bool,
}

impl RunCommand {
    pub fn new(fixture: Option<String>, fail_fast: bool) -> Self {
        Self { fixture, fail_fast }
    }

    pub async fn execute(&self) -> Result<()> {
        let config = config()?;
        let fixture_path = self.fixture.as_deref().unwrap_or(&config.fixtures.path);
        let records = load_user_records(fixture_path)?;
        if records.is_empty() {
            bail!("Fixture file {} contains no user records", fixture_path);
        }

        println!(
            "🚀 Running the user workflow for {} record(s) against {}{}",
            records.len(),
            config.api.base_url,
            config.api.base_path
        );
        println!();

        let client = UserApiClient::new(&config.api)?;
        let runner = WorkflowRunner::new(client);
        let timer = OperationTimer::new("workflow_run_all");

        let mut failed = 0usize;
        for record in &records {
            let run = runner.run(record).await;
            print!("{}", run.report.render());
            println!();

            if !run.passed() {
                failed += 1;
                if self.fail_fast {
                    println!("⏹  Stopping after first failed run (--fail-fast)");
                    break;
                }
            }
        }

        timer.finish();
        api_metrics().log_stats();

        if failed > 0 {
            bail!("{failed} workflow run(s) failed");
        }
        println!("✅ All workflow runs passed");
        Ok(())
    }
}

use anyhow::Result;
use std::path::Path;

use crate::config::config;

pub struct CheckCommand;

impl CheckCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self) -> Result<()> {
        let config = config()?;

        println!("⚙️  Effective configuration");
        println!(
            "   🌐 Endpoint: {}{}",
            config.api.base_url, config.api.base_path
        );
        println!("   🔑 API key: {}", mask_key(config.api.key()));

        let fixture_exists = Path::new(&config.fixtures.path).exists();
        println!(
            "   📄 Fixture: {} ({})",
            config.fixtures.path,
            if fixture_exists { "found" } else { "missing" }
        );
        println!(
            "   📊 Tracing: {}",
            if config.observability.tracing_enabled {
                "enabled"
            } else {
                "disabled"
            }
        );

        if !fixture_exists {
            println!();
            println!("⚠️  Fixture file not found - 'reqres-workflow run' will fail");
        }
        Ok(())
    }
}

impl Default for CheckCommand {
    fn default() -> Self {
        Self::new()
    }
}

fn mask_key(key: &str) -> String {
    if key.len() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", &key[..4])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_masked_for_display() {
        assert_eq!(mask_key("reqres-free-v1"), "reqr****");
        assert_eq!(mask_key("abc"), "****");
    }
}

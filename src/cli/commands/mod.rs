use anyhow::Result;

pub mod check;
pub mod records;
pub mod run;

pub fn show_usage() -> Result<()> {
    println!("🧪 ReqRes Workflow - User API end-to-end checks");
    println!();
    println!("To get started:");
    println!("  🚀 reqres-workflow run       # Execute the full user workflow");
    println!("  📋 reqres-workflow records   # List the fixture records");
    println!("  ⚙️  reqres-workflow check     # Validate configuration");
    println!();
    println!("💡 Run 'reqres-workflow run' to exercise the API end to end!");
    Ok(())
}

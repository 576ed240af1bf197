use serde::Serialize;

#[derive(Serialize)]
pub struct ReleaseOutput {
    pub version: String,
    pub tag: String,
    pub pushed: bool,
    pub released: bool,
    pub dry_run: bool,
}

pub fn output_results(output: ReleaseOutput) -> std::result::Result<(), Box<dyn std::error::Error>> {
    if output.dry_run {
        println!("🔍 Dry run - no git or gh command was executed");
    } else if output.released {
        println!("✅ Released {} (tagged, pushed, GitHub release created)", output.tag);
    } else if output.pushed {
        println!("✅ Tagged and pushed {} (GitHub release skipped)", output.tag);
    } else {
        println!("✅ Tagged {} (push and GitHub release skipped)", output.tag);
    }

    // Also output as JSON for debugging
    println!("📊 Result: {}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

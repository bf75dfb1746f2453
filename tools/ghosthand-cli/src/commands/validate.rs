//! Validate a gesture script.

use std::path::PathBuf;

use ghosthand_pointer_model::GestureScript;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating script at: {}", path.display());

    let json = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read script: {e}"))?;
    let script = GestureScript::from_json(&json)
        .map_err(|e| anyhow::anyhow!("Failed to parse script: {e}"))?;

    println!("  Pointers: {}", script.pointers.len());
    println!("  Commands: {}", script.commands.len());

    let problems = script.validate();
    if problems.is_empty() {
        println!("\nScript is valid.");
    } else {
        println!("\nValidation issues:");
        for problem in &problems {
            println!("  - {problem}");
        }
        println!("\n{} issue(s) found. Script will not play.", problems.len());
        anyhow::bail!("script validation failed");
    }

    Ok(())
}

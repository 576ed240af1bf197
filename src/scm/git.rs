use crate::runner::CommandRunner;
use std::error::Error;
use std::io::Write;

/// Create an annotated tag whose message is the release notes. The notes are
/// handed to git through a temporary file owned by this step alone; the file
/// is removed once the tag command has completed, whatever its outcome.
pub fn create_tag(
    runner: &dyn CommandRunner,
    tag: &str,
    notes: &str,
) -> Result<(), Box<dyn Error>> {
    let mut notes_file = tempfile::Builder::new()
        .suffix(".md")
        .tempfile()
        .map_err(|e| format!("Failed to create temporary notes file: {}", e))?;

    notes_file
        .write_all(notes.as_bytes())
        .map_err(|e| format!("Failed to write temporary notes file: {}", e))?;

    let notes_path = notes_file
        .path()
        .to_str()
        .ok_or("Temporary notes file path is not valid UTF-8")?
        .to_string();

    println!("📝 Release notes written to temporary file: {}", notes_path);

    let result = runner.run("git", &["tag", "-a", tag, "-F", &notes_path]);

    // Dropping the guard removes the file before push or release can start
    drop(notes_file);
    println!("🗑️  Temporary file {} removed", notes_path);

    result
}

pub fn push_tag(
    runner: &dyn CommandRunner,
    remote: &str,
    tag: &str,
) -> Result<(), Box<dyn Error>> {
    runner.run("git", &["push", remote, tag])
}

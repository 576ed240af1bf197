use crate::runner::CommandRunner;
use std::error::Error;

/// Create a GitHub release for an already pushed tag via the gh CLI. The tag
/// name doubles as the release title and the notes come from the tag's own
/// annotation, so nothing is re-read from the changelog here.
pub fn create_release(runner: &dyn CommandRunner, tag: &str) -> Result<(), Box<dyn Error>> {
    runner.run(
        "gh",
        &["release", "create", tag, "-t", tag, "--notes-from-tag"],
    )
}

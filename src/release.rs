use crate::changelog::ChangelogEntry;
use crate::output::ReleaseOutput;
use crate::runner::CommandRunner;
use crate::scm;
use std::error::Error;

#[derive(Debug, Clone)]
pub struct ReleaseOptions {
    pub no_push: bool,
    pub no_release: bool,
    pub remote: String,
    pub dry_run: bool,
}

/// Drive the release stages in order: tag, push, GitHub release. Each stage
/// only runs if the previous one succeeded; the first failure aborts the run
/// and whatever was already created stays in place.
pub fn run_release(
    entry: &ChangelogEntry,
    options: &ReleaseOptions,
    runner: &dyn CommandRunner,
) -> Result<ReleaseOutput, Box<dyn Error>> {
    scm::git::create_tag(runner, &entry.tag, &entry.notes)?;
    println!("🏷️  Created annotated tag {}", entry.tag);

    if options.no_push {
        println!("ℹ️ Skipping git tag push and GitHub release creation (--no-push specified)");
        return Ok(ReleaseOutput {
            version: entry.version.to_string(),
            tag: entry.tag.clone(),
            pushed: false,
            released: false,
            dry_run: options.dry_run,
        });
    }

    scm::git::push_tag(runner, &options.remote, &entry.tag)?;
    println!("📤 Pushed tag {} to {}", entry.tag, options.remote);

    if options.no_release {
        println!("ℹ️ Skipping GitHub release creation (--no-release specified)");
        return Ok(ReleaseOutput {
            version: entry.version.to_string(),
            tag: entry.tag.clone(),
            pushed: true,
            released: false,
            dry_run: options.dry_run,
        });
    }

    scm::github::create_release(runner, &entry.tag)?;
    println!("🎉 Created GitHub release {}", entry.tag);

    Ok(ReleaseOutput {
        version: entry.version.to_string(),
        tag: entry.tag.clone(),
        pushed: true,
        released: true,
        dry_run: options.dry_run,
    })
}

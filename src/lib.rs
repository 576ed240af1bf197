use std::env;
use std::error::Error;
use std::path::Path;

pub mod changelog;
pub mod cli;
pub mod config;
pub mod output;
pub mod release;
pub mod runner;
pub mod scm;

use crate::changelog::{load_changelog, parse_changelog};
use crate::cli::Args;
use crate::config::Config;
use crate::output::ReleaseOutput;
use crate::release::{run_release, ReleaseOptions};
use crate::runner::{CommandRunner, DryRunRunner, ShellRunner};

pub struct ReleaseApplication {
    config: Config,
    args: Args,
}

impl ReleaseApplication {
    pub fn new(args: Args, config: Config) -> Self {
        Self { config, args }
    }

    pub fn run(&self) -> std::result::Result<ReleaseOutput, Box<dyn Error>> {
        // Change to working directory
        env::set_current_dir(&self.args.working_directory).map_err(|e| {
            format!(
                "Failed to change to working directory {:?}: {}",
                self.args.working_directory, e
            )
        })?;

        println!("🔧 Loaded configuration from {:?}", self.args.config_file);

        let changelog_path = Path::new(self.config.changelog_path());
        println!("📖 Reading {:?}...", changelog_path);

        let content = load_changelog(changelog_path)?;
        let entry = parse_changelog(&content)?;

        println!("📋 Latest version: {}", entry.tag);
        println!("{}", "-".repeat(20));
        println!("{}", entry.notes);
        println!("{}", "-".repeat(20));

        if self.args.dry_run {
            println!("🔍 Dry run mode - commands will be printed, not executed");
        }

        let options = ReleaseOptions {
            no_push: self.args.no_push,
            no_release: self.args.no_release,
            remote: self.config.remote().to_string(),
            dry_run: self.args.dry_run,
        };

        let runner: Box<dyn CommandRunner> = if self.args.dry_run {
            Box::new(DryRunRunner)
        } else {
            Box::new(ShellRunner)
        };

        run_release(&entry, &options, runner.as_ref())
    }
}

// Factory function for easier testing and dependency injection
pub fn create_release_application() -> std::result::Result<ReleaseApplication, Box<dyn Error>> {
    let args = Args::parse();

    let config = Config::load(&args.config_file)
        .map_err(|e| format!("Failed to load config from {:?}: {}", args.config_file, e))?;

    Ok(ReleaseApplication::new(args, config))
}

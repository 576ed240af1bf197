use std::error::Error;
use std::process::Command;

/// Seam for external tool invocation so the release flow can run for real,
/// echo commands in dry-run mode, or record them in tests
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<(), Box<dyn Error>>;
}

pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<(), Box<dyn Error>> {
        let rendered = render_command(program, args);
        println!("🚀 Running: {}", rendered);

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| format!("Failed to run {}: {}", rendered, e))?;

        if !status.success() {
            return Err(format!("Command failed ({}): {}", status, rendered).into());
        }

        Ok(())
    }
}

pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<(), Box<dyn Error>> {
        println!("🔍 [dry run] Would run: {}", render_command(program, args));
        Ok(())
    }
}

pub fn render_command(program: &str, args: &[&str]) -> String {
    let mut rendered = program.to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_command_joins_program_and_args() {
        let rendered = render_command("git", &["tag", "-a", "v1.0.0"]);
        assert_eq!(rendered, "git tag -a v1.0.0");
    }

    #[test]
    fn test_render_command_without_args() {
        assert_eq!(render_command("git", &[]), "git");
    }

    #[test]
    fn test_dry_run_runner_always_succeeds() {
        let runner = DryRunRunner;
        let result = runner.run("definitely-not-a-real-binary", &["--flag"]);
        assert!(result.is_ok(), "Dry run must not touch the system");
    }

    #[test]
    fn test_shell_runner_reports_spawn_failure() {
        let runner = ShellRunner;
        let result = runner.run("definitely-not-a-real-binary", &[]);

        assert!(result.is_err());
        let message = result.err().unwrap().to_string();
        assert!(
            message.contains("Failed to run"),
            "Error should mention the spawn failure: {}",
            message
        );
    }

    #[test]
    fn test_shell_runner_reports_nonzero_exit() {
        let runner = ShellRunner;
        let result = runner.run("git", &["not-a-real-subcommand"]);

        assert!(result.is_err());
        let message = result.err().unwrap().to_string();
        assert!(
            message.contains("Command failed"),
            "Error should mention the failed command: {}",
            message
        );
    }
}

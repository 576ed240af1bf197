use std::env;
use std::path::PathBuf;

#[derive(Debug)]
pub struct Args {
    pub config_file: PathBuf,
    pub dry_run: bool,
    pub no_push: bool,
    pub no_release: bool,
    pub working_directory: PathBuf,
}

impl Args {
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut config_file = PathBuf::from(".release-config.toml");
        let mut dry_run = false;
        let mut no_push = false;
        let mut no_release = false;
        let mut working_directory = PathBuf::from(".");

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config-file" => {
                    if i + 1 < args.len() {
                        config_file = PathBuf::from(&args[i + 1]);
                        i += 2;
                    } else {
                        eprintln!("Error: --config-file requires a value");
                        std::process::exit(1);
                    }
                }
                "--dry-run" => {
                    dry_run = true;
                    i += 1;
                }
                "--no-push" => {
                    no_push = true;
                    i += 1;
                }
                "--no-release" => {
                    no_release = true;
                    i += 1;
                }
                "--working-directory" => {
                    if i + 1 < args.len() {
                        working_directory = PathBuf::from(&args[i + 1]);
                        i += 2;
                    } else {
                        eprintln!("Error: --working-directory requires a value");
                        std::process::exit(1);
                    }
                }
                "--help" | "-h" => {
                    Self::print_help();
                    std::process::exit(0);
                }
                _ => {
                    eprintln!("Error: Unknown argument: {}", args[i]);
                    eprintln!("Use --help for usage information");
                    std::process::exit(1);
                }
            }
        }

        Self {
            config_file,
            dry_run,
            no_push,
            no_release,
            working_directory,
        }
    }

    fn print_help() {
        println!("changelog-release");
        println!("Turn the newest CHANGELOG.md entry into an annotated git tag and a GitHub release");
        println!();
        println!("OPTIONS:");
        println!("    --config-file <FILE>           Path to the configuration file [default: .release-config.toml]");
        println!("    --dry-run                      Print commands without executing them");
        println!("    --no-push                      Skip pushing the git tag. Automatically implies --no-release");
        println!("    --no-release                   Skip creating a GitHub release");
        println!("    --working-directory <DIR>      Working directory [default: .]");
        println!("    --help, -h                     Print help information");
    }
}

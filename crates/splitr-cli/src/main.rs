//! splitr CLI: split a file into `<file>aa`, `<file>ab`, ...

use std::path::{Path, PathBuf};

use clap::Parser;
use splitr_core::config::SplitConfig;
use splitr_core::error::Error as CoreError;
use splitr_core::manifest::SplitManifest;
use splitr_core::policy::SplitPolicy;
use splitr_exec::{ExecError, Splitter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LINES_PER_FILE: u64 = 1000;

#[derive(Parser)]
#[command(name = "splitr")]
#[command(about = "Split a file into pieces by lines, file count or bytes", long_about = None)]
struct Cli {
    /// Number of lines per output file (1000 if no mode is given)
    #[arg(short = 'l', long, group = "mode")]
    lines: Option<u64>,

    /// Number of output files; the last one takes any leftover lines
    #[arg(short = 'n', long, group = "mode")]
    number: Option<u64>,

    /// Number of bytes per output file
    #[arg(short = 'b', long, group = "mode")]
    bytes: Option<u64>,

    /// Print the split manifest as JSON
    #[arg(long)]
    json: bool,

    /// File to split
    file: PathBuf,
}

impl Cli {
    fn policy(&self) -> splitr_core::error::Result<SplitPolicy> {
        match (self.lines, self.number, self.bytes) {
            (None, None, None) => SplitPolicy::by_lines(DEFAULT_LINES_PER_FILE),
            (Some(n), None, None) => SplitPolicy::by_lines(n),
            (None, Some(n), None) => SplitPolicy::by_file_count(n),
            (None, None, Some(n)) => SplitPolicy::by_bytes(n),
            _ => Err(CoreError::InvalidArgument(
                "cannot specify more than one of -l, -n and -b".into(),
            )),
        }
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(manifest) => {
            if cli.json {
                match serde_json::to_string_pretty(&manifest) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                print_summary(&manifest);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.suggestions() {
                eprintln!("  - {}", suggestion);
            }
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<SplitManifest, ExecError> {
    let policy = cli
        .policy()
        .map_err(|e| e.with_context("command-line flags"))?;
    let splitter = Splitter::new(SplitConfig::from_env());
    splitter.split(&cli.file, policy)
}

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env("SPLITR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_summary(manifest: &SplitManifest) {
    println!(
        "✓ Split {} into {} file(s) ({})",
        manifest.input.display(),
        manifest.shard_count(),
        manifest.policy
    );
    for shard in &manifest.shards {
        println!("  {}  {} bytes, {} lines", display_name(&shard.path), shard.bytes, shard.lines);
    }
    println!("  Duration: {}ms", manifest.duration_ms());
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_thousand_lines() {
        let cli = Cli::try_parse_from(["splitr", "input.txt"]).unwrap();
        assert_eq!(cli.policy().unwrap(), SplitPolicy::ByLines(1000));
        assert_eq!(cli.file, PathBuf::from("input.txt"));
    }

    #[test]
    fn picks_requested_mode() {
        let cli = Cli::try_parse_from(["splitr", "-n", "6", "input.txt"]).unwrap();
        assert_eq!(cli.policy().unwrap(), SplitPolicy::ByFileCount(6));
        let cli = Cli::try_parse_from(["splitr", "-b", "800", "--json", "input.txt"]).unwrap();
        assert_eq!(cli.policy().unwrap(), SplitPolicy::ByBytes(800));
        assert!(cli.json);
    }

    #[test]
    fn rejects_combined_modes_and_bad_values() {
        assert!(Cli::try_parse_from(["splitr", "-l", "10", "-b", "100", "input.txt"]).is_err());
        assert!(Cli::try_parse_from(["splitr", "-l", "-3", "input.txt"]).is_err());
        assert!(Cli::try_parse_from(["splitr", "-l", "10"]).is_err());

        let cli = Cli::try_parse_from(["splitr", "-l", "0", "input.txt"]).unwrap();
        assert!(cli.policy().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn flag_errors_name_the_flags_and_keep_their_class() {
        let cli = Cli::try_parse_from(["splitr", "-n", "0", "missing.txt"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().starts_with("command-line flags: invalid argument"));
        assert!(!err.suggestions().is_empty());
    }
}

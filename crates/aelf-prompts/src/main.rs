//! Build AElf audit prompts and print them to stdout.
//!
//! Reads the run counter from the `GITHUB_RUN_NUMBER` environment variable
//! (overridable with `--run-number`). Logs go to stderr; set `RUST_LOG` or
//! pass `--verbose` to see them.
//!
//! # Examples
//!
//! ```sh
//! # Question-generation prompt for one contract file
//! aelf-prompts questions contract/AElf.Contracts.Parliament/Parliament.cs
//!
//! # One JSON object per scope file
//! aelf-prompts --json questions --all > prompts.jsonl
//!
//! # Validate a finding, with a short note ahead of the report
//! aelf-prompts validate "Check the threshold math." --file finding.md
//!
//! # Scan for analogs of an external report piped on stdin
//! cat external.md | aelf-prompts scan --stdin
//!
//! # Which mirror this CI run should read
//! GITHUB_RUN_NUMBER=31 aelf-prompts target-url
//! ```

use std::fmt::Write as _;
use std::path::PathBuf;
use std::process;

use aelf_prompts::config::DEFAULT_MAX_REPO;
use aelf_prompts::input::read_input;
use aelf_prompts::scope::{self, SCOPE_FILES};
use aelf_prompts::{PromptError, PromptKind, RenderedPrompt, TargetConfig};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Build AElf audit prompts and print them to stdout.
#[derive(Parser)]
#[command(name = "aelf-prompts", version)]
struct Cli {
    /// Run counter; overrides GITHUB_RUN_NUMBER
    #[arg(long, global = true, allow_hyphen_values = true)]
    run_number: Option<String>,

    /// Number of mirrors the run counter rotates through
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_REPO)]
    max_repo: u32,

    /// Emit JSON (one object per line) including the resolved target URL
    #[arg(long, global = true)]
    json: bool,

    /// Log at info level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Prompt for generating audit questions about one contract file
    Questions {
        /// Contract file to focus on, relative to the AElf repository root
        target_file: Option<String>,

        /// Build one prompt for every in-scope file
        #[arg(long, conflicts_with = "target_file")]
        all: bool,
    },
    /// Prompt for validating a vulnerability report
    Validate(InputArgs),
    /// Prompt for investigating one security question
    Audit(InputArgs),
    /// Prompt for mapping an external report onto the AElf contracts
    Scan(InputArgs),
    /// Print the repository URL the prompt consumer should read
    TargetUrl,
    /// List the in-scope contract files
    Scope {
        /// List module directories instead of files
        #[arg(long)]
        modules: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Input text (prepended to --file or --stdin content when combined)
    text: Option<String>,

    /// Read the input from a file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Read the input from stdin
    #[arg(long)]
    stdin: bool,
}

impl InputArgs {
    fn read(&self) -> Result<String, PromptError> {
        read_input(self.text.as_deref(), self.file.as_deref(), self.stdin)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn target_config(cli: &Cli) -> TargetConfig {
    let config = TargetConfig::from_env().with_max_repo(cli.max_repo);
    match &cli.run_number {
        Some(run) => config.with_run_number(run.clone()),
        None => config,
    }
}

/// Render one prompt as plain text or as a JSON line.
fn render(cli: &Cli, kind: PromptKind, input: String) -> Result<String, PromptError> {
    let rendered = RenderedPrompt::new(kind, input);
    info!(kind = %kind, bytes = rendered.prompt.len(), "built prompt");

    if !cli.json {
        return Ok(rendered.prompt);
    }
    let url = target_config(cli).target_url()?;
    let rendered = rendered.with_target_url(url);
    Ok(serde_json::to_string(&rendered)?)
}

fn questions(cli: &Cli, target_file: Option<&str>, all: bool) -> Result<String, PromptError> {
    if all {
        let mut out = String::new();
        for file in SCOPE_FILES {
            let rendered = render(cli, PromptKind::Questions, (*file).to_string())?;
            if cli.json {
                let _ = writeln!(out, "{rendered}");
            } else {
                let _ = writeln!(out, "==> {file} <==\n{rendered}");
            }
        }
        info!(count = SCOPE_FILES.len(), "built question prompts for every scope file");
        return Ok(out);
    }

    let Some(target) = target_file.map(str::trim).filter(|t| !t.is_empty()) else {
        return Err(PromptError::InvalidInput(
            "provide a target file or --all".to_string(),
        ));
    };
    if !scope::is_in_scope(target) {
        warn!("{target} is not in the audit scope list");
    }
    render(cli, PromptKind::Questions, target.to_string())
}

fn run(cli: &Cli) -> Result<String, PromptError> {
    match &cli.command {
        Command::Questions { target_file, all } => questions(cli, target_file.as_deref(), *all),
        Command::Validate(args) => render(cli, PromptKind::Validation, args.read()?),
        Command::Audit(args) => render(cli, PromptKind::Audit, args.read()?),
        Command::Scan(args) => render(cli, PromptKind::Scan, args.read()?),
        Command::TargetUrl => {
            let url = target_config(cli).target_url()?;
            if cli.json {
                Ok(serde_json::json!({ "target_url": url }).to_string())
            } else {
                Ok(url)
            }
        }
        Command::Scope { modules } => {
            let lines = if *modules {
                scope::modules()
            } else {
                SCOPE_FILES.to_vec()
            };
            if cli.json {
                Ok(serde_json::json!(lines).to_string())
            } else {
                Ok(lines.join("\n"))
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{output}");
            } else {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("aelf-prompts").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn audit_inline_text() {
        let cli = parse(&["audit", "Can anyone mint?"]);
        let out = run(&cli).unwrap();
        assert!(out.contains("Begin investigation of: Can anyone mint?"));
    }

    #[test]
    fn json_output_carries_target_url() {
        let cli = parse(&["--json", "--run-number", "31", "scan", "oracle lag"]);
        let out = run(&cli).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["kind"], "scan");
        assert_eq!(value["input"], "oracle lag");
        assert_eq!(
            value["target_url"],
            "https://deepwiki.com/grass-dev-pa/aelf-001"
        );
    }

    #[test]
    fn negative_run_number_is_accepted() {
        let cli = parse(&["--run-number", "-1", "target-url"]);
        assert_eq!(
            run(&cli).unwrap(),
            "https://deepwiki.com/grass-dev-pa/aelf-029"
        );
    }

    #[test]
    fn bad_run_number_fails_target_url_only() {
        let cli = parse(&["--run-number", "abc", "target-url"]);
        assert!(matches!(run(&cli), Err(PromptError::InvalidInput(_))));

        // Plain prompt output does not need the URL.
        let cli = parse(&["--run-number", "abc", "audit", "q"]);
        assert!(run(&cli).is_ok());

        let cli = parse(&["--run-number", "abc", "--json", "audit", "q"]);
        assert!(matches!(run(&cli), Err(PromptError::InvalidInput(_))));
    }

    #[test]
    fn zero_max_repo_is_configuration_error() {
        let cli = parse(&["--max-repo", "0", "--run-number", "5", "target-url"]);
        assert!(matches!(run(&cli), Err(PromptError::Configuration(_))));
    }

    #[test]
    fn questions_requires_target_or_all() {
        let cli = parse(&["questions"]);
        assert!(matches!(run(&cli), Err(PromptError::InvalidInput(_))));
        assert!(
            Cli::try_parse_from(["aelf-prompts", "questions", "a.cs", "--all"]).is_err()
        );
    }

    #[test]
    fn questions_all_as_json_lines() {
        let cli = parse(&["--json", "--run-number", "0", "questions", "--all"]);
        let out = run(&cli).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), SCOPE_FILES.len());
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["input"], SCOPE_FILES[0]);
        assert_eq!(first["kind"], "questions");
    }

    #[test]
    fn scope_listing() {
        let out = run(&parse(&["scope"])).unwrap();
        assert_eq!(out.lines().count(), SCOPE_FILES.len());
        let out = run(&parse(&["scope", "--modules"])).unwrap();
        assert!(out.lines().all(|l| l.starts_with("contract/AElf.Contracts.")));
    }
}

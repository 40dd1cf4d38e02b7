//! # logiccraft-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and configuration file structures.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * `logiccraft.toml` struct definitions (Serde)
//! * Default values and enums
//!
//! ## What does NOT belong here
//! * Analysis logic
//! * I/O operations (except config file parsing)
//! * Higher-tier crate dependencies

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
pub use logiccraft_types::OutputFormat;

/// File name looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "logiccraft.toml";

/// Language used when neither a flag, a file extension nor the config
/// file names one.
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Heuristic Big-O estimates for JavaScript, TypeScript and
/// Python snippets.
#[derive(Parser, Debug)]
#[command(name = "logiccraft", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Verbose output (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a config file (defaults to ./logiccraft.toml when present).
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Estimate time/space complexity of a source file or stdin.
    Analyze(CliAnalyzeArgs),

    /// Run the built-in DSA fixture corpus and report accuracy.
    Accuracy(CliAccuracyArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CliAnalyzeArgs {
    /// Source file to analyze. Omit or pass `-` to read stdin.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Language tag (python, javascript, typescript, ...).
    ///
    /// Overrides the file extension and the config file.
    #[arg(long = "lang", visible_alias = "language", value_name = "TAG")]
    pub lang: Option<String>,

    /// Output format [default: text].
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include the rule that fired and the detector signals.
    #[arg(long)]
    pub explain: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CliAccuracyArgs {
    /// Output format [default: text].
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Exit with an error if fewer than N cases pass.
    #[arg(long, value_name = "N")]
    pub fail_under: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
}

// ============================================================
// logiccraft.toml
// ============================================================

/// Root of `logiccraft.toml`.
///
/// ```toml
/// [analyze]
/// language = "python"
/// format = "json"
/// explain = true
///
/// [accuracy]
/// format = "md"
/// fail_under = 8
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    /// Analyze command settings.
    pub analyze: AnalyzeConfig,

    /// Accuracy command settings.
    pub accuracy: AccuracyConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzeConfig {
    /// Language used when no `--lang` is given and the extension is unknown.
    pub language: Option<String>,

    pub format: Option<OutputFormat>,

    pub explain: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccuracyConfig {
    pub format: Option<OutputFormat>,

    pub fail_under: Option<usize>,
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> TomlResult<Self> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

/// Result type alias for TOML parsing errors.
pub type TomlResult<T> = Result<T, toml::de::Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn analyze_defaults() {
        let cli = Cli::parse_from(["logiccraft", "analyze"]);
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert!(args.path.is_none());
        assert!(args.lang.is_none());
        assert!(args.format.is_none());
        assert!(!args.explain);
        assert_eq!(cli.global.verbose, 0);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["logiccraft", "analyze", "a.py", "-vv", "--config", "x.toml"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(TomlConfig::parse("").unwrap(), TomlConfig::default());
    }
}

//! Config loading and flag/file/default resolution.
//!
//! Precedence for every setting: CLI flag, then `logiccraft.toml`, then
//! the built-in default. The analyze language additionally consults the
//! file extension between the flag and the config file.

use std::path::Path;

use anyhow::{Context, Result};
use logiccraft_config::{
    CONFIG_FILE_NAME, CliAccuracyArgs, CliAnalyzeArgs, DEFAULT_LANGUAGE, GlobalArgs,
    OutputFormat, TomlConfig,
};
use logiccraft_types::Language;

/// Load `--config`, or `./logiccraft.toml` when it exists.
///
/// An explicit `--config` that cannot be read is an error; a missing
/// implicit file is not.
pub fn load_toml_config(global: &GlobalArgs) -> Result<Option<TomlConfig>> {
    match &global.config {
        Some(path) => load_from(path).map(Some),
        None => {
            let implicit = Path::new(CONFIG_FILE_NAME);
            if implicit.is_file() {
                load_from(implicit).map(Some)
            } else {
                Ok(None)
            }
        }
    }
}

fn load_from(path: &Path) -> Result<TomlConfig> {
    tracing::debug!(path = %path.display(), "loading config");
    TomlConfig::from_file(path)
        .with_context(|| format!("Failed to load config {}", path.display()))
}

/// Effective settings for `logiccraft analyze`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAnalyze {
    pub language: String,
    pub format: OutputFormat,
    pub explain: bool,
}

pub fn resolve_analyze(args: &CliAnalyzeArgs, toml: Option<&TomlConfig>) -> ResolvedAnalyze {
    let section = toml.map(|t| &t.analyze);
    ResolvedAnalyze {
        language: args
            .lang
            .clone()
            .or_else(|| args.path.as_deref().and_then(language_from_path))
            .or_else(|| section.and_then(|s| s.language.clone()))
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        format: args
            .format
            .or_else(|| section.and_then(|s| s.format))
            .unwrap_or_default(),
        explain: args.explain || section.and_then(|s| s.explain).unwrap_or(false),
    }
}

/// Effective settings for `logiccraft accuracy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAccuracy {
    pub format: OutputFormat,
    pub fail_under: Option<usize>,
}

pub fn resolve_accuracy(args: &CliAccuracyArgs, toml: Option<&TomlConfig>) -> ResolvedAccuracy {
    let section = toml.map(|t| &t.accuracy);
    ResolvedAccuracy {
        format: args
            .format
            .or_else(|| section.and_then(|s| s.format))
            .unwrap_or_default(),
        fail_under: args.fail_under.or_else(|| section.and_then(|s| s.fail_under)),
    }
}

fn language_from_path(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    Language::from_extension(ext).map(|lang| lang.as_tag().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn analyze_args(path: Option<&str>, lang: Option<&str>) -> CliAnalyzeArgs {
        CliAnalyzeArgs {
            path: path.map(PathBuf::from),
            lang: lang.map(str::to_string),
            ..CliAnalyzeArgs::default()
        }
    }

    fn toml(s: &str) -> TomlConfig {
        TomlConfig::parse(s).unwrap()
    }

    #[test]
    fn defaults_without_anything() {
        let r = resolve_analyze(&analyze_args(None, None), None);
        assert_eq!(r.language, "javascript");
        assert_eq!(r.format, OutputFormat::Text);
        assert!(!r.explain);
    }

    #[test]
    fn flag_beats_extension_and_config() {
        let cfg = toml("[analyze]\nlanguage = \"typescript\"");
        let r = resolve_analyze(&analyze_args(Some("a.py"), Some("javascript")), Some(&cfg));
        assert_eq!(r.language, "javascript");
    }

    #[test]
    fn extension_beats_config() {
        let cfg = toml("[analyze]\nlanguage = \"typescript\"");
        let r = resolve_analyze(&analyze_args(Some("a.py"), None), Some(&cfg));
        assert_eq!(r.language, "python");
    }

    #[test]
    fn config_used_for_unknown_extension_and_stdin() {
        let cfg = toml("[analyze]\nlanguage = \"python\"");
        for path in [Some("notes.txt"), Some("-"), None] {
            let r = resolve_analyze(&analyze_args(path, None), Some(&cfg));
            assert_eq!(r.language, "python", "{path:?}");
        }
    }

    #[test]
    fn non_js_extensions_map_to_their_tags() {
        let r = resolve_analyze(&analyze_args(Some("Main.java"), None), None);
        assert_eq!(r.language, "java");
    }

    #[test]
    fn explain_from_config_or_flag() {
        let cfg = toml("[analyze]\nexplain = true\nformat = \"md\"");
        let r = resolve_analyze(&analyze_args(None, None), Some(&cfg));
        assert!(r.explain);
        assert_eq!(r.format, OutputFormat::Md);

        let args = CliAnalyzeArgs {
            explain: true,
            format: Some(OutputFormat::Json),
            ..CliAnalyzeArgs::default()
        };
        let r = resolve_analyze(&args, Some(&cfg));
        assert!(r.explain);
        assert_eq!(r.format, OutputFormat::Json);
    }

    #[test]
    fn accuracy_resolution() {
        let cfg = toml("[accuracy]\nfail_under = 8\nformat = \"json\"");
        let r = resolve_accuracy(&CliAccuracyArgs::default(), Some(&cfg));
        assert_eq!(r.fail_under, Some(8));
        assert_eq!(r.format, OutputFormat::Json);

        let args = CliAccuracyArgs {
            fail_under: Some(3),
            format: None,
        };
        assert_eq!(resolve_accuracy(&args, Some(&cfg)).fail_under, Some(3));
        assert_eq!(resolve_accuracy(&args, None).format, OutputFormat::Text);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let global = GlobalArgs {
            verbose: 0,
            config: Some(PathBuf::from("/definitely/not/here/logiccraft.toml")),
        };
        let err = load_toml_config(&global).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load config"));
    }
}

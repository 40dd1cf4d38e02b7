use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use logiccraft_config as cli;
use logiccraft_content::{decode_lossy, read_source_capped};
use logiccraft_core::explain_complexity;

use crate::config::resolve_analyze;
use crate::render::{render_explanation, render_result};

/// Inputs past this size are truncated before analysis.
const MAX_SOURCE_BYTES: usize = 1024 * 1024;

const STDIN_ORIGIN: &str = "<stdin>";

pub(crate) fn handle(args: cli::CliAnalyzeArgs, toml: Option<&cli::TomlConfig>) -> Result<()> {
    let resolved = resolve_analyze(&args, toml);
    let (source, origin) = read_input(args.path.as_deref())?;
    tracing::info!(
        origin = %origin,
        language = %resolved.language,
        bytes = source.len(),
        "analyzing"
    );

    let explanation = explain_complexity(&source, &resolved.language);
    let out = if resolved.explain {
        render_explanation(&explanation, resolved.format, &origin)?
    } else {
        render_result(&explanation.result, resolved.format, &origin)?
    };
    print!("{out}");
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<(String, String)> {
    match path {
        Some(p) if p != Path::new("-") => {
            let source = read_source_capped(p, MAX_SOURCE_BYTES)?;
            warn_if_truncated(source.len(), &p.display().to_string());
            Ok((source, p.display().to_string()))
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .take(MAX_SOURCE_BYTES as u64)
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            warn_if_truncated(buf.len(), STDIN_ORIGIN);
            Ok((decode_lossy(&buf), STDIN_ORIGIN.to_string()))
        }
    }
}

fn warn_if_truncated(len: usize, origin: &str) {
    if len >= MAX_SOURCE_BYTES {
        tracing::warn!(origin, limit = MAX_SOURCE_BYTES, "input truncated");
    }
}

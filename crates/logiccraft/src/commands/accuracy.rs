use anyhow::{Result, bail};
use logiccraft_config as cli;
use logiccraft_core::accuracy::run_builtin_accuracy;

use crate::config::resolve_accuracy;
use crate::render::render_accuracy;

pub(crate) fn handle(args: cli::CliAccuracyArgs, toml: Option<&cli::TomlConfig>) -> Result<()> {
    let resolved = resolve_accuracy(&args, toml);
    let report = run_builtin_accuracy();
    print!("{}", render_accuracy(&report, resolved.format)?);

    if let Some(min) = resolved.fail_under
        && report.passed < min
    {
        bail!(
            "Accuracy below threshold: {}/{} cases passed, --fail-under requires {}",
            report.passed,
            report.total,
            min
        );
    }
    Ok(())
}

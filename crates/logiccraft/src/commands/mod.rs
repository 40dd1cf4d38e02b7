pub(crate) mod accuracy;
pub(crate) mod analyze;
pub(crate) mod completions;

use anyhow::Result;
use logiccraft_config as cli;

pub(crate) fn dispatch(cli: cli::Cli, toml: Option<&cli::TomlConfig>) -> Result<()> {
    match cli.command {
        cli::Commands::Analyze(args) => analyze::handle(args, toml),
        cli::Commands::Accuracy(args) => accuracy::handle(args, toml),
        cli::Commands::Completions(args) => completions::handle(args),
    }
}

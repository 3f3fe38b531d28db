use std::path::PathBuf;

use clap::Parser;

use cadenza_core::{
    config::Settings,
    logger::{init_logger, init_tracing},
};

mod handlers;

use handlers::{CommandHandler, utils::WriteAdapter};

/// Options configurable via the CLI.
#[derive(Debug, Parser)]
#[command(name = "cadenza-cli", version = env!("CARGO_PKG_VERSION"), about)]
struct Flags {
    /// config file path, defaults to `Cadenza.toml` in the platform config directory
    #[clap(long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,
    /// log level, overrides the one in the config file
    #[clap(long)]
    log_level: Option<log::LevelFilter>,
    /// subcommand to run
    #[clap(subcommand)]
    subcommand: Option<handlers::Command>,
}

#[test]
fn verify_cli() {
    use clap::CommandFactory as _;

    Flags::command().debug_assert();
}

#[cfg(not(tarpaulin_include))]
fn main() -> anyhow::Result<()> {
    let flags = Flags::parse();

    let config_file = match flags.config {
        Some(config_file) => config_file,
        None => Settings::get_config_path()?,
    };
    let settings = Settings::init(config_file, flags.log_level)?;

    init_logger(settings.log.level);
    if settings.log.tracing {
        tracing::subscriber::set_global_default(init_tracing())?;
    }

    let mut stdout_adapter = WriteAdapter(std::io::stdout());
    let mut stderr_adapter = WriteAdapter(std::io::stderr());

    if let Some(command) = flags.subcommand {
        command.handle(&settings, &mut stdout_adapter, &mut stderr_adapter)?;
    } else {
        eprintln!("No subcommand provided");
    }

    Ok(())
}

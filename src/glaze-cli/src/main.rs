//! Glaze - main entry point.

use anyhow::{Context, Result};
use clap::Parser;

use glaze_cli::{Cli, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dirs = cli.app_dirs()?;
    dirs.ensure_dirs()
        .with_context(|| format!("cannot create {}", dirs.config_dir.display()))?;
    let _log_guard = logging::init(&dirs, cli.log_level)?;

    glaze_cli::run(cli, dirs)
}

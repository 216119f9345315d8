//! The `glaze` binary: argument parsing, logging and the terminal UI.
//!
//! - `args` - clap definitions
//! - `logging` - file logging through `tracing-appender`
//! - `app`, `ui`, `overlay`, `keymap`, `terminal` - the interactive renderer
//! - `headless` - `glaze -c <line>`
//! - `window` - opening another window for `new` / Ctrl+N

pub mod app;
pub mod args;
pub mod headless;
pub mod keymap;
pub mod logging;
pub mod overlay;
pub mod terminal;
pub mod ui;
pub mod window;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use glaze_common::{AppDirs, expand_home_path};
use glaze_config::SettingsStore;
use glaze_core::{Session, executor_for};
use tracing::info;

pub use args::{Cli, LogLevel};

/// Starting directory: `--cwd` if given, else the process directory.
///
/// The process directory follows so commands and new windows agree with
/// the prompt.
fn starting_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.cwd {
        Some(dir) => {
            let dir = expand_home_path(dir)?;
            std::env::set_current_dir(&dir)
                .with_context(|| format!("cannot change to {}", dir.display()))?;
            Ok(std::env::current_dir()?)
        }
        None => Ok(std::env::current_dir()?),
    }
}

/// Builds the session described by `cli`.
pub fn build_session(cli: &Cli, dirs: &AppDirs) -> Result<Session> {
    let store = SettingsStore::load_or_default(dirs);
    let overridden = cli
        .overrides_executor()
        .then(|| executor_for(&cli.apply_overrides(&store.snapshot())));

    let mut session = Session::new(store, starting_dir(cli)?);
    if let Some(executor) = overridden {
        session = session.with_executor(executor);
    }
    Ok(session)
}

pub fn run(cli: Cli, dirs: AppDirs) -> Result<()> {
    let session = build_session(&cli, &dirs)?;
    info!(cwd = %session.cwd().display(), "session ready");

    match &cli.command {
        Some(line) => headless::run(session, line, &mut io::stdout().lock()),
        None => app::run(session, cli.inherited_args()),
    }
}

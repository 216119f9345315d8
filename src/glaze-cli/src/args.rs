//! Command-line arguments.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glaze_common::AppDirs;
use glaze_config::Settings;

/// Glaze - a lightweight terminal with autocomplete and built-in commands.
#[derive(Debug, Parser)]
#[command(name = "glaze", version, about)]
pub struct Cli {
    /// Directory holding settings and logs (defaults to the user config dir,
    /// or GLAZE_HOME when set).
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Log level written to the log file when GLAZE_LOG is unset.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Stream command output line by line for this run.
    #[arg(long)]
    pub streaming: bool,

    /// Program used to run external commands for this run (e.g. `bash`, `pwsh`).
    #[arg(long, value_name = "PROGRAM")]
    pub interpreter: Option<String>,

    /// Run one command line, print its output and exit.
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub command: Option<String>,

    /// Starting working directory.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

impl Cli {
    pub fn app_dirs(&self) -> Result<AppDirs> {
        match &self.config_dir {
            Some(dir) => Ok(AppDirs::rooted_at(dir)),
            None => AppDirs::new().context("could not determine a config directory"),
        }
    }

    /// True when a flag overrides how external commands run.
    pub fn overrides_executor(&self) -> bool {
        self.streaming || self.interpreter.is_some()
    }

    /// `settings` with the per-run executor flags applied.
    pub fn apply_overrides(&self, settings: &Settings) -> Settings {
        let mut settings = settings.clone();
        if self.streaming {
            settings.streaming = true;
        }
        if let Some(program) = &self.interpreter {
            settings.interpreter = Some(program.clone());
        }
        settings
    }

    /// Flags a new window should inherit.
    pub fn inherited_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(dir) = &self.config_dir {
            args.push("--config-dir".to_string());
            args.push(dir.display().to_string());
        }
        if self.streaming {
            args.push("--streaming".to_string());
        }
        if let Some(program) = &self.interpreter {
            args.push("--interpreter".to_string());
            args.push(program.clone());
        }
        args
    }
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["glaze"]);
        assert_eq!(cli.log_level, LogLevel::Info);
        assert!(!cli.overrides_executor());
        assert!(cli.command.is_none());
        assert!(cli.inherited_args().is_empty());
    }

    #[test]
    fn test_headless_command() {
        let cli = Cli::parse_from(["glaze", "-c", "echo hi", "--log-level", "debug"]);
        assert_eq!(cli.command.as_deref(), Some("echo hi"));
        assert_eq!(cli.log_level.as_filter_str(), "debug");
    }

    #[test]
    fn test_overrides_apply_to_settings() {
        let cli = Cli::parse_from(["glaze", "--streaming", "--interpreter", "bash"]);
        assert!(cli.overrides_executor());
        let settings = cli.apply_overrides(&Settings::default());
        assert!(settings.streaming);
        assert_eq!(settings.interpreter.as_deref(), Some("bash"));
    }

    #[test]
    fn test_inherited_args() {
        let cli = Cli::parse_from([
            "glaze",
            "--config-dir",
            "/tmp/g",
            "--interpreter",
            "zsh",
            "--cwd",
            "/srv",
        ]);
        assert_eq!(
            cli.inherited_args(),
            vec!["--config-dir", "/tmp/g", "--interpreter", "zsh"]
        );
    }

    #[test]
    fn test_config_dir_roots_app_dirs() {
        let cli = Cli::parse_from(["glaze", "--config-dir", "/tmp/glaze-test"]);
        let dirs = cli.app_dirs().unwrap();
        assert_eq!(dirs.config_dir, PathBuf::from("/tmp/glaze-test"));
    }
}

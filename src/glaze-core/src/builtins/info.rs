//! Informational commands: `version`, `system`, `time`.

use chrono::{DateTime, Local, TimeZone};
use sysinfo::System;

use crate::VERSION;
use crate::context::CommandContext;
use crate::registry::{Builtin, Control};

const BYTES_PER_MB: u64 = 1024 * 1024;

const OWL: &[&str] = &[
    "    ___    ",
    "   (o o)   Fetching system information...",
    "  (  >  )  ",
    "   -----   ",
];

pub struct VersionCommand;

impl Builtin for VersionCommand {
    fn name(&self) -> &'static str {
        "version"
    }

    fn description(&self) -> &'static str {
        "Show terminal version info"
    }

    fn run(&self, _args: &str, ctx: &mut CommandContext<'_>) -> Control {
        ctx.print(format!("Glaze v{VERSION}"));
        ctx.print("Built with Rust + ratatui");
        ctx.print(format!("Author: {}", env!("CARGO_PKG_AUTHORS")));
        Control::Continue
    }
}

/// Host facts shown by `system`, read at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    pub os: Option<String>,
    pub cores: usize,
    pub arch: &'static str,
    pub used_memory: u64,
    pub total_memory: u64,
    pub uptime_secs: u64,
}

impl SystemInfo {
    pub fn collect() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        Self {
            os: System::long_os_version(),
            cores: num_cpus::get(),
            arch: std::env::consts::ARCH,
            used_memory: sys.used_memory(),
            total_memory: sys.total_memory(),
            uptime_secs: System::uptime(),
        }
    }

    pub fn memory_percent(&self) -> u64 {
        if self.total_memory == 0 {
            return 0;
        }
        self.used_memory * 100 / self.total_memory
    }

    pub fn lines(&self) -> Vec<String> {
        let os = match &self.os {
            Some(os) => format!("OS: {os}"),
            None => "OS: (Version info unavailable)".to_string(),
        };
        vec![
            os,
            format!("CPU: {} cores, Architecture: {}", self.cores, self.arch),
            format!(
                "RAM: {} MB / {} MB ({}% used)",
                self.used_memory / BYTES_PER_MB,
                self.total_memory / BYTES_PER_MB,
                self.memory_percent()
            ),
            format!(
                "Uptime: {}h {}m",
                self.uptime_secs / 3600,
                (self.uptime_secs % 3600) / 60
            ),
        ]
    }
}

pub struct SystemCommand;

impl Builtin for SystemCommand {
    fn name(&self) -> &'static str {
        "system"
    }

    fn description(&self) -> &'static str {
        "Display system information"
    }

    fn run(&self, _args: &str, ctx: &mut CommandContext<'_>) -> Control {
        for line in OWL {
            ctx.print(*line);
        }
        ctx.print("");
        for line in SystemInfo::collect().lines() {
            ctx.print(line);
        }
        Control::Continue
    }
}

/// `Date: DD/MM/YYYY` and `Time: HH:MM:SS` for `at`.
pub fn format_date_time<Tz: TimeZone>(at: &DateTime<Tz>) -> [String; 2]
where
    Tz::Offset: std::fmt::Display,
{
    [
        format!("Date: {}", at.format("%d/%m/%Y")),
        format!("Time: {}", at.format("%H:%M:%S")),
    ]
}

pub struct TimeCommand;

impl Builtin for TimeCommand {
    fn name(&self) -> &'static str {
        "time"
    }

    fn description(&self) -> &'static str {
        "Show current date and time"
    }

    fn run(&self, _args: &str, ctx: &mut CommandContext<'_>) -> Control {
        for line in format_date_time(&Local::now()) {
            ctx.print(line);
        }
        Control::Continue
    }
}

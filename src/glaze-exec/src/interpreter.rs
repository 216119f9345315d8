//! Host command interpreter selection.

use std::path::Path;
use std::process::{Command, Stdio};

/// Command-line conventions an interpreter follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellFamily {
    /// `cmd.exe /C`.
    Cmd,
    /// `sh -c` and compatible shells.
    Posix,
    /// `pwsh -Command`.
    PowerShell,
}

impl ShellFamily {
    /// Parse the family from a program name or path.
    pub fn from_program(program: &str) -> Option<Self> {
        let name = Path::new(program).file_stem()?.to_str()?;
        match name.to_lowercase().as_str() {
            "cmd" => Some(Self::Cmd),
            "sh" | "bash" | "zsh" | "dash" | "ash" | "ksh" | "fish" => Some(Self::Posix),
            "pwsh" | "powershell" => Some(Self::PowerShell),
            _ => None,
        }
    }

    /// Flag that makes the interpreter run one command line and exit.
    pub fn command_flag(&self) -> &'static str {
        match self {
            Self::Cmd => "/C",
            Self::Posix => "-c",
            Self::PowerShell => "-Command",
        }
    }
}

/// The program that runs external command lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    program: String,
    family: ShellFamily,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::host_default()
    }
}

impl Interpreter {
    /// `cmd.exe` on Windows, `sh` everywhere else.
    pub fn host_default() -> Self {
        if cfg!(windows) {
            Self::new("cmd.exe", ShellFamily::Cmd)
        } else {
            Self::new("sh", ShellFamily::Posix)
        }
    }

    pub fn new(program: impl Into<String>, family: ShellFamily) -> Self {
        Self {
            program: program.into(),
            family,
        }
    }

    /// Builds an interpreter from a user-supplied program name or path.
    ///
    /// Unknown programs are assumed to follow the host's conventions.
    pub fn from_program(program: &str) -> Self {
        let family = ShellFamily::from_program(program)
            .unwrap_or_else(|| Self::host_default().family);
        Self::new(program, family)
    }

    #[inline]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[inline]
    pub fn family(&self) -> ShellFamily {
        self.family
    }

    /// Builds the child process for `command_line` with stdout and stderr
    /// piped and stdin closed.
    pub fn command(&self, command_line: &str, cwd: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        self.push_command_line(&mut cmd, command_line);
        cmd.current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    #[cfg(windows)]
    fn push_command_line(&self, cmd: &mut Command, command_line: &str) {
        use std::os::windows::process::CommandExt;

        cmd.arg(self.family.command_flag());
        // cmd.exe does its own quote parsing; escaping would mangle it
        if self.family == ShellFamily::Cmd {
            cmd.raw_arg(command_line);
        } else {
            cmd.arg(command_line);
        }
    }

    #[cfg(not(windows))]
    fn push_command_line(&self, cmd: &mut Command, command_line: &str) {
        cmd.arg(self.family.command_flag()).arg(command_line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_from_program() {
        assert_eq!(ShellFamily::from_program("bash"), Some(ShellFamily::Posix));
        assert_eq!(
            ShellFamily::from_program("/usr/bin/zsh"),
            Some(ShellFamily::Posix)
        );
        assert_eq!(
            ShellFamily::from_program("C:\\Windows\\System32\\cmd.exe"),
            if cfg!(windows) {
                Some(ShellFamily::Cmd)
            } else {
                None
            }
        );
        assert_eq!(ShellFamily::from_program("cmd.exe"), Some(ShellFamily::Cmd));
        assert_eq!(
            ShellFamily::from_program("pwsh"),
            Some(ShellFamily::PowerShell)
        );
        assert_eq!(ShellFamily::from_program("python"), None);
    }

    #[test]
    fn test_flags() {
        assert_eq!(ShellFamily::Cmd.command_flag(), "/C");
        assert_eq!(ShellFamily::Posix.command_flag(), "-c");
        assert_eq!(ShellFamily::PowerShell.command_flag(), "-Command");
    }

    #[test]
    fn test_host_default() {
        let interp = Interpreter::host_default();
        if cfg!(windows) {
            assert_eq!(interp.program(), "cmd.exe");
        } else {
            assert_eq!(interp.program(), "sh");
            assert_eq!(interp.family(), ShellFamily::Posix);
        }
    }

    #[test]
    fn test_unknown_program_uses_host_family() {
        let interp = Interpreter::from_program("myshell");
        assert_eq!(interp.family(), Interpreter::host_default().family());
        assert_eq!(interp.program(), "myshell");
    }
}

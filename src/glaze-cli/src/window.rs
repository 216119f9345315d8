//! Launching another Glaze window as an independent process.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

/// Terminal emulator used on non-Windows hosts when `TERMINAL` is unset.
const FALLBACK_TERMINAL: &str = "x-terminal-emulator";

/// Builds the command that opens a new console running `exe`.
///
/// Windows uses `start` so the child gets its own console; elsewhere the
/// emulator named by `terminal` (the `TERMINAL` variable) runs `exe` via `-e`.
pub fn launcher(exe: &Path, cwd: &Path, args: &[String], terminal: Option<&str>) -> Command {
    let mut glaze_args: Vec<String> = vec!["--cwd".to_string(), cwd.display().to_string()];
    glaze_args.extend(args.iter().cloned());

    let mut cmd = if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(exe);
        cmd
    } else {
        let terminal = terminal
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(FALLBACK_TERMINAL);
        let mut cmd = Command::new(terminal);
        cmd.arg("-e").arg(exe);
        cmd
    };
    cmd.args(glaze_args).current_dir(cwd);
    cmd
}

/// Opens a new window in `cwd` carrying `args`.
pub fn open_new_window(cwd: &Path, args: &[String]) -> io::Result<()> {
    let exe = std::env::current_exe()?;
    let terminal = std::env::var("TERMINAL").ok();
    let mut cmd = launcher(&exe, cwd, args, terminal.as_deref());
    debug!(program = ?cmd.get_program(), "opening new window");
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args_of(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_launcher_uses_terminal_env() {
        let cmd = launcher(
            Path::new("/usr/bin/glaze"),
            Path::new("/srv"),
            &["--streaming".to_string()],
            Some("alacritty"),
        );
        assert_eq!(cmd.get_program(), "alacritty");
        assert_eq!(
            args_of(&cmd),
            vec!["-e", "/usr/bin/glaze", "--cwd", "/srv", "--streaming"]
        );
        assert_eq!(cmd.get_current_dir(), Some(Path::new("/srv")));
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_launcher_fallback() {
        let cmd = launcher(Path::new("glaze"), Path::new("/"), &[], Some("  "));
        assert_eq!(cmd.get_program(), FALLBACK_TERMINAL);
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_launcher_uses_start() {
        let cmd = launcher(Path::new("C:\\glaze.exe"), Path::new("C:\\"), &[], None);
        assert_eq!(cmd.get_program(), "cmd");
        assert_eq!(&args_of(&cmd)[..4], &["/C", "start", "", "C:\\glaze.exe"]);
    }
}

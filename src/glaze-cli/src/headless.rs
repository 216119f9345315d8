//! `glaze -c <line>`: run one line without the terminal UI.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use glaze_core::Session;
use glaze_input::EditKey;

const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Runs `line` to completion and returns the lines it printed, without the
/// prompt echo and the trailing blank line.
pub fn run_line(session: &mut Session, line: &str) -> Vec<String> {
    session.handle_key(EditKey::ClearScreen);
    let echo = format!("{}{}", session.prompt(), line);
    session.submit(line);
    while session.is_busy() {
        thread::sleep(POLL_INTERVAL);
        session.poll();
    }

    let mut lines: Vec<String> = session
        .output()
        .texts()
        .into_iter()
        .map(String::from)
        .collect();
    if lines.first() == Some(&echo) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

pub fn run(mut session: Session, line: &str, out: &mut impl Write) -> Result<()> {
    for text in run_line(&mut session, line) {
        writeln!(out, "{text}")?;
    }
    out.flush()?;
    Ok(())
}

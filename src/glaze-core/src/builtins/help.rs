//! `$help` and `cmds`.

use crate::context::CommandContext;
use crate::registry::{Builtin, Control};

const SHORTCUTS: &[(&str, &str)] = &[
    ("Ctrl+Z", "Go back in command history"),
    ("Ctrl+X", "Go forward in command history"),
    ("Up/Down", "Navigate autocomplete suggestions"),
    ("Tab", "Accept autocomplete suggestion"),
    ("Ctrl+F", "Toggle search"),
    ("Ctrl+N", "Open a new terminal window"),
    ("Ctrl+L", "Clear terminal screen"),
];

/// Lists the built-in commands, optionally with keyboard shortcuts.
pub struct HelpCommand {
    full: bool,
}

impl HelpCommand {
    /// `$help`: every command plus keyboard shortcuts.
    pub fn full() -> Self {
        Self { full: true }
    }

    /// `cmds`: the command list only.
    pub fn short() -> Self {
        Self { full: false }
    }
}

fn entry(name: &str, description: &str) -> String {
    format!("  {name:<9} - {description}")
}

impl Builtin for HelpCommand {
    fn name(&self) -> &'static str {
        if self.full { "$help" } else { "cmds" }
    }

    fn description(&self) -> &'static str {
        if self.full {
            "Show this command list and keyboard shortcuts"
        } else {
            "Show this command list"
        }
    }

    fn hidden(&self) -> bool {
        self.full
    }

    fn run(&self, _args: &str, ctx: &mut CommandContext<'_>) -> Control {
        let listed: Vec<String> = ctx
            .registry
            .iter()
            .filter(|b| self.full || !b.hidden())
            .map(|b| entry(b.name(), b.description()))
            .collect();

        ctx.print("Glaze Commands:");
        for line in listed {
            ctx.print(line);
        }
        ctx.print(entry("<any cmd>", "Execute host commands"));

        if self.full {
            ctx.print("");
            ctx.print("Keyboard Shortcuts:");
            for (keys, what) in SHORTCUTS {
                ctx.print(entry(keys, what));
            }
        }
        Control::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Harness;
    use crate::registry::Control;

    #[test]
    fn test_full_help_lists_shortcuts() {
        let mut h = Harness::new();
        assert_eq!(h.run("$help"), Control::Continue);
        let lines = h.lines();
        assert_eq!(lines[0], "Glaze Commands:");
        assert!(lines.iter().any(|l| l.starts_with("  $help")));
        assert!(lines.contains(&"Keyboard Shortcuts:".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("  Ctrl+Z    - ")));
        assert!(lines.iter().any(|l| l.starts_with("  <any cmd> - ")));
    }

    #[test]
    fn test_short_list() {
        let mut h = Harness::new();
        h.run("cmds");
        let lines = h.lines();
        assert!(lines.iter().any(|l| l == "  cmds      - Show this command list"));
        assert!(lines.iter().any(|l| l.starts_with("  cls       - ")));
        assert!(!lines.iter().any(|l| l.starts_with("  $help")));
        assert!(!lines.iter().any(|l| l.contains("Ctrl+")));
    }
}

//! `settings` and `settings <name> <on|off>`.

use glaze_config::Toggle;
use tracing::warn;

use crate::context::CommandContext;
use crate::registry::{Builtin, Control};

fn on_off(enabled: bool) -> &'static str {
    if enabled { "ON" } else { "OFF" }
}

pub struct SettingsCommand;

impl SettingsCommand {
    fn show(ctx: &mut CommandContext<'_>) -> Control {
        let settings = ctx.settings.snapshot();
        ctx.print("Settings:");
        for toggle in Toggle::ALL {
            let note = if toggle.needs_restart() {
                "  (restart to apply)"
            } else {
                ""
            };
            ctx.print(format!(
                "  {:<13}{}{}",
                toggle.name(),
                on_off(settings.get(toggle)),
                note
            ));
        }
        ctx.print("You can also use: settings <option> <on/off>");
        Control::OpenSettings
    }

    fn set(args: &str, ctx: &mut CommandContext<'_>) {
        let Some((name, value)) = args.split_once(char::is_whitespace) else {
            ctx.print("Usage: settings <option> <on/off>");
            ctx.print("Type 'settings' to see available options.");
            return;
        };

        let Some(toggle) = Toggle::from_name(name) else {
            ctx.print(format!("Unknown setting: {name}"));
            ctx.print("Type 'settings' for available options.");
            return;
        };

        let enabled = Toggle::parse_value(value.trim());
        match ctx.settings.set_toggle(toggle, enabled) {
            Ok(_) => {
                ctx.print(format!("{} set to: {}", toggle.label(), on_off(enabled)));
                if toggle.needs_restart() {
                    ctx.print("Restart terminal to apply changes.");
                }
            }
            Err(e) => {
                warn!(setting = toggle.name(), error = %e, "settings save failed");
                ctx.print(format!("settings: failed to save: {e}"));
            }
        }
    }
}

impl Builtin for SettingsCommand {
    fn name(&self) -> &'static str {
        "settings"
    }

    fn description(&self) -> &'static str {
        "Configure terminal (blur, timestamps, etc)"
    }

    fn takes_args(&self) -> bool {
        true
    }

    fn run(&self, args: &str, ctx: &mut CommandContext<'_>) -> Control {
        if args.is_empty() {
            return Self::show(ctx);
        }
        Self::set(args, ctx);
        Control::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Harness;
    use crate::registry::Control;
    use glaze_common::AppDirs;
    use glaze_config::SettingsStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bare_settings_opens_surface() {
        let mut h = Harness::new();
        assert_eq!(h.run("settings"), Control::OpenSettings);
        let lines = h.lines();
        assert_eq!(lines[0], "Settings:");
        assert!(lines.iter().any(|l| l.starts_with("  timestamp    OFF")));
        assert_eq!(
            lines.last().unwrap(),
            "You can also use: settings <option> <on/off>"
        );
    }

    #[test]
    fn test_toggle_table() {
        let cases = [
            ("settings timestamp on", vec!["Timestamps set to: ON"]),
            ("settings timestamp 0", vec!["Timestamps set to: OFF"]),
            (
                "settings blur off",
                vec![
                    "Blur background set to: OFF",
                    "Restart terminal to apply changes.",
                ],
            ),
            (
                "settings wallpaper on",
                vec![
                    "Unknown setting: wallpaper",
                    "Type 'settings' for available options.",
                ],
            ),
            (
                "settings timestamp",
                vec![
                    "Usage: settings <option> <on/off>",
                    "Type 'settings' to see available options.",
                ],
            ),
        ];
        for (line, want) in cases {
            let mut h = Harness::new();
            assert_eq!(h.run(line), Control::Continue);
            assert_eq!(h.lines(), want, "{line}");
        }
    }

    #[test]
    fn test_toggle_updates_store() {
        let mut h = Harness::new();
        h.run("settings timestamp true");
        assert!(h.settings.snapshot().timestamp);
        h.run("settings timestamp nope");
        assert!(!h.settings.snapshot().timestamp);
    }

    #[test]
    fn test_toggle_persists_to_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = AppDirs::rooted_at(tmp.path());
        let mut h = Harness::with_store(SettingsStore::for_dirs(&dirs).unwrap());
        h.run("settings timestamp on");

        let text = std::fs::read_to_string(dirs.settings_file()).unwrap();
        assert!(text.contains("timestamp = true"));
    }

    #[test]
    fn test_save_failure_reports_and_keeps_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let blocked = tmp.path().join("settings.toml");
        std::fs::create_dir(&blocked).unwrap();
        std::fs::write(blocked.join("x"), "").unwrap();

        let dirs = AppDirs::rooted_at(tmp.path());
        let store = SettingsStore::load_or_default(&dirs);
        let mut h = Harness::with_store(store);
        h.run("settings timestamp on");

        let lines = h.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("settings: failed to save: "));
        assert!(!h.settings.snapshot().timestamp);
    }
}

//! `cd` and `cd <path>`.

use std::env;
use std::path::{Path, PathBuf};

use glaze_common::{expand_home_path, strip_matching_quotes};
use tracing::debug;

use crate::context::CommandContext;
use crate::registry::{Builtin, Control};

pub struct CdCommand;

/// Drops the `\\?\` prefix Windows adds to resolved paths.
fn display_form(path: PathBuf) -> PathBuf {
    #[cfg(windows)]
    {
        if let Some(rest) = path.to_str().and_then(|s| s.strip_prefix(r"\\?\"))
            && !rest.starts_with("UNC\\")
        {
            return PathBuf::from(rest);
        }
    }
    path
}

fn change_dir(cwd: &Path, typed: &str) -> Option<PathBuf> {
    let target = expand_home_path(Path::new(typed)).ok()?;
    let target = cwd.join(target);
    env::set_current_dir(&target).ok()?;
    let resolved = env::current_dir().unwrap_or(target);
    Some(display_form(resolved))
}

impl Builtin for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn description(&self) -> &'static str {
        "Change or show the working directory"
    }

    fn takes_args(&self) -> bool {
        true
    }

    fn run(&self, args: &str, ctx: &mut CommandContext<'_>) -> Control {
        if args.is_empty() {
            let shown = ctx.cwd.display().to_string();
            ctx.print(shown);
            return Control::Continue;
        }

        let typed = strip_matching_quotes(args);
        match change_dir(ctx.cwd, typed) {
            Some(dir) => {
                debug!(dir = %dir.display(), "changed directory");
                *ctx.cwd = dir;
            }
            None => ctx.print(format!("cd: {typed}: No such file or directory")),
        }
        Control::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Harness;
    use glaze_common::CwdGuard;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    fn canonical(p: &std::path::Path) -> std::path::PathBuf {
        p.canonicalize().unwrap()
    }

    #[test]
    #[serial]
    fn test_cd_prints_current() {
        let mut h = Harness::new();
        h.run("cd");
        assert_eq!(h.lines(), vec![h.cwd.display().to_string()]);
    }

    #[test]
    #[serial]
    fn test_cd_absolute_and_relative() {
        let _guard = CwdGuard::save_current().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("child dir")).unwrap();

        let mut h = Harness::new();
        h.run(&format!("cd {}", tmp.path().display()));
        assert_eq!(canonical(&h.cwd), canonical(tmp.path()));

        h.run("cd \"child dir\"");
        assert_eq!(canonical(&h.cwd), canonical(&tmp.path().join("child dir")));
        assert_eq!(
            canonical(&std::env::current_dir().unwrap()),
            canonical(&h.cwd)
        );

        h.run("cd ..");
        assert_eq!(canonical(&h.cwd), canonical(tmp.path()));
        assert!(h.lines().is_empty());
    }

    #[test]
    #[serial]
    fn test_cd_missing_leaves_state() {
        let _guard = CwdGuard::save_current().unwrap();
        let mut h = Harness::new();
        let before = h.cwd.clone();
        h.run("cd \"/no/such/glaze/dir\"");
        assert_eq!(
            h.lines(),
            vec!["cd: /no/such/glaze/dir: No such file or directory"]
        );
        assert_eq!(h.cwd, before);
    }
}

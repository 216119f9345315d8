//! Built-in command registry.
//!
//! Built-ins are looked up by the first whitespace-delimited token of the
//! submitted line, case-sensitively. Commands that take no arguments only
//! match when the whole line is their name, so `cls foo` still goes to the
//! host interpreter.

use std::collections::HashMap;

use crate::context::CommandContext;

// ============================================================
// CONTROL
// ============================================================

/// What the session or renderer should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    Continue,
    /// End the session.
    Quit,
    /// Show the settings surface.
    OpenSettings,
    /// Launch another independent terminal window.
    NewWindow,
}

// ============================================================
// BUILTIN
// ============================================================

/// A command handled inside the session.
pub trait Builtin: Send + Sync {
    /// Primary name, as typed.
    fn name(&self) -> &'static str;

    /// Other names that run the same command.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// One-line description for help listings.
    fn description(&self) -> &'static str;

    /// Whether text after the name is passed as arguments.
    fn takes_args(&self) -> bool {
        false
    }

    /// Hidden commands are left out of `cmds`.
    fn hidden(&self) -> bool {
        false
    }

    /// Runs the command. `args` is the trimmed text after the name.
    fn run(&self, args: &str, ctx: &mut CommandContext<'_>) -> Control;
}

// ============================================================
// REGISTRY
// ============================================================

/// Registry storing the built-in commands in registration order.
#[derive(Default)]
pub struct BuiltinRegistry {
    builtins: Vec<Box<dyn Builtin>>,
    /// Name or alias to index in `builtins`.
    index: HashMap<&'static str, usize>,
}

impl std::fmt::Debug for BuiltinRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinRegistry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl BuiltinRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every Glaze built-in.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        crate::builtins::register_all(&mut registry);
        registry
    }

    /// Registers a command. A later registration of the same name wins.
    pub fn register(&mut self, builtin: impl Builtin + 'static) {
        let idx = self.builtins.len();
        self.index.insert(builtin.name(), idx);
        for alias in builtin.aliases() {
            self.index.insert(*alias, idx);
        }
        self.builtins.push(Box::new(builtin));
    }

    /// Gets a command by exact name or alias.
    pub fn get(&self, name: &str) -> Option<&dyn Builtin> {
        self.index.get(name).map(|&i| self.builtins[i].as_ref())
    }

    /// Finds the built-in for a submitted line, with its arguments.
    pub fn lookup<'l>(&self, line: &'l str) -> Option<(&dyn Builtin, &'l str)> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let builtin = self.get(name)?;
        if !rest.is_empty() && !builtin.takes_args() {
            return None;
        }
        Some((builtin, rest))
    }

    /// Iterates commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Builtin> {
        self.builtins.iter().map(|b| b.as_ref())
    }

    /// Primary names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.builtins.iter().map(|b| b.name())
    }

    pub fn len(&self) -> usize {
        self.builtins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builtins.is_empty()
    }
}

//! Commands that act on the window: `cls`, `quit`, `new`.

use crate::context::CommandContext;
use crate::registry::{Builtin, Control};

pub struct ClearCommand;

impl Builtin for ClearCommand {
    fn name(&self) -> &'static str {
        "cls"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["clear"]
    }

    fn description(&self) -> &'static str {
        "Clear terminal screen"
    }

    fn run(&self, _args: &str, ctx: &mut CommandContext<'_>) -> Control {
        ctx.output.clear();
        Control::Continue
    }
}

pub struct QuitCommand;

impl Builtin for QuitCommand {
    fn name(&self) -> &'static str {
        "quit"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["exit"]
    }

    fn description(&self) -> &'static str {
        "Close terminal"
    }

    fn run(&self, _args: &str, _ctx: &mut CommandContext<'_>) -> Control {
        Control::Quit
    }
}

pub struct NewWindowCommand;

impl Builtin for NewWindowCommand {
    fn name(&self) -> &'static str {
        "new"
    }

    fn description(&self) -> &'static str {
        "Open another terminal window"
    }

    fn run(&self, _args: &str, ctx: &mut CommandContext<'_>) -> Control {
        ctx.print("Opening a new terminal window...");
        Control::NewWindow
    }
}

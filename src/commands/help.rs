use crate::command::{Command, CommandResult};
use crate::context::SessionContext;
use std::io::Write;

/// help
/// List the available commands. `<command> --help` shows usage for one.
pub struct HelpCommand {
    names: Vec<String>,
}

impl HelpCommand {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl Command for HelpCommand {
    fn execute(&self, _args: &[String], _ctx: &mut SessionContext, _out: &mut dyn Write) -> CommandResult {
        let mut output = String::from("Available commands:\n");
        for name in &self.names {
            output.push_str("  ");
            output.push_str(name);
            output.push('\n');
        }
        output.push_str("\nType '<command> --help' for usage.");
        Ok(output)
    }
}

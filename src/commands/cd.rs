use crate::command::{operands, wants_usage, Command, CommandResult};
use crate::context::{normalize_path, SessionContext};
use std::io::Write;

pub struct CdCommand;

const CD_USAGE: &str = "Usage: cd <path>\nChange the current directory. Relative paths start from the current one.";

impl Command for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut SessionContext, _out: &mut dyn Write) -> CommandResult {
        if wants_usage(args) {
            return Ok(CD_USAGE.to_string());
        }
        let target = &operands(args, 1)?[0];

        // must exist and be a dir before we adopt it
        let path = ctx.require_dir(target)?;
        ctx.change_dir(normalize_path(&path));
        Ok(ctx.location_message())
    }
}

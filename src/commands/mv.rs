use crate::command::{operands, wants_usage, Command, CommandResult};
use crate::context::SessionContext;
use crate::error::FileManagerError;
use std::fs;
use std::io::Write;

/// mv SOURCE DEST
pub struct MvCommand;

/// rn OLD NEW - same rename as mv, different wording.
pub struct RnCommand;

const MV_USAGE: &str = "Usage: mv <src> <dst>\nMove a file to a new path.";
const RN_USAGE: &str = "Usage: rn <old> <new>\nRename a file.";

impl Command for MvCommand {
    fn execute(&self, args: &[String], ctx: &mut SessionContext, _out: &mut dyn Write) -> CommandResult {
        if wants_usage(args) {
            return Ok(MV_USAGE.to_string());
        }
        let ops = operands(args, 2)?;
        rename(ctx, &ops[0], &ops[1], FileManagerError::InvalidSource, "moving file")?;
        Ok(format!("File moved: {} -> {}", ops[0], ops[1]))
    }
}

impl Command for RnCommand {
    fn execute(&self, args: &[String], ctx: &mut SessionContext, _out: &mut dyn Write) -> CommandResult {
        if wants_usage(args) {
            return Ok(RN_USAGE.to_string());
        }
        let ops = operands(args, 2)?;
        rename(ctx, &ops[0], &ops[1], FileManagerError::InvalidFile, "renaming file")?;
        Ok(format!("File renamed: {} -> {}", ops[0], ops[1]))
    }
}

fn rename(
    ctx: &SessionContext,
    from: &str,
    to: &str,
    invalid: FileManagerError,
    action: &'static str,
) -> Result<(), FileManagerError> {
    let src = ctx.require_file(from, invalid)?;
    let dst = ctx.resolve(to);
    log::debug!("[mv] {} -> {}", src.display(), dst.display());
    fs::rename(&src, &dst).map_err(|e| {
        log::warn!("[mv] {} -> {}: {}", src.display(), dst.display(), e);
        FileManagerError::io(action, e)
    })
}

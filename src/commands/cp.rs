use crate::command::{operands, wants_usage, Command, CommandResult};
use crate::commands::{create_target, ensure_distinct, open_source};
use crate::context::SessionContext;
use crate::error::FileManagerError;
use std::io::{self, Write};
use std::path::Path;

/// cp SOURCE DEST
/// Copy SOURCE's bytes to DEST, overwriting DEST.
pub struct CpCommand;

const CP_USAGE: &str = "Usage: cp <src> <dst>\nCopy a file. An existing destination is overwritten.";

impl Command for CpCommand {
    fn execute(&self, args: &[String], ctx: &mut SessionContext, _out: &mut dyn Write) -> CommandResult {
        if wants_usage(args) {
            return Ok(CP_USAGE.to_string());
        }
        let ops = operands(args, 2)?;
        let (src_arg, dst_arg) = (&ops[0], &ops[1]);

        let src = ctx.require_file(src_arg, FileManagerError::InvalidSource)?;
        let dst = ctx.resolve(dst_arg);
        log::debug!("[cp] {} -> {}", src.display(), dst.display());

        copy_file(&src, &dst, ctx.options.buffer_size).map_err(|e| {
            log::warn!("[cp] {} -> {}: {}", src.display(), dst.display(), e);
            FileManagerError::io("copying file", e)
        })?;
        Ok(format!("File copied: {} -> {}", src_arg, dst_arg))
    }
}

// stream copy - never holds the whole file
fn copy_file(src: &Path, dst: &Path, buffer_size: usize) -> io::Result<u64> {
    ensure_distinct(src, dst)?;
    let mut reader = open_source(src, buffer_size)?;
    let mut writer = create_target(dst, buffer_size)?;
    let copied = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(copied)
}

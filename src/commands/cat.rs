use crate::command::{operands, wants_usage, Command, CommandResult};
use crate::commands::open_source;
use crate::context::SessionContext;
use crate::error::FileManagerError;
use std::io::{self, Write};
use std::path::Path;

pub struct CatCommand;

const CAT_USAGE: &str = "Usage: cat <path>\nPrint a file's raw contents.";

impl Command for CatCommand {
    fn execute(&self, args: &[String], ctx: &mut SessionContext, out: &mut dyn Write) -> CommandResult {
        if wants_usage(args) {
            return Ok(CAT_USAGE.to_string());
        }
        let target = &operands(args, 1)?[0];
        let path = ctx.require_file(target, FileManagerError::InvalidFile)?;
        log::debug!("[cat] streaming {}", path.display());

        // raw bytes, no decoding - binary files go out untouched
        stream_to(&path, ctx.options.buffer_size, out).map_err(|e| {
            log::warn!("[cat] {}: {}", path.display(), e);
            FileManagerError::io("reading file", e)
        })?;
        Ok(String::new())
    }
}

fn stream_to(path: &Path, buffer_size: usize, out: &mut dyn Write) -> io::Result<u64> {
    let mut reader = open_source(path, buffer_size)?;
    let copied = io::copy(&mut reader, out)?;
    out.flush()?;
    Ok(copied)
}

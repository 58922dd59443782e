use crate::command::{operands, wants_usage, Command, CommandResult};
use crate::context::SessionContext;
use crate::error::FileManagerError;
use std::fs;
use std::io::Write;

/// rm FILE
/// Remove a single file. Directories are refused.
pub struct RmCommand;

const RM_USAGE: &str = "Usage: rm <path>\nDelete a file. Directories are not removed.";

impl Command for RmCommand {
    fn execute(&self, args: &[String], ctx: &mut SessionContext, _out: &mut dyn Write) -> CommandResult {
        if wants_usage(args) {
            return Ok(RM_USAGE.to_string());
        }
        let target = &operands(args, 1)?[0];
        let path = ctx.require_file(target, FileManagerError::InvalidFile)?;
        log::debug!("[rm] {}", path.display());

        fs::remove_file(&path).map_err(|e| {
            log::warn!("[rm] {}: {}", path.display(), e);
            FileManagerError::io("deleting file", e)
        })?;
        Ok(format!("File deleted: {}", target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::run;

    #[test]
    fn test_rm_deletes_file() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("junk.txt"), b"x").unwrap();
        let mut ctx = SessionContext::at(tmp.path());

        let msg = run(&RmCommand, &["junk.txt"], &mut ctx).unwrap();
        assert_eq!(msg, "File deleted: junk.txt");
        assert!(!tmp.path().join("junk.txt").exists());
    }

    #[test]
    fn test_rm_nonexistent_changes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("keep.txt"), b"x").unwrap();
        let mut ctx = SessionContext::at(tmp.path());

        let result = run(&RmCommand, &["ghost.txt"], &mut ctx);
        assert!(matches!(result, Err(FileManagerError::InvalidFile)));
        assert!(tmp.path().join("keep.txt").exists());
    }

    #[test]
    fn test_rm_refuses_directory() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("dir")).unwrap();
        let mut ctx = SessionContext::at(tmp.path());

        let result = run(&RmCommand, &["dir"], &mut ctx);
        assert!(matches!(result, Err(FileManagerError::InvalidFile)));
        assert!(tmp.path().join("dir").is_dir());
    }
}

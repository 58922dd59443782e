use crate::command::{wants_usage, Command, CommandResult};
use crate::context::{is_dir, SessionContext};
use crate::error::FileManagerError;
use std::io::Write;

/// up
/// Move to the parent of the current directory.
pub struct UpCommand;

const UP_USAGE: &str = "Usage: up\nMove to the parent directory.";

impl Command for UpCommand {
    fn execute(&self, args: &[String], ctx: &mut SessionContext, _out: &mut dyn Write) -> CommandResult {
        if wants_usage(args) {
            return Ok(UP_USAGE.to_string());
        }
        // no parent means we're sitting on the root
        let parent = match ctx.cwd.parent() {
            Some(p) => p.to_path_buf(),
            None => return Ok("You are already in the root directory.".to_string()),
        };
        // cwd may have been pulled out from under us
        if !is_dir(&parent) {
            return Err(FileManagerError::InvalidDirectory);
        }
        ctx.change_dir(parent);
        Ok(ctx.location_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::run;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_up_moves_to_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let child = tmp.path().join("projects");
        fs::create_dir(&child).unwrap();
        let mut ctx = SessionContext::at(&child);

        let msg = run(&UpCommand, &[], &mut ctx).unwrap();
        assert_eq!(ctx.cwd, tmp.path());
        assert_eq!(msg, format!("You are currently in {}", tmp.path().display()));
    }

    #[test]
    fn test_up_at_root_stays_put() {
        let root = PathBuf::from("/");
        let mut ctx = SessionContext::at(&root);

        let msg = run(&UpCommand, &[], &mut ctx).unwrap();
        assert_eq!(msg, "You are already in the root directory.");
        assert_eq!(ctx.cwd, root);
    }

    #[test]
    fn test_up_into_deleted_parent_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let gone = tmp.path().join("gone");
        let mut ctx = SessionContext::at(gone.join("child"));

        let result = run(&UpCommand, &[], &mut ctx);
        assert!(matches!(result, Err(FileManagerError::InvalidDirectory)));
        assert_eq!(ctx.cwd, gone.join("child"));
    }
}

use crate::command::{wants_usage, Command, CommandResult};
use crate::context::{is_dir, SessionContext};
use crate::error::FileManagerError;
use std::fmt::Write as _;
use std::fs;
use std::io::Write;

pub struct LsCommand;

const LS_USAGE: &str = "Usage: ls\nList the current directory, folders and files, sorted by name.";
const LS_HEADER: &str = "Index  |    Type    |   Name";
const LS_RULE: &str = "------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Folder => "Folder",
            EntryKind::File => "File",
        }
    }
}

/// Sorted (name, kind) pairs for a directory. Anything that isn't a
/// directory after following symlinks counts as a file.
pub fn list_entries(dir: &std::path::Path) -> std::io::Result<Vec<(String, EntryKind)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let kind = if is_dir(&entry.path()) { EntryKind::Folder } else { EntryKind::File };
        entries.push((entry.file_name().to_string_lossy().into_owned(), kind));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}

impl Command for LsCommand {
    fn execute(&self, args: &[String], ctx: &mut SessionContext, _out: &mut dyn Write) -> CommandResult {
        if wants_usage(args) {
            return Ok(LS_USAGE.to_string());
        }
        let entries = list_entries(&ctx.cwd).map_err(|e| {
            log::warn!("[ls] cannot read {}: {}", ctx.cwd.display(), e);
            FileManagerError::io("listing directory", e)
        })?;

        let mut out = String::new();
        writeln!(out, "{}", ctx.location_message()).unwrap();
        writeln!(out, "{}", LS_HEADER).unwrap();
        write!(out, "{}", LS_RULE).unwrap();
        for (index, (name, kind)) in entries.iter().enumerate() {
            write!(out, "\n{:<5}  |  {:<10}| {}", index, kind.label(), name).unwrap();
        }
        Ok(out)
    }
}

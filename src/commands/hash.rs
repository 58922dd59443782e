use crate::command::{operands, wants_usage, Command, CommandResult};
use crate::commands::open_source;
use crate::context::SessionContext;
use crate::error::FileManagerError;
use sha2::{Digest, Sha256};
use std::io::{self, Write};
use std::path::Path;

pub struct HashCommand;

const HASH_USAGE: &str = "Usage: hash <path>\nPrint the SHA-256 digest of a file as hex.";

impl Command for HashCommand {
    fn execute(&self, args: &[String], ctx: &mut SessionContext, _out: &mut dyn Write) -> CommandResult {
        if wants_usage(args) {
            return Ok(HASH_USAGE.to_string());
        }
        let target = &operands(args, 1)?[0];
        let path = ctx.require_file(target, FileManagerError::InvalidFile)?;

        let digest = sha256_file(&path, ctx.options.buffer_size).map_err(|e| {
            log::warn!("[hash] {}: {}", path.display(), e);
            FileManagerError::io("hashing file", e)
        })?;
        Ok(format!("Hash for {}: {}\nHash calculation completed.", target, digest))
    }
}

/// Lowercase hex SHA-256 of a file, read in chunks.
pub fn sha256_file(path: &Path, buffer_size: usize) -> io::Result<String> {
    let mut reader = open_source(path, buffer_size)?;
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::run;
    use std::fs;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn test_known_digests() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("empty"), b"").unwrap();
        fs::write(tmp.path().join("abc"), b"abc").unwrap();

        assert_eq!(sha256_file(&tmp.path().join("empty"), 16).unwrap(), EMPTY_SHA256);
        assert_eq!(sha256_file(&tmp.path().join("abc"), 16).unwrap(), ABC_SHA256);
    }

    #[test]
    fn test_hash_output_format() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("abc.txt"), b"abc").unwrap();
        let mut ctx = SessionContext::at(tmp.path());

        let out = run(&HashCommand, &["abc.txt"], &mut ctx).unwrap();
        assert_eq!(
            out,
            format!("Hash for abc.txt: {}\nHash calculation completed.", ABC_SHA256)
        );
    }

    #[test]
    fn test_digest_depends_on_content_only() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("elsewhere")).unwrap();
        fs::write(tmp.path().join("one.txt"), b"same bytes").unwrap();
        fs::write(tmp.path().join("elsewhere/two.bin"), b"same bytes").unwrap();
        fs::write(tmp.path().join("three.txt"), b"same bytez").unwrap();

        let one = sha256_file(&tmp.path().join("one.txt"), 4096).unwrap();
        assert_eq!(one, sha256_file(&tmp.path().join("one.txt"), 4096).unwrap());
        assert_eq!(one, sha256_file(&tmp.path().join("elsewhere/two.bin"), 3).unwrap());
        assert_ne!(one, sha256_file(&tmp.path().join("three.txt"), 4096).unwrap());
    }

    #[test]
    fn test_hash_directory_is_invalid() {
        let tmp = tempfile::tempdir().unwrap();
        let mut ctx = SessionContext::at(tmp.path());

        let result = run(&HashCommand, &["."], &mut ctx);
        assert!(matches!(result, Err(FileManagerError::InvalidFile)));
    }
}

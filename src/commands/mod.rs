pub mod cat;
pub mod cd;
pub mod compress;
pub mod cp;
pub mod hash;
pub mod help;
pub mod ls;
pub mod mv;
pub mod os;
pub mod rm;
pub mod up;

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

// shared plumbing for the streaming commands

pub(crate) fn open_source(path: &Path, buffer_size: usize) -> io::Result<BufReader<File>> {
    Ok(BufReader::with_capacity(buffer_size, File::open(path)?))
}

/// Creates or truncates `path`.
pub(crate) fn create_target(path: &Path, buffer_size: usize) -> io::Result<BufWriter<File>> {
    Ok(BufWriter::with_capacity(buffer_size, File::create(path)?))
}

/// Truncating the destination would wipe the source if they're the same file.
pub(crate) fn ensure_distinct(src: &Path, dst: &Path) -> io::Result<()> {
    let same = match (fs::canonicalize(src), fs::canonicalize(dst)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false, // dst usually doesn't exist yet
    };
    if same {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source and destination are the same file",
        ));
    }
    Ok(())
}

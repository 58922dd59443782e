use crate::config::SessionOptions;
use crate::error::FileManagerError;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Per-session state handed to every command.
pub struct SessionContext {
    pub cwd: PathBuf,
    pub home: PathBuf,
    pub options: SessionOptions,
}

impl SessionContext {
    pub fn new(cwd: PathBuf, home: PathBuf, options: SessionOptions) -> Self {
        Self { cwd, home, options }
    }

    /// Session rooted at `dir` with default options. `dir` doubles as home.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self::new(dir.clone(), dir, SessionOptions::default())
    }

    pub fn location_message(&self) -> String {
        format!("You are currently in {}", self.cwd.display())
    }

    /// Absolute args are taken as is, anything else hangs off cwd.
    /// No `.`/`..` collapsing and no symlink resolution here.
    pub fn resolve(&self, arg: &str) -> PathBuf {
        let path = Path::new(arg);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Resolve `arg` and insist it's an existing regular file (symlinks followed).
    pub fn require_file(&self, arg: &str, invalid: FileManagerError) -> Result<PathBuf, FileManagerError> {
        let path = self.resolve(arg);
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Ok(path),
            _ => {
                log::debug!("[context] not a file: {}", path.display());
                Err(invalid)
            }
        }
    }

    /// Resolve `arg` and insist it's an existing directory.
    pub fn require_dir(&self, arg: &str) -> Result<PathBuf, FileManagerError> {
        let path = self.resolve(arg);
        if is_dir(&path) {
            Ok(path)
        } else {
            log::debug!("[context] not a directory: {}", path.display());
            Err(FileManagerError::InvalidDirectory)
        }
    }

    /// Adopt a new working directory. Callers have already checked it exists.
    pub fn change_dir(&mut self, path: PathBuf) {
        log::debug!("[context] cwd {} -> {}", self.cwd.display(), path.display());
        self.cwd = path;
    }
}

pub fn is_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

// collapse . and .. lexically - meant for absolute paths, .. at root stays at root
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => continue,
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

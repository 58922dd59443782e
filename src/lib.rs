// interactive file manager - a small REPL over the real file system
// one session = one working directory + a table of commands
pub mod command;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;

use command::{CommandRegistry, EXIT_COMMAND};
use config::FileManagerConfig;
use context::SessionContext;
use error::FileManagerError;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// What the caller should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Exit,
}

// session + command table + the bits of config the loop itself needs
pub struct FileManager {
    ctx: SessionContext,
    registry: CommandRegistry,
    username: String,
    prompt: String,
}

impl FileManager {
    /// Build a session from config. Starts in `start_dir` if given, else home.
    pub fn new(config: &FileManagerConfig) -> Result<Self, FileManagerError> {
        config.session.validate()?;
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        let cwd = match &config.start_dir {
            Some(dir) => {
                let canonical = fs::canonicalize(dir).map_err(|e| FileManagerError::io("opening start directory", e))?;
                if !context::is_dir(&canonical) {
                    return Err(FileManagerError::InvalidDirectory);
                }
                canonical
            }
            None => home.clone(),
        };
        let ctx = SessionContext::new(cwd, home, config.session);
        Ok(Self::with_context(ctx, config.display_name(), config.prompt.clone()))
    }

    pub fn with_context(ctx: SessionContext, username: String, prompt: String) -> Self {
        let registry = CommandRegistry::default_commands();
        log::debug!("[session] {} commands registered", registry.get_command_names().len());
        Self { ctx, registry, username, prompt }
    }

    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    pub fn welcome(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Welcome to the File Manager, {}!", self.username)?;
        writeln!(out, "{}", self.ctx.location_message())
    }

    pub fn goodbye(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Thank you for using File Manager, {}, goodbye!", self.username)
    }

    /// Run one line. Command failures are printed, never returned - only
    /// a broken output stream comes back as Err.
    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> io::Result<LineOutcome> {
        // .exit is the loop's business, not a registry command
        if command::tokenize(line).first().map(String::as_str) == Some(EXIT_COMMAND) {
            self.goodbye(out)?;
            return Ok(LineOutcome::Exit);
        }
        match command::run_command(line, &mut self.ctx, &self.registry, out) {
            Ok(msg) => {
                if !msg.is_empty() {
                    writeln!(out, "{}", msg)?;
                }
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
        Ok(LineOutcome::Continue)
    }

    /// The REPL: banner, then prompt/read/dispatch until `.exit` or EOF.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<()> {
        self.welcome(&mut out)?;
        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                log::info!("[session] end of input");
                writeln!(out)?;
                return Ok(());
            }
            if self.handle_line(&line, &mut out)? == LineOutcome::Exit {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::DEFAULT_PROMPT;

    fn manager_at(dir: &std::path::Path) -> FileManager {
        FileManager::with_context(SessionContext::at(dir), "tester".to_string(), DEFAULT_PROMPT.to_string())
    }

    #[test]
    fn test_exit_says_goodbye() {
        let tmp = tempfile::tempdir().unwrap();
        let mut fm = manager_at(tmp.path());
        let mut out = Vec::new();

        let outcome = fm.handle_line("  .exit  \n", &mut out).unwrap();
        assert_eq!(outcome, LineOutcome::Exit);
        assert_eq!(String::from_utf8(out).unwrap(), "Thank you for using File Manager, tester, goodbye!\n");
    }

    #[test]
    fn test_errors_are_printed_not_returned() {
        let tmp = tempfile::tempdir().unwrap();
        let mut fm = manager_at(tmp.path());
        let mut out = Vec::new();

        let outcome = fm.handle_line("rm ghost.txt", &mut out).unwrap();
        assert_eq!(outcome, LineOutcome::Continue);
        assert_eq!(String::from_utf8(out).unwrap(), "Invalid file path or file does not exist.\n");
    }

    #[test]
    fn test_start_dir_must_exist() {
        let tmp = tempfile::tempdir().unwrap();
        let config = FileManagerConfig {
            start_dir: Some(tmp.path().join("missing")),
            ..FileManagerConfig::default()
        };
        assert!(FileManager::new(&config).is_err());
    }

    #[test]
    fn test_start_dir_is_canonical() {
        let tmp = tempfile::tempdir().unwrap();
        let config = FileManagerConfig {
            username: Some("ann".to_string()),
            start_dir: Some(tmp.path().to_path_buf()),
            ..FileManagerConfig::default()
        };
        let fm = FileManager::new(&config).unwrap();
        assert_eq!(fm.context().cwd, fs::canonicalize(tmp.path()).unwrap());
    }
}

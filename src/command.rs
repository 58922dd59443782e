use crate::commands;
use crate::context::SessionContext;
use crate::error::FileManagerError;
use regex::Regex;
use std::collections::HashMap;
use std::io::Write;
use std::sync::OnceLock;

/// Ok carries the message to print (may be empty), Err is printed as is.
pub type CommandResult = Result<String, FileManagerError>;

pub const EXIT_COMMAND: &str = ".exit";

pub trait Command {
    /// `out` is for commands that stream raw bytes (cat); everything else
    /// returns its text.
    fn execute(&self, args: &[String], ctx: &mut SessionContext, out: &mut dyn Write) -> CommandResult;
}

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command + Send + Sync>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: HashMap::new() }
    }
    pub fn register_command(&mut self, name: &str, cmd: Box<dyn Command + Send + Sync>) {
        self.commands.insert(name.to_string(), cmd);
    }
    pub fn get(&self, name: &str) -> Option<&(dyn Command + Send + Sync)> {
        self.commands.get(name).map(|cmd| &**cmd)
    }
    pub fn get_command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }
    pub fn default_commands() -> Self {
        let mut reg = Self::new();
        reg.register_command("up", Box::new(commands::up::UpCommand));
        reg.register_command("ls", Box::new(commands::ls::LsCommand));
        reg.register_command("cd", Box::new(commands::cd::CdCommand));
        reg.register_command("cat", Box::new(commands::cat::CatCommand));
        reg.register_command("cp", Box::new(commands::cp::CpCommand));
        reg.register_command("mv", Box::new(commands::mv::MvCommand));
        reg.register_command("rm", Box::new(commands::rm::RmCommand));
        reg.register_command("rn", Box::new(commands::mv::RnCommand));
        reg.register_command("compress", Box::new(commands::compress::CompressCommand));
        reg.register_command("decompress", Box::new(commands::compress::DecompressCommand));
        reg.register_command("hash", Box::new(commands::hash::HashCommand));
        reg.register_command("--EOL", Box::new(commands::os::EolCommand));
        reg.register_command("--cpus", Box::new(commands::os::CpusCommand));
        reg.register_command("--homedir", Box::new(commands::os::HomedirCommand));
        reg.register_command("--username", Box::new(commands::os::UsernameCommand));
        reg.register_command("--architecture", Box::new(commands::os::ArchitectureCommand));

        // help lists everything, .exit included even though the dispatcher owns it
        let mut names = reg.get_command_names();
        names.push("help".to_string());
        names.push(EXIT_COMMAND.to_string());
        names.sort();
        reg.register_command("help", Box::new(commands::help::HelpCommand::new(names)));
        reg
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::default_commands()
    }
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#""([^"]*)"|'([^']*)'|(\S+)"#).expect("token pattern is valid")
    })
}

/// Split a line into words. Quoted words keep their spaces, quotes dropped.
pub fn tokenize(input: &str) -> Vec<String> {
    token_pattern()
        .captures_iter(input)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// First `n` args or invalid input if the user gave fewer.
pub fn operands(args: &[String], n: usize) -> Result<&[String], FileManagerError> {
    if args.len() < n {
        return Err(FileManagerError::InvalidInput);
    }
    Ok(&args[..n])
}

/// `<cmd> --help` prints usage instead of doing anything.
pub fn wants_usage(args: &[String]) -> bool {
    args.first().map(|a| a == "--help").unwrap_or(false)
}

pub fn run_command(
    input: &str,
    ctx: &mut SessionContext,
    registry: &CommandRegistry,
    out: &mut dyn Write,
) -> CommandResult {
    let mut parts = tokenize(input).into_iter();
    let cmd = match parts.next() {
        Some(c) => c,
        None => return Ok(String::new()), // empty input = no-op
    };
    let args: Vec<String> = parts.collect();

    match registry.get(&cmd) {
        Some(command) => {
            log::debug!("[dispatch] {} {:?}", cmd, args);
            command.execute(&args, ctx, out)
        }
        None => {
            log::info!("[dispatch] unknown command: {}", cmd);
            Err(FileManagerError::InvalidInput)
        }
    }
}

// host facts: --EOL, --cpus, --homedir, --username, --architecture
use crate::command::{Command, CommandResult};
use crate::context::SessionContext;
use std::fmt::Write as _;
use std::io::Write;
use sysinfo::System;

const UNKNOWN: &str = "unknown";

#[cfg(windows)]
pub const EOL: &str = "\r\n";
#[cfg(not(windows))]
pub const EOL: &str = "\n";

pub struct EolCommand;
pub struct CpusCommand;
pub struct HomedirCommand;
pub struct UsernameCommand;
pub struct ArchitectureCommand;

impl Command for EolCommand {
    fn execute(&self, _args: &[String], _ctx: &mut SessionContext, _out: &mut dyn Write) -> CommandResult {
        // escaped so the line ending is actually visible
        Ok(format!("End-Of-Line (EOL): {:?}", EOL))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CpuInfo {
    pub model: String,
    pub mhz: u64,
}

pub fn cpu_info() -> Vec<CpuInfo> {
    let mut sys = System::new();
    sys.refresh_cpu();
    sys.cpus()
        .iter()
        .map(|cpu| CpuInfo {
            model: cpu.brand().trim().to_string(),
            mhz: cpu.frequency(),
        })
        .collect()
}

pub fn format_cpus(cpus: &[CpuInfo]) -> String {
    let mut out = String::from("CPU Information:\n-----------------\n");
    for (i, cpu) in cpus.iter().enumerate() {
        let model = if cpu.model.is_empty() { UNKNOWN } else { cpu.model.as_str() };
        writeln!(out, "CPU {}:", i + 1).unwrap();
        writeln!(out, "  Model: {}", model).unwrap();
        writeln!(out, "  Speed: {} GHz", cpu.mhz as f64 / 1000.0).unwrap();
        writeln!(out, "-----------------").unwrap();
    }
    write!(out, "Total CPUs: {}", cpus.len()).unwrap();
    out
}

impl Command for CpusCommand {
    fn execute(&self, _args: &[String], _ctx: &mut SessionContext, _out: &mut dyn Write) -> CommandResult {
        Ok(format_cpus(&cpu_info()))
    }
}

impl Command for HomedirCommand {
    fn execute(&self, _args: &[String], _ctx: &mut SessionContext, _out: &mut dyn Write) -> CommandResult {
        let home = dirs::home_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| UNKNOWN.to_string());
        Ok(format!("Home Directory: {}", home))
    }
}

impl Command for UsernameCommand {
    fn execute(&self, _args: &[String], _ctx: &mut SessionContext, _out: &mut dyn Write) -> CommandResult {
        Ok(format!("Current System User: {}", whoami::username()))
    }
}

impl Command for ArchitectureCommand {
    fn execute(&self, _args: &[String], _ctx: &mut SessionContext, _out: &mut dyn Write) -> CommandResult {
        Ok(format!("CPU Architecture: {}", std::env::consts::ARCH))
    }
}

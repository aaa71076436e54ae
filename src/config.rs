//! Command-line arguments and the runtime configuration resolved from them.

use crate::log::Level;
use crate::mach::Stack;
use clap::Parser;
use std::path::PathBuf;

/// Environment variable consulted for the log level when no `-v` is given.
pub const LOG_ENV: &str = "HACKVM_LOG";

/// HackVM: every character is an instruction.
///
/// Runs FILE, or reads instructions line by line when no FILE is given.
#[derive(Debug, Parser)]
#[command(name = "hackvm", version)]
pub struct Args {
    /// Program text to run.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Skip the welcome banner in interactive mode.
    #[arg(short, long)]
    pub quiet: bool,

    /// More diagnostics on stderr (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Instructions run between output and interrupt checks.
    #[arg(long, default_value_t = 5000, value_parser = clap::value_parser!(u64).range(1..))]
    pub cycles: u64,

    /// Maximum depth of the operand stack and the call stack.
    #[arg(long, default_value_t = Stack::<i64>::DEFAULT_LIMIT)]
    pub stack_limit: usize,
}

/// How the program text reaches the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Batch(PathBuf),
    Interactive,
}

/// Settings resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub quiet: bool,
    pub log_level: Level,
    pub cycles: usize,
    pub stack_limit: usize,
}

impl Config {
    pub fn from_args(args: &Args) -> Config {
        Config::resolve(args, std::env::var(LOG_ENV).ok().as_deref())
    }

    fn resolve(args: &Args, log_env: Option<&str>) -> Config {
        let log_level = match args.verbose {
            0 => log_env.and_then(Level::parse).unwrap_or(Level::Warn),
            1 => Level::Info,
            _ => Level::Debug,
        };
        let mode = match &args.file {
            Some(path) => Mode::Batch(path.clone()),
            None => Mode::Interactive,
        };
        Config {
            mode,
            quiet: args.quiet,
            log_level,
            cycles: args.cycles as usize,
            stack_limit: args.stack_limit,
        }
    }
}

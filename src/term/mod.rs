/*!
## Terminal Module

Feeds program text to the machine and carries its output back out:
a whole file at once, or one line at a time from the keyboard.

*/

extern crate ansi_term;
extern crate linefeed;
use crate::config::{Args, Config, Mode};
use crate::lang::{Error, Opcode};
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use clap::Parser;
use linefeed::{Interface, ReadResult};
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

pub const PROMPT: &str = "HackVM>";

/// How a stretch of execution ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// All available code ran. More may be entered.
    EndOfCode,
    Exit,
    Fault(Error),
}

pub fn main() -> ExitCode {
    let config = Config::from_args(&Args::parse());
    crate::log::set_level(config.log_level);
    debug!("{:?}", config);
    let mut runtime = Runtime::with_stack_limit(config.stack_limit);
    let result = match &config.mode {
        Mode::Batch(path) => run_file(&mut runtime, &config, path),
        Mode::Interactive => run_interactive(&mut runtime, &config),
    };
    match result {
        Ok(Outcome::Fault(error)) => {
            report_fault(&error);
            ExitCode::from(1)
        }
        Ok(outcome) => {
            info!("finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            ExitCode::from(1)
        }
    }
}

/// Runs until the machine stops, exits or faults, writing output as it appears.
pub fn drive<W: Write>(runtime: &mut Runtime, cycles: usize, out: &mut W) -> io::Result<Outcome> {
    loop {
        match runtime.execute(cycles) {
            Event::Running => {}
            Event::Print(bytes) => {
                out.write_all(&bytes)?;
                out.flush()?;
            }
            Event::Stopped => return Ok(Outcome::EndOfCode),
            Event::Exited => return Ok(Outcome::Exit),
            Event::Fault(error) => return Ok(Outcome::Fault(error)),
        }
    }
}

fn run_file(runtime: &mut Runtime, config: &Config, path: &Path) -> io::Result<Outcome> {
    let bytes = fs::read(path).map_err(|error| {
        io::Error::new(error.kind(), format!("{}: {}", path.display(), error))
    })?;
    info!("loaded {} ({} bytes)", path.display(), bytes.len());
    runtime.load(&bytes);
    drive(runtime, config.cycles, &mut io::stdout())
}

fn run_interactive(runtime: &mut Runtime, config: &Config) -> io::Result<Outcome> {
    let mut stdout = io::stdout();
    if !config.quiet {
        write!(stdout, "{}", banner())?;
    }
    if io::stdin().is_terminal() {
        info!("interactive mode");
        interact_terminal(runtime, config.cycles)
    } else {
        info!("interactive mode, reading standard input");
        interact(runtime, config.cycles, io::stdin().lock(), &mut stdout)
    }
}

/// Reads lines from `input`, appending each to the program and running it.
/// Machine state carries over from one line to the next.
pub fn interact<R: BufRead, W: Write>(
    runtime: &mut Runtime,
    cycles: usize,
    input: R,
    out: &mut W,
) -> io::Result<Outcome> {
    let mut lines = input.lines();
    loop {
        write!(out, "\n{}", PROMPT)?;
        out.flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(Outcome::EndOfCode),
        };
        runtime.enter(&line);
        match drive(runtime, cycles, out)? {
            Outcome::EndOfCode => {}
            outcome => return Ok(outcome),
        }
    }
}

fn interact_terminal(runtime: &mut Runtime, cycles: usize) -> io::Result<Outcome> {
    let interface = Interface::new("HackVM")?;
    interface.set_prompt(PROMPT)?;
    let mut stdout = io::stdout();
    loop {
        interface.write_fmt(format_args!("\n"))?;
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(_) | ReadResult::Eof => return Ok(Outcome::EndOfCode),
        };
        if runtime.enter(&line) {
            interface.add_history_unique(line);
        }
        match drive(runtime, cycles, &mut stdout)? {
            Outcome::EndOfCode => {}
            outcome => return Ok(outcome),
        }
    }
}

fn report_fault(error: &Error) {
    info!("fault: {}", error);
    eprintln!("\n?{}", Style::new().bold().paint(error.to_string()));
    if let Some(opcode) = error.opcode() {
        eprintln!("opcode: {}", opcode);
    }
    if let Some(pc) = error.pc() {
        eprintln!("Program counter: {}", pc);
    }
}

/// Welcome text and the opcode table shown before interactive mode.
pub fn banner() -> String {
    let mut s = String::from("Welcome to HackVM\nHere is a list of all opcodes:\n\n");
    let mut digits = String::new();
    for op in Opcode::all() {
        match op {
            Opcode::Digit(d) => {
                digits.push_str(&format!("'{}' ", d));
                if d == 9 {
                    s.push_str(&format!("    {}: {}\n", digits.trim_end(), op.describe()));
                }
            }
            _ => s.push_str(&format!("    '{}': {}\n", op.to_char(), op.describe())),
        }
    }
    s
}

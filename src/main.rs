//! # HackVM
//!
//! Runs a program file, or reads instructions interactively.
//!

fn main() -> std::process::ExitCode {
    hackvm::term::main()
}

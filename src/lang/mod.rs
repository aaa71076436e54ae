/*!
# Rust Language Module

This Rust module decodes HackVM program text and defines the faults
the machine can raise while running it.

*/

/// Program counter values. Signed, because a jump can move it below zero.
pub type Address = i64;

#[macro_use]
mod error;
mod code;
mod opcode;

pub use code::Code;
pub use error::Error;
pub use error::ErrorCode;
pub use opcode::Opcode;

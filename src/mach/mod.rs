/*!
## Rust Machine Module

This Rust module is the HackVM virtual machine: operand stack,
memory, call stack and the fetch-decode-execute loop over them.

*/

mod memory;
mod runtime;
mod stack;

pub use memory::Memory;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::State;
pub use stack::Stack;

#[cfg(test)]
mod tests;

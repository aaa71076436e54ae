//! # HackVM
//!
//! A tiny stack machine where every character of program text is an
//! instruction. There are no multi-digit numbers: `9` pushes nine, and
//! larger constants are built with arithmetic.
//!
//! Run a file with `hackvm program.hvm`, or start `hackvm` with no
//! arguments and type instructions. Each line you enter is appended to
//! the running program, so the stack and memory carry over.
//! ```text
//! HackVM>34+p
//! 7
//! HackVM>
//! ```
//!
//! The machine can also be driven as a library. Faults never end the
//! process from inside the library; they come back as events.
//! ```
//! use hackvm::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.enter("67*p");
//! assert_eq!(runtime.execute(100), Event::Print(b"42".to_vec()));
//! assert_eq!(runtime.execute(100), Event::Stopped);
//! ```

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod _Chapter_1;

pub mod config;
#[macro_use]
pub mod log;
pub mod lang;
pub mod mach;
pub mod term;

use super::Address;
use std::convert::TryFrom;

/// ## Append-only program text
///
/// Program counters index bytes, so a file is loaded exactly as it is
/// stored on disk. Bytes that are not ASCII opcodes simply never decode.

#[derive(Debug, Default, Clone)]
pub struct Code {
    bytes: Vec<u8>,
}

impl Code {
    pub fn new() -> Code {
        Code::default()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Length as a program counter value.
    pub fn end(&self) -> Address {
        self.bytes.len() as Address
    }

    pub fn append(&mut self, text: &[u8]) {
        self.bytes.extend_from_slice(text);
    }

    /// `None` when `pc` is past the end or negative.
    pub fn fetch(&self, pc: Address) -> Option<char> {
        usize::try_from(pc)
            .ok()
            .and_then(|i| self.bytes.get(i))
            .map(|&b| b as char)
    }
}

impl From<&str> for Code {
    fn from(s: &str) -> Code {
        Code {
            bytes: s.as_bytes().to_vec(),
        }
    }
}

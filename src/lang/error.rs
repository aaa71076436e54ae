use super::Address;

/// ## Fatal fault raised by the machine
///
/// Every fault stops the program. The dispatcher stamps the opcode and
/// program counter on the error before it leaves the machine.

#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    opcode: Option<char>,
    pc: Option<Address>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $op:expr, @$pc:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_opcode($op)
            .at_pc($pc)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            opcode: None,
            pc: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn opcode(&self) -> Option<char> {
        self.opcode
    }

    pub fn pc(&self) -> Option<Address> {
        self.pc
    }

    pub fn in_opcode(&self, opcode: char) -> Error {
        debug_assert!(self.opcode.is_none());
        Error {
            code: self.code,
            opcode: Some(opcode),
            pc: self.pc,
        }
    }

    pub fn at_pc(&self, pc: Address) -> Error {
        debug_assert!(self.pc.is_none());
        Error {
            code: self.code,
            opcode: self.opcode,
            pc: Some(pc),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorCode {
    #[error("NEGATIVE PROGRAM COUNTER")]
    NegativePC,
    #[error("ADDRESS OUT OF RANGE")]
    AddressOutOfRange,
    #[error("STACK INDEX OUT OF RANGE")]
    StackIndexOutOfRange,
    #[error("STACK UNDERFLOW")]
    StackUnderflow,
    #[error("RETURN WITHOUT CALL")]
    ReturnWithoutCall,
    #[error("DIVISION BY ZERO")]
    DivisionByZero,
    #[error("STACK OVERFLOW")]
    StackOverflow,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(pc) = self.pc {
            suffix.push_str(&format!(" AT {}", pc));
        }
        if let Some(opcode) = self.opcode {
            suffix.push_str(&format!("; OPCODE {:?}", opcode));
        }
        write!(f, "{}{}", self.code, suffix)
    }
}

impl std::error::Error for Error {}

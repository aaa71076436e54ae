/// ## Virtual machine instruction set
///
/// The machine has no registers.
/// Every operation is performed on the operand stack, and every
/// instruction is exactly one character of source text.
///
/// For example: `34+p` decodes to `[Digit(3), Digit(4), Add, PrintInt]`
/// and prints `7`.
///
/// Characters outside the instruction set decode to `None` and are
/// skipped by the machine, so whitespace can be used freely.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // *** Stack manipulation
    /// Push the value of a single decimal digit.
    Digit(u8),
    /// Pop and discard.
    Drop,
    /// Pop depth, push a copy of the element at that depth.
    Pick,
    /// Pop depth, move the element at that depth to the top.
    Roll,

    // *** Expression operations
    Add,
    Sub,
    Mul,
    Div,
    /// Push -1, 0 or 1 comparing second-popped to first-popped.
    Cmp,

    // *** Memory
    Peek,
    Poke,

    // *** Branch control
    /// Pop offset and add it to the program counter.
    Goto,
    /// Pop offset, pop value, branch when the value is zero.
    GotoZero,
    /// Save the program counter and jump to the popped address.
    Call,
    /// Expect a saved program counter or else error: RETURN WITHOUT CALL.
    Return,
    Exit,

    // *** Output
    PrintInt,
    PrintChar,
}

impl Opcode {
    pub fn decode(ch: char) -> Option<Opcode> {
        use Opcode::*;
        Some(match ch {
            '0'..='9' => Digit(ch as u8 - b'0'),
            '+' => Add,
            '-' => Sub,
            '*' => Mul,
            '/' => Div,
            ':' => Cmp,
            'p' => PrintInt,
            'P' => PrintChar,
            'g' => Goto,
            '?' => GotoZero,
            '<' => Peek,
            '>' => Poke,
            'd' => Drop,
            'c' => Call,
            '$' => Return,
            '^' => Pick,
            'v' => Roll,
            '!' => Exit,
            _ => return None,
        })
    }

    pub fn to_char(self) -> char {
        use Opcode::*;
        match self {
            Digit(d) => (b'0' + d) as char,
            Add => '+',
            Sub => '-',
            Mul => '*',
            Div => '/',
            Cmp => ':',
            PrintInt => 'p',
            PrintChar => 'P',
            Goto => 'g',
            GotoZero => '?',
            Peek => '<',
            Poke => '>',
            Drop => 'd',
            Call => 'c',
            Return => '$',
            Pick => '^',
            Roll => 'v',
            Exit => '!',
        }
    }

    /// One line of help for the interactive banner.
    pub fn describe(self) -> &'static str {
        use Opcode::*;
        match self {
            Digit(_) => "push digit as integer on the stack",
            Add => "addition",
            Sub => "subtraction",
            Mul => "multiplication",
            Div => "division",
            Cmp => "comparison",
            PrintInt => "pop integer and print it",
            PrintChar => "pop character and print it",
            Goto => "(goto) pops address offset and adds it to program counter",
            GotoZero => {
                "(goto zero) pops address offset, then pops value; \
                 if value is zero, adds offset to program counter"
            }
            Peek => "(peek) pops address, pushes memory content at address",
            Poke => "(poke) pops address, then pops value and stores it at address",
            Drop => "(drop) pops one element off the stack",
            Call => {
                "(call) pops address, saves program counter for return, \
                 then jumps to address"
            }
            Return => "return from subroutine to the saved program counter",
            Pick => "(pick) pops depth, pushes a copy of the element at depth",
            Roll => "(roll) pops depth, moves the element at depth to the top",
            Exit => "exit",
        }
    }

    /// Every opcode in banner order.
    pub fn all() -> impl Iterator<Item = Opcode> {
        use Opcode::*;
        static OPS: [Opcode; 17] = [
            Add, Mul, Sub, Div, Cmp, PrintInt, PrintChar, Goto, GotoZero, Peek, Poke, Drop, Call,
            Return, Pick, Roll, Exit,
        ];
        (0..10).map(Digit).chain(OPS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_roundtrips_every_opcode() {
        for op in Opcode::all() {
            assert_eq!(Opcode::decode(op.to_char()), Some(op));
        }
    }

    #[test]
    fn test_decode_skips_unknown() {
        assert_eq!(Opcode::decode(' '), None);
        assert_eq!(Opcode::decode('\n'), None);
        assert_eq!(Opcode::decode('x'), None);
        assert_eq!(Opcode::decode('V'), None);
    }

    #[test]
    fn test_digits() {
        assert_eq!(Opcode::decode('0'), Some(Opcode::Digit(0)));
        assert_eq!(Opcode::decode('9'), Some(Opcode::Digit(9)));
        assert_eq!(Opcode::all().count(), 27);
    }
}

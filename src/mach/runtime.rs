use super::{Memory, Stack};
use crate::error;
use crate::lang::{Address, Code, Error, Opcode};
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

/// ## Run loop state
///
/// `HaltedEndOfCode` only pauses the session: enter more code and
/// execute again. The other two halted states are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    HaltedEndOfCode,
    HaltedByExit,
    FaultedFatal,
}

/// ## Events returned by `execute()`
#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    /// Out of code. Enter more and execute again.
    Stopped,
    /// Cycle budget spent, execute again to continue.
    Running,
    /// The `!` opcode ran. Nothing more will execute.
    Exited,
    /// Output to be written and flushed before the next execute.
    Print(Vec<u8>),
    /// Fatal fault. Nothing more will execute.
    Fault(Error),
}

/// ## Machine session
///
/// Owns the program text and every piece of machine state. Program text
/// only ever grows, so a session can be fed one line at a time.
pub struct Runtime {
    code: Code,
    pc: Address,
    stack: Stack<i64>,
    calls: Stack<Address>,
    memory: Memory,
    state: State,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::with_stack_limit(Stack::<i64>::DEFAULT_LIMIT)
    }
}

impl Runtime {
    pub fn with_stack_limit(limit: usize) -> Runtime {
        Runtime {
            code: Code::new(),
            pc: 0,
            stack: Stack::with_limit(|| error!(StackUnderflow), limit),
            calls: Stack::with_limit(|| error!(ReturnWithoutCall), limit),
            memory: Memory::new(),
            state: State::HaltedEndOfCode,
        }
    }

    /// Appends a line of program text. Returns false, appending nothing,
    /// once the session is over.
    pub fn enter(&mut self, text: &str) -> bool {
        self.load(text.as_bytes())
    }

    /// Appends raw program text, such as the contents of a file.
    pub fn load(&mut self, bytes: &[u8]) -> bool {
        if self.is_finished() {
            return false;
        }
        self.code.append(bytes);
        true
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// True after an exit or a fault.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::HaltedByExit | State::FaultedFatal)
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    /// Operand stack, bottom to top.
    pub fn stack(&self) -> &[i64] {
        self.stack.as_slice()
    }

    pub fn call_depth(&self) -> usize {
        self.calls.len()
    }

    pub fn code_len(&self) -> usize {
        self.code.len()
    }

    pub fn peek_memory(&self, address: i64) -> Result<i64> {
        self.memory.peek(address)
    }

    /// Runs at most `cycles` instructions.
    pub fn execute(&mut self, cycles: usize) -> Event {
        match self.state {
            State::HaltedByExit => return Event::Exited,
            State::FaultedFatal => return Event::Stopped,
            State::Running | State::HaltedEndOfCode => self.state = State::Running,
        }
        for _ in 0..cycles {
            match self.cycle() {
                Ok(None) => {}
                Ok(Some(event)) => return event,
                Err(error) => {
                    self.state = State::FaultedFatal;
                    return Event::Fault(error);
                }
            }
        }
        Event::Running
    }

    fn cycle(&mut self) -> Result<Option<Event>> {
        if self.pc < 0 {
            return Err(error!(NegativePC).at_pc(self.pc));
        }
        let ch = match self.code.fetch(self.pc) {
            Some(ch) => ch,
            None => {
                // Resume at the first appended byte even after a long jump.
                self.pc = self.code.end();
                self.state = State::HaltedEndOfCode;
                return Ok(Some(Event::Stopped));
            }
        };
        self.pc += 1;
        match Opcode::decode(ch) {
            Some(op) => self
                .dispatch(op)
                .map_err(|error| error.in_opcode(ch).at_pc(self.pc)),
            None => Ok(None),
        }
    }

    fn dispatch(&mut self, op: Opcode) -> Result<Option<Event>> {
        use Opcode::*;
        match op {
            Digit(d) => self.stack.push(d as i64)?,
            Drop => {
                self.stack.pop()?;
            }
            Pick => {
                let depth = self.stack.pop()?;
                self.stack.pick(depth)?;
            }
            Roll => {
                let depth = self.stack.pop()?;
                self.stack.roll(depth)?;
            }
            Add => {
                let (lhs, rhs) = self.stack.pop_2()?;
                self.stack.push(lhs.wrapping_add(rhs))?;
            }
            Sub => {
                let (lhs, rhs) = self.stack.pop_2()?;
                self.stack.push(lhs.wrapping_sub(rhs))?;
            }
            Mul => {
                let (lhs, rhs) = self.stack.pop_2()?;
                self.stack.push(lhs.wrapping_mul(rhs))?;
            }
            Div => {
                let (lhs, rhs) = self.stack.pop_2()?;
                if rhs == 0 {
                    return Err(error!(DivisionByZero));
                }
                self.stack.push(lhs.wrapping_div(rhs))?;
            }
            Cmp => {
                let (lhs, rhs) = self.stack.pop_2()?;
                self.stack.push(match lhs.cmp(&rhs) {
                    Ordering::Less => -1,
                    Ordering::Equal => 0,
                    Ordering::Greater => 1,
                })?;
            }
            Peek => {
                let address = self.stack.pop()?;
                let val = self.memory.peek(address)?;
                self.stack.push(val)?;
            }
            Poke => {
                let address = self.stack.pop()?;
                let val = self.stack.pop()?;
                self.memory.poke(address, val)?;
            }
            Goto => {
                let offset = self.stack.pop()?;
                self.pc = self.pc.saturating_add(offset);
            }
            GotoZero => {
                let offset = self.stack.pop()?;
                if self.stack.pop()? == 0 {
                    self.pc = self.pc.saturating_add(offset);
                }
            }
            Call => {
                self.calls.push(self.pc)?;
                self.pc = self.stack.pop()?;
            }
            Return => self.pc = self.calls.pop()?,
            Exit => {
                self.state = State::HaltedByExit;
                return Ok(Some(Event::Exited));
            }
            PrintInt => {
                let val = self.stack.pop()?;
                return Ok(Some(Event::Print(val.to_string().into_bytes())));
            }
            PrintChar => {
                let val = self.stack.pop()?;
                return Ok(Some(Event::Print(vec![val as u8])));
            }
        }
        Ok(None)
    }
}

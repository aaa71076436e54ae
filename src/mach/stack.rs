use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector
///
/// Depths are counted from the top: depth 0 is the most recent push.

pub struct Stack<T> {
    underflow: fn() -> Error,
    limit: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub const DEFAULT_LIMIT: usize = 1 << 20;

    pub fn new(underflow: fn() -> Error) -> Stack<T> {
        Stack::with_limit(underflow, Stack::<T>::DEFAULT_LIMIT)
    }
    pub fn with_limit(underflow: fn() -> Error, limit: usize) -> Stack<T> {
        Stack {
            underflow,
            limit,
            vec: vec![],
        }
    }
    fn depth_index(&self, depth: i64) -> Result<usize> {
        if depth < 0 || depth as u64 >= self.vec.len() as u64 {
            Err(error!(StackIndexOutOfRange))
        } else {
            Ok(self.vec.len() - 1 - depth as usize)
        }
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    /// Bottom to top.
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.limit {
            return Err(error!(StackOverflow));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err((self.underflow)()),
        }
    }
    /// Pops `(second, first)` so binary operators read left to right.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    /// Moves the element at `depth` to the top.
    pub fn roll(&mut self, depth: i64) -> Result<()> {
        let index = self.depth_index(depth)?;
        let val = self.vec.remove(index);
        self.vec.push(val);
        Ok(())
    }
}

impl<T: Clone> Stack<T> {
    /// Pushes a copy of the element at `depth`.
    pub fn pick(&mut self, depth: i64) -> Result<()> {
        let index = self.depth_index(depth)?;
        let val = self.vec[index].clone();
        self.push(val)
    }
}

use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Fixed block of integer cells
///
/// Addresses outside the block are an error, never clamped.

pub struct Memory {
    cells: Box<[i64]>,
}

impl Memory {
    pub const SIZE: usize = 16384;

    pub fn new() -> Memory {
        Memory {
            cells: vec![0; Memory::SIZE].into_boxed_slice(),
        }
    }
    fn index(address: i64) -> Result<usize> {
        if address < 0 || address >= Memory::SIZE as i64 {
            Err(error!(AddressOutOfRange))
        } else {
            Ok(address as usize)
        }
    }
    pub fn peek(&self, address: i64) -> Result<i64> {
        Ok(self.cells[Memory::index(address)?])
    }
    pub fn poke(&mut self, address: i64, val: i64) -> Result<()> {
        self.cells[Memory::index(address)?] = val;
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Memory::new()
    }
}

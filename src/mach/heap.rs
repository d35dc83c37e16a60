use super::{Address, Cell};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Append-only instruction memory
///
/// Compiled words, constants, and variables live here, addressed by
/// 0-based index. Slots are never freed or compacted, so a dictionary
/// address stays valid for the life of the machine. A slot's contents
/// may still be overwritten in place by `!`.

pub struct Heap {
    cells: Vec<Cell>,
}

impl std::fmt::Debug for Heap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.cells)
    }
}

impl Heap {
    pub fn new() -> Heap {
        Heap { cells: vec![] }
    }
    fn max_len(&self) -> usize {
        u16::max_value() as usize
    }
    /// The address the next append will occupy. Registration reserves
    /// an entry address by reading this before appending the body.
    pub fn here(&self) -> Address {
        self.cells.len()
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn push(&mut self, cell: Cell) -> Result<()> {
        self.cells.push(cell);
        if self.cells.len() > self.max_len() {
            Err(error!(OutOfMemory; "HEAP OVERFLOW"))
        } else {
            Ok(())
        }
    }
    pub fn fetch(&self, addr: Address) -> Result<Cell> {
        match self.cells.get(addr) {
            Some(cell) => Ok(*cell),
            None => Err(error!(AddressOutOfRange)),
        }
    }
    pub fn store(&mut self, addr: Address, cell: Cell) -> Result<()> {
        match self.cells.get_mut(addr) {
            Some(slot) => {
                *slot = cell;
                Ok(())
            }
            None => Err(error!(AddressOutOfRange)),
        }
    }
}

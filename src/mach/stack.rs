use super::Cell;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Underflow checked and size limited stack of cells
///
/// Both the data stack and the return stack are instances of this type.
/// Popping or peeking past the available depth is a fatal underflow, not
/// native out-of-bounds behavior.

pub struct Stack {
    overflow_message: &'static str,
    vec: Vec<Cell>,
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl Stack {
    pub fn new(overflow_message: &'static str) -> Stack {
        Stack {
            overflow_message,
            vec: vec![],
        }
    }
    fn max_len(&self) -> usize {
        u16::max_value() as usize
    }
    fn overflow_check(&self) -> Result<()> {
        if self.vec.len() > self.max_len() {
            Err(error!(OutOfMemory; self.overflow_message))
        } else {
            Ok(())
        }
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn get(&self, idx: usize) -> Option<&Cell> {
        self.vec.get(idx)
    }
    pub fn last(&self) -> Option<&Cell> {
        self.vec.last()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.vec.iter()
    }
    /// Cell at `depth` positions below the top of the stack.
    pub fn peek(&self, depth: usize) -> Result<Cell> {
        match self.vec.len().checked_sub(depth + 1) {
            Some(idx) => Ok(self.vec[idx]),
            None => Err(error!(StackUnderflow)),
        }
    }
    pub fn push(&mut self, cell: Cell) -> Result<()> {
        self.vec.push(cell);
        self.overflow_check()
    }
    pub fn pop(&mut self) -> Result<Cell> {
        match self.vec.pop() {
            Some(cell) => Ok(cell),
            None => Err(error!(StackUnderflow)),
        }
    }
    pub fn pop_2(&mut self) -> Result<(Cell, Cell)> {
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    pub fn pop_3(&mut self) -> Result<(Cell, Cell, Cell)> {
        let three = self.pop()?;
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two, three))
    }
}

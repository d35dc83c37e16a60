use super::{Address, Value};

/// ## Threaded-code instruction set
///
/// A cell is the atomic unit of heap and stack storage. The machine has
/// no registers; every operation works on the data stack, and compiled
/// words are sequences of cells terminated by the exit primitive.
///
/// See <https://en.wikipedia.org/wiki/Threaded_code>

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Call the word whose body starts at the heap address.
    Thread(Address),
    /// Invoke the primitive table entry.
    Primitive(usize),
    /// Push this cell on the data stack.
    Literal(Value),
    /// Unconditional jump of the instruction pointer.
    Branch(Address),
    /// Pop a literal; jump only when it is zero.
    ZeroBranch(Address),
    /// Push its own heap address so `@` and `!` can reach it.
    Variable(Address),
    /// Push a fixed literal value.
    Constant(Value),
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Cell::*;
        match self {
            Thread(a) => write!(f, "THREAD({})", a),
            Primitive(n) => write!(f, "PRIM({})", n),
            Literal(v) => write!(f, "{}", v),
            Branch(a) => write!(f, "BRANCH({})", a),
            ZeroBranch(a) => write!(f, "ZBRANCH({})", a),
            Variable(a) => write!(f, "VAR({})", a),
            Constant(v) => write!(f, "CONST({})", v),
        }
    }
}

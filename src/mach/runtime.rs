use super::primitive;
use super::{Address, Cell, Dictionary, Heap, Operation, Primitive, Stack, Value};
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Heap address of the cold-start halt cell. `run_word` seeds the
/// return stack with `Thread(HALT)` so the outermost exit halts cleanly.
const HALT: Address = 0;

/// Outcome of one dispatch step. Primitives report it instead of
/// re-entering the interpreter, so program length never grows the
/// native call stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Halt,
}

/// ## The threaded-code machine
///
/// Owns the heap, the dictionary, both stacks, and the instruction
/// pointer. Registration populates the heap and dictionary before
/// execution; `execute_word` then drives the inner interpreter until
/// a halt or a fault. Console-producing primitives append to an output
/// buffer which the host drains; the machine itself never prints.

pub struct Runtime {
    heap: Heap,
    dictionary: Dictionary,
    data_stack: Stack,
    return_stack: Stack,
    pc: Address,
    output: String,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new()
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        let mut runtime = Runtime {
            heap: Heap::new(),
            dictionary: Dictionary::new(),
            data_stack: Stack::new("DATA STACK OVERFLOW"),
            return_stack: Stack::new("RETURN STACK OVERFLOW"),
            pc: 0,
            output: String::new(),
        };
        debug_assert_eq!(HALT, runtime.heap.here());
        match runtime.heap.push(Cell::Primitive(primitive::BYE)) {
            Ok(()) => runtime,
            Err(_) => unreachable!("empty heap cannot overflow"),
        }
    }

    pub fn data_stack(&self) -> &Stack {
        &self.data_stack
    }

    pub fn return_stack(&self) -> &Stack {
        &self.return_stack
    }

    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The heap address the next registration will occupy.
    pub fn here(&self) -> Address {
        self.heap.here()
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Resolves a token at registration time. Primitives shadow words,
    /// which shadow integer literals; anything else is an unresolved
    /// symbol and fails the registration that used it.
    pub fn cell_for_name(&self, name: &str) -> Result<Cell> {
        if let Some(num) = Primitive::index_of(name) {
            return Ok(Cell::Primitive(num));
        }
        if let Some(addr) = self.dictionary.get(name) {
            return Ok(Cell::Thread(addr));
        }
        if let Ok(value) = name.parse::<Value>() {
            return Ok(Cell::Literal(value));
        }
        Err(error!(UnresolvedSymbol))
    }

    /// Low-level registration: reserves the entry address, appends a
    /// `Branch` to the address immediately following it, then appends
    /// the cells verbatim. The body therefore begins at entry + 1.
    pub fn register_cells(&mut self, name: &str, cells: &[Cell]) -> Result<Address> {
        let entry = self.heap.here();
        self.heap.push(Cell::Branch(entry + 1))?;
        for cell in cells {
            self.heap.push(*cell)?;
        }
        self.dictionary.insert(name.into(), entry);
        Ok(entry)
    }

    /// Registers a word from body tokens. The name is bound before the
    /// body resolves so a word may call itself; an unresolved token
    /// unbinds it again and leaves the heap untouched.
    pub fn register_word(&mut self, name: &str, body: &[&str]) -> Result<Address> {
        let name: Rc<str> = name.into();
        self.dictionary.insert(name.clone(), self.heap.here());
        let mut cells = Vec::with_capacity(body.len());
        for token in body {
            match self.cell_for_name(token) {
                Ok(cell) => cells.push(cell),
                Err(error) => {
                    self.dictionary.remove(&name);
                    return Err(error);
                }
            }
        }
        self.register_cells(&name, &cells)
    }

    pub fn register_constant(&mut self, name: &str, value: Value) -> Result<Address> {
        let entry = self.heap.here();
        self.heap.push(Cell::Constant(value))?;
        self.heap.push(Cell::Primitive(primitive::EXIT))?;
        self.dictionary.insert(name.into(), entry);
        Ok(entry)
    }

    /// A variable is one self-addressing cell: it is its own storage,
    /// and `!` replaces it outright. The initial value is accepted and
    /// discarded, matching the historical machines this one models.
    pub fn register_variable(&mut self, name: &str, _initial_value: Value) -> Result<Address> {
        let entry = self.heap.here();
        self.heap.push(Cell::Variable(entry))?;
        self.heap.push(Cell::Primitive(primitive::EXIT))?;
        self.dictionary.insert(name.into(), entry);
        Ok(entry)
    }

    /// Runs a registered word to completion. Returns false on any
    /// fault, with the rendered error appended to the output buffer.
    pub fn execute_word(&mut self, name: &str) -> bool {
        match self.run_word(name) {
            Ok(()) => true,
            Err(error) => {
                self.output.push_str(&format!("{}\n", error));
                false
            }
        }
    }

    /// Like `execute_word` but surfaces the structured error. A fault
    /// empties both stacks; recovery is total or not at all.
    pub fn run_word(&mut self, name: &str) -> Result<()> {
        let entry = match self.dictionary.get(name) {
            Some(addr) => addr,
            None => return Err(error!(UnresolvedSymbol)),
        };
        self.return_stack.push(Cell::Thread(HALT))?;
        self.pc = entry;
        match self.run() {
            Ok(()) => Ok(()),
            Err(error) => {
                self.data_stack.clear();
                self.return_stack.clear();
                Err(error)
            }
        }
    }

    fn run(&mut self) -> Result<()> {
        loop {
            if let Signal::Halt = self.step()? {
                return Ok(());
            }
        }
    }

    /// One dispatch step: fetch the cell at the instruction pointer,
    /// advance the pointer, act on the tag.
    fn step(&mut self) -> Result<Signal> {
        let cell = self.heap.fetch(self.pc)?;
        self.pc += 1;
        match cell {
            Cell::Thread(addr) => {
                self.return_stack.push(Cell::Thread(self.pc))?;
                self.pc = addr;
            }
            Cell::Primitive(num) => return Primitive::run(num, self),
            Cell::Branch(dest) => self.pc = dest,
            Cell::ZeroBranch(dest) => {
                if self.pop_value()? == 0 {
                    self.pc = dest;
                }
            }
            Cell::Literal(_) => self.data_stack.push(cell)?,
            Cell::Constant(value) => self.data_stack.push(Cell::Literal(value))?,
            Cell::Variable(addr) => {
                let value = Runtime::value_for_address(addr)?;
                self.data_stack.push(Cell::Literal(value))?;
            }
        }
        Ok(Signal::Continue)
    }

    fn pop_value(&mut self) -> Result<Value> {
        match self.data_stack.pop()? {
            Cell::Literal(value) => Ok(value),
            _ => Err(error!(TypeMismatch)),
        }
    }

    fn pop_address(&mut self) -> Result<Address> {
        match Address::try_from(self.pop_value()?) {
            Ok(addr) => Ok(addr),
            Err(_) => Err(error!(AddressOutOfRange)),
        }
    }

    fn value_for_address(addr: Address) -> Result<Value> {
        match Value::try_from(addr) {
            Ok(value) => Ok(value),
            Err(_) => Err(error!(Overflow)),
        }
    }

    fn binary_op(&mut self, op: fn(Value, Value) -> Result<Value>) -> Result<()> {
        let b = self.pop_value()?;
        let a = self.pop_value()?;
        self.data_stack.push(Cell::Literal(op(a, b)?))
    }

    // *** Halt and exit

    pub(super) fn op_bye(&mut self) -> Result<Signal> {
        Ok(Signal::Halt)
    }

    pub(super) fn op_exit(&mut self) -> Result<Signal> {
        match self.return_stack.pop()? {
            Cell::Thread(addr) => {
                self.pc = addr;
                Ok(Signal::Continue)
            }
            _ => Err(error!(TypeMismatch; "EXIT WITHOUT CALL")),
        }
    }

    // *** Stack manipulation

    pub(super) fn op_dup(&mut self) -> Result<Signal> {
        let cell = self.data_stack.peek(0)?;
        self.data_stack.push(cell)?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_drop(&mut self) -> Result<Signal> {
        self.data_stack.pop()?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_swap(&mut self) -> Result<Signal> {
        let (a, b) = self.data_stack.pop_2()?;
        self.data_stack.push(b)?;
        self.data_stack.push(a)?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_over(&mut self) -> Result<Signal> {
        let cell = self.data_stack.peek(1)?;
        self.data_stack.push(cell)?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_nip(&mut self) -> Result<Signal> {
        let (_, b) = self.data_stack.pop_2()?;
        self.data_stack.push(b)?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_tuck(&mut self) -> Result<Signal> {
        let (a, b) = self.data_stack.pop_2()?;
        self.data_stack.push(b)?;
        self.data_stack.push(a)?;
        self.data_stack.push(b)?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_rot(&mut self) -> Result<Signal> {
        let (a, b, c) = self.data_stack.pop_3()?;
        self.data_stack.push(b)?;
        self.data_stack.push(c)?;
        self.data_stack.push(a)?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_negrot(&mut self) -> Result<Signal> {
        let (a, b, c) = self.data_stack.pop_3()?;
        self.data_stack.push(c)?;
        self.data_stack.push(a)?;
        self.data_stack.push(b)?;
        Ok(Signal::Continue)
    }

    // *** Return stack

    pub(super) fn op_to_r(&mut self) -> Result<Signal> {
        let cell = self.data_stack.pop()?;
        self.return_stack.push(cell)?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_r_from(&mut self) -> Result<Signal> {
        let cell = self.return_stack.pop()?;
        self.data_stack.push(cell)?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_r_fetch(&mut self) -> Result<Signal> {
        let cell = self.return_stack.peek(0)?;
        self.data_stack.push(cell)?;
        Ok(Signal::Continue)
    }

    // *** Arithmetic and bitwise

    pub(super) fn op_add(&mut self) -> Result<Signal> {
        self.binary_op(Operation::sum)?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_subtract(&mut self) -> Result<Signal> {
        self.binary_op(Operation::subtract)?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_multiply(&mut self) -> Result<Signal> {
        self.binary_op(Operation::multiply)?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_divide(&mut self) -> Result<Signal> {
        self.binary_op(Operation::divide)?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_star_slash(&mut self) -> Result<Signal> {
        // Pop order is c, b, a: multiply a*b, push the product, then
        // push c back and divide with the same binary helper.
        let c = self.pop_value()?;
        self.binary_op(Operation::multiply)?;
        self.data_stack.push(Cell::Literal(c))?;
        self.binary_op(Operation::divide)?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_and(&mut self) -> Result<Signal> {
        self.binary_op(Operation::bit_and)?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_or(&mut self) -> Result<Signal> {
        self.binary_op(Operation::bit_or)?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_xor(&mut self) -> Result<Signal> {
        self.binary_op(Operation::bit_xor)?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_zero_less(&mut self) -> Result<Signal> {
        let value = self.pop_value()?;
        self.data_stack
            .push(Cell::Literal(Operation::is_positive(value)))?;
        Ok(Signal::Continue)
    }

    // *** Memory

    pub(super) fn op_fetch(&mut self) -> Result<Signal> {
        let addr = self.pop_address()?;
        let cell = self.heap.fetch(addr)?;
        self.data_stack.push(cell)?;
        Ok(Signal::Continue)
    }

    pub(super) fn op_store(&mut self) -> Result<Signal> {
        let addr = self.pop_address()?;
        let cell = self.data_stack.pop()?;
        self.heap.store(addr, cell)?;
        Ok(Signal::Continue)
    }

    // *** Console output

    pub(super) fn op_dot(&mut self) -> Result<Signal> {
        let cell = self.data_stack.pop()?;
        self.output.push_str(&format!("{} ", cell));
        Ok(Signal::Continue)
    }

    pub(super) fn op_dots(&mut self) -> Result<Signal> {
        let output = &mut self.output;
        for cell in self.data_stack.iter() {
            output.push_str(&format!("{} ", cell));
        }
        Ok(Signal::Continue)
    }

    pub(super) fn op_words(&mut self) -> Result<Signal> {
        for name in Primitive::names() {
            self.output.push_str(name);
            self.output.push(' ');
        }
        let output = &mut self.output;
        for name in self.dictionary.names() {
            output.push_str(name);
            output.push(' ');
        }
        Ok(Signal::Continue)
    }

    pub(super) fn op_hello(&mut self) -> Result<Signal> {
        self.output.push_str("HELLO, WORLD\n");
        Ok(Signal::Continue)
    }
}

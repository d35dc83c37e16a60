/*!
## Rust Machine Module

This Rust module is a compiler and virtual machine for indirect-threaded
code. The compiler side registers words, constants, and variables into an
append-only heap of tagged cells; the machine side is an iterative inner
interpreter dispatching one cell at a time until a halt or a fault.

*/

pub type Address = usize;
pub type Value = i64;

mod cell;
mod dictionary;
mod heap;
mod operation;
mod primitive;
mod runtime;
mod stack;

pub use cell::Cell;
pub use dictionary::Dictionary;
pub use heap::Heap;
pub use operation::Operation;
pub use primitive::Primitive;
pub use runtime::Runtime;
pub use runtime::Signal;
pub use stack::Stack;

#[cfg(test)]
mod tests;

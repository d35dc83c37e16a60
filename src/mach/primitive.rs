use super::{Runtime, Signal};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

type Native = fn(&mut Runtime) -> Result<Signal>;

/// ## Native operation table
///
/// Primitives are invoked by table index from `Cell::Primitive`. The
/// table is fixed for the life of the process and its names resolve
/// ahead of user words, which resolve ahead of integer literals.

pub struct Primitive {
    name: &'static str,
    native: Native,
}

// The cold-start cell at heap address 0 needs `bye`, and the
// constant/variable epilogue needs the exit. Table order fixes both.
pub(super) const BYE: usize = 0;
pub(super) const EXIT: usize = 1;

const TABLE: &[Primitive] = &[
    Primitive { name: "bye", native: Runtime::op_bye },
    Primitive { name: ";", native: Runtime::op_exit },
    Primitive { name: "dup", native: Runtime::op_dup },
    Primitive { name: "drop", native: Runtime::op_drop },
    Primitive { name: "swap", native: Runtime::op_swap },
    Primitive { name: "over", native: Runtime::op_over },
    Primitive { name: "nip", native: Runtime::op_nip },
    Primitive { name: "tuck", native: Runtime::op_tuck },
    Primitive { name: "rot", native: Runtime::op_rot },
    Primitive { name: "negrot", native: Runtime::op_negrot },
    Primitive { name: ">r", native: Runtime::op_to_r },
    Primitive { name: "r>", native: Runtime::op_r_from },
    Primitive { name: "r@", native: Runtime::op_r_fetch },
    Primitive { name: "+", native: Runtime::op_add },
    Primitive { name: "-", native: Runtime::op_subtract },
    Primitive { name: "*", native: Runtime::op_multiply },
    Primitive { name: "/", native: Runtime::op_divide },
    Primitive { name: "*/", native: Runtime::op_star_slash },
    Primitive { name: "and", native: Runtime::op_and },
    Primitive { name: "or", native: Runtime::op_or },
    Primitive { name: "xor", native: Runtime::op_xor },
    Primitive { name: "0<", native: Runtime::op_zero_less },
    Primitive { name: "@", native: Runtime::op_fetch },
    Primitive { name: "!", native: Runtime::op_store },
    Primitive { name: ".", native: Runtime::op_dot },
    Primitive { name: "dots", native: Runtime::op_dots },
    Primitive { name: "words", native: Runtime::op_words },
    Primitive { name: "hello", native: Runtime::op_hello },
];

impl Primitive {
    pub fn index_of(name: &str) -> Option<usize> {
        TABLE.iter().position(|p| p.name == name)
    }

    pub fn name_of(num: usize) -> Option<&'static str> {
        TABLE.get(num).map(|p| p.name)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        TABLE.iter().map(|p| p.name)
    }

    pub fn len() -> usize {
        TABLE.len()
    }

    pub fn run(num: usize, runtime: &mut Runtime) -> Result<Signal> {
        match TABLE.get(num) {
            Some(p) => (p.native)(runtime),
            None => Err(error!(InternalError; "UNKNOWN PRIMITIVE")),
        }
    }
}

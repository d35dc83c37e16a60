use super::Value;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Pure integer operations
///
/// Shared by the binary arithmetic primitives, which all pop `b`, then
/// `a`, and push `a op b`. Arithmetic is checked; wraparound is an
/// OVERFLOW fault rather than a silent wrap.

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Value, rhs: Value) -> Result<Value> {
        match lhs.checked_add(rhs) {
            Some(v) => Ok(v),
            None => Err(error!(Overflow)),
        }
    }

    pub fn subtract(lhs: Value, rhs: Value) -> Result<Value> {
        match lhs.checked_sub(rhs) {
            Some(v) => Ok(v),
            None => Err(error!(Overflow)),
        }
    }

    pub fn multiply(lhs: Value, rhs: Value) -> Result<Value> {
        match lhs.checked_mul(rhs) {
            Some(v) => Ok(v),
            None => Err(error!(Overflow)),
        }
    }

    /// Truncates toward zero.
    pub fn divide(lhs: Value, rhs: Value) -> Result<Value> {
        match lhs.checked_div(rhs) {
            Some(v) => Ok(v),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }

    pub fn bit_and(lhs: Value, rhs: Value) -> Result<Value> {
        Ok(lhs & rhs)
    }

    pub fn bit_or(lhs: Value, rhs: Value) -> Result<Value> {
        Ok(lhs | rhs)
    }

    pub fn bit_xor(lhs: Value, rhs: Value) -> Result<Value> {
        Ok(lhs ^ rhs)
    }

    /// The historical `0<` test. The name suggests "less than zero" but
    /// the behavior has always been "is strictly positive"; both are
    /// kept as-is.
    pub fn is_positive(val: Value) -> Value {
        if val > 0 {
            1
        } else {
            0
        }
    }
}

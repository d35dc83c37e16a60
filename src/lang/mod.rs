/*!
# Rust Language Module

This Rust module provides error reporting for the threaded-code machine.

*/

#[macro_use]
mod error;

pub use error::Error;
pub use error::ErrorCode;

//! # Forth Machine
//!
//! A minimal indirect-threaded virtual machine in the style of classic
//! Forth execution engines. Words are registered programmatically as
//! lists of tokens, compiled into an append-only heap of tagged cells,
//! and run by an iterative inner interpreter over two explicit stacks.
//!
//! ```
//! use forth::mach::Runtime;
//!
//! let mut runtime = Runtime::new();
//! runtime.register_word("outnum", &["dup", ".", ";"]).unwrap();
//! runtime
//!     .register_word("testmath", &["1", "outnum", "2", "outnum", "+", ".", ";"])
//!     .unwrap();
//! assert!(runtime.execute_word("testmath"));
//! assert_eq!(runtime.take_output().trim_end(), "1 1 2 2 3");
//! ```

pub mod lang;
pub mod mach;

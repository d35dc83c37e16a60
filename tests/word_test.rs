mod common;
use common::*;
use forth::lang::ErrorCode;
use forth::mach::{Cell, Runtime};

#[test]
fn test_demo_program() {
    let mut r = demo();
    assert_eq!(exec(&mut r, "testmath"), "1 1 2 2 3");
}

#[test]
fn test_simple_sum() {
    let mut r = Runtime::default();
    r.register_word("sum", &["1", "2", "+", ".", ";"]).unwrap();
    assert_eq!(exec(&mut r, "sum"), "3");
}

#[test]
fn test_primitives_shadow_words() {
    let mut r = Runtime::default();
    r.register_word("dup", &["99", ".", ";"]).unwrap();
    // The token still resolves to the primitive, so "7 dup" duplicates.
    assert!(matches!(r.cell_for_name("dup").unwrap(), Cell::Primitive(_)));
    r.register_word("w", &["7", "dup", "+", ".", ";"]).unwrap();
    assert_eq!(exec(&mut r, "w"), "14");
}

#[test]
fn test_words_shadow_literals() {
    let mut r = Runtime::default();
    r.register_word("10", &["99", ".", ";"]).unwrap();
    assert!(matches!(r.cell_for_name("10").unwrap(), Cell::Thread(_)));
    r.register_word("w", &["10", ";"]).unwrap();
    assert_eq!(exec(&mut r, "w"), "99");
}

#[test]
fn test_redefinition_rebinds() {
    let mut r = Runtime::default();
    r.register_word("w", &["1", ".", ";"]).unwrap();
    r.register_word("w", &["2", ".", ";"]).unwrap();
    assert_eq!(exec(&mut r, "w"), "2");
}

#[test]
fn test_constant_and_variable_registration() {
    let mut r = Runtime::default();
    r.register_constant("limit", 120).unwrap();
    let addr = r.register_variable("count", 0).unwrap();
    r.register_word("show", &["limit", ".", "count", ".", ";"]).unwrap();
    assert_eq!(exec(&mut r, "show"), format!("120 {}", addr));
}

#[test]
fn test_self_call_resolves_and_overflows() {
    let mut r = Runtime::default();
    let entry = r.here();
    r.register_word("again", &["again", ";"]).unwrap();
    assert!(matches!(r.cell_for_name("again").unwrap(), Cell::Thread(e) if e == entry));
    // Unbounded recursion is caught by the return stack limit, not the
    // native call stack.
    assert_eq!(
        r.run_word("again").unwrap_err().code(),
        ErrorCode::OutOfMemory
    );
}

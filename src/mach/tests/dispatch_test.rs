use super::{data_values, run};
use crate::lang::ErrorCode;
use crate::mach::{primitive, Cell, Primitive, Runtime};

#[test]
fn test_table_order() {
    assert_eq!(Primitive::index_of("bye"), Some(primitive::BYE));
    assert_eq!(Primitive::index_of(";"), Some(primitive::EXIT));
    assert_eq!(Primitive::name_of(primitive::BYE), Some("bye"));
    assert_eq!(Primitive::index_of("frobnicate"), None);
}

#[test]
fn test_cold_start_cell() {
    let runtime = Runtime::default();
    assert_eq!(runtime.heap().fetch(0).unwrap(), Cell::Primitive(primitive::BYE));
}

#[test]
fn test_word_prologue_branch() {
    let mut runtime = Runtime::default();
    let entry = runtime.register_word("nop", &[";"]).unwrap();
    assert_eq!(runtime.heap().fetch(entry).unwrap(), Cell::Branch(entry + 1));
    assert!(runtime.execute_word("nop"));
    assert!(runtime.data_stack().is_empty());
    assert!(runtime.return_stack().is_empty());
}

#[test]
fn test_literal_dispatch() {
    let mut runtime = Runtime::default();
    runtime.register_word("push2", &["1", "2", ";"]).unwrap();
    assert!(runtime.execute_word("push2"));
    assert_eq!(data_values(&runtime), vec![1, 2]);
}

#[test]
fn test_constant_and_variable_dispatch() {
    let mut runtime = Runtime::default();
    let addr = runtime.register_variable("pos", 0).unwrap();
    runtime.register_constant("ten", 10).unwrap();
    runtime.register_word("both", &["ten", "pos", ";"]).unwrap();
    assert!(runtime.execute_word("both"));
    assert_eq!(data_values(&runtime), vec![10, addr as i64]);
}

#[test]
fn test_zero_branch_jumps_on_zero() {
    let mut runtime = Runtime::default();
    let exit = runtime.cell_for_name(";").unwrap();
    let entry = runtime.here();
    // Body begins at entry + 1: zero takes the jump to 9, nonzero
    // falls through to 7.
    runtime
        .register_cells(
            "choose",
            &[
                Cell::ZeroBranch(entry + 4),
                Cell::Literal(7),
                exit,
                Cell::Literal(9),
                exit,
            ],
        )
        .unwrap();
    runtime.register_word("zero", &["0", "choose", ";"]).unwrap();
    runtime.register_word("one", &["1", "choose", ";"]).unwrap();
    assert!(runtime.execute_word("zero"));
    assert_eq!(data_values(&runtime), vec![9]);
    assert!(runtime.execute_word("one"));
    assert_eq!(data_values(&runtime), vec![9, 7]);
}

#[test]
fn test_zero_branch_requires_literal() {
    let mut runtime = Runtime::default();
    let r_from = runtime.cell_for_name("r>").unwrap();
    let entry = runtime.here();
    runtime
        .register_cells("bad", &[r_from, Cell::ZeroBranch(entry + 1)])
        .unwrap();
    let error = runtime.run_word("bad").unwrap_err();
    assert_eq!(error.code(), ErrorCode::TypeMismatch);
}

#[test]
fn test_unconditional_branch() {
    let mut runtime = Runtime::default();
    let exit = runtime.cell_for_name(";").unwrap();
    let entry = runtime.here();
    runtime
        .register_cells(
            "skip",
            &[Cell::Branch(entry + 3), Cell::Literal(111), Cell::Literal(222), exit],
        )
        .unwrap();
    assert!(runtime.execute_word("skip"));
    assert_eq!(data_values(&runtime), vec![222]);
}

#[test]
fn test_thread_call_and_return() {
    let mut runtime = Runtime::default();
    runtime.register_word("outnum", &["dup", ".", ";"]).unwrap();
    runtime
        .register_word("testmath", &["1", "outnum", "2", "outnum", "+", ".", ";"])
        .unwrap();
    assert_eq!(run(&mut runtime, "testmath"), "1 1 2 2 3");
    assert!(runtime.return_stack().is_empty());
}

#[test]
fn test_bye_halts_without_exit() {
    let mut runtime = Runtime::default();
    runtime.register_word("quit", &["5", "bye"]).unwrap();
    assert!(runtime.execute_word("quit"));
    assert_eq!(data_values(&runtime), vec![5]);
}

#[test]
fn test_fault_empties_both_stacks() {
    let mut runtime = Runtime::default();
    runtime.register_word("oops", &["1", "2", "+", "+", ";"]).unwrap();
    let error = runtime.run_word("oops").unwrap_err();
    assert_eq!(error.code(), ErrorCode::StackUnderflow);
    assert!(runtime.data_stack().is_empty());
    assert!(runtime.return_stack().is_empty());
}

#[test]
fn test_execute_word_reports_fault() {
    let mut runtime = Runtime::default();
    runtime.register_word("oops", &["+", ";"]).unwrap();
    assert!(!runtime.execute_word("oops"));
    assert!(runtime.take_output().contains("STACK UNDERFLOW"));
}

#[test]
fn test_execute_unknown_word() {
    let mut runtime = Runtime::default();
    assert_eq!(
        runtime.run_word("missing").unwrap_err().code(),
        ErrorCode::UnresolvedSymbol
    );
    assert!(!runtime.execute_word("missing"));
}

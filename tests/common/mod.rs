use forth::mach::Runtime;

pub fn exec(runtime: &mut Runtime, name: &str) -> String {
    assert!(runtime.execute_word(name), "{}", runtime.output());
    runtime.take_output().trim_end().to_string()
}

/// The classic demo program: each `outnum` duplicates and prints its
/// operand before `+` consumes it, then the sum is printed.
pub fn demo() -> Runtime {
    let mut runtime = Runtime::default();
    runtime.register_word("outnum", &["dup", ".", ";"]).unwrap();
    runtime
        .register_word("testmath", &["1", "outnum", "2", "outnum", "+", ".", ";"])
        .unwrap();
    runtime
}

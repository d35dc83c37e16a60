use super::{Cell, Runtime, Value};

mod dispatch_test;

fn run(runtime: &mut Runtime, name: &str) -> String {
    assert!(runtime.execute_word(name), "{}", runtime.output());
    runtime.take_output().trim_end().to_string()
}

fn data_values(runtime: &Runtime) -> Vec<Value> {
    runtime
        .data_stack()
        .iter()
        .map(|cell| match cell {
            Cell::Literal(value) => *value,
            other => panic!("unexpected cell {}", other),
        })
        .collect()
}

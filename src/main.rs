//! # Forth Machine
//!
//! A demonstration driver: registers a few words and runs one program.
//!

use ansi_term::Style;
use forth::mach::Runtime;

fn main() {
    let mut runtime = Runtime::new();
    let words: &[(&str, &[&str])] = &[
        ("outnum", &["dup", ".", ";"]),
        ("testmath", &["hello", "1", "outnum", "2", "outnum", "+", ".", ";"]),
    ];
    for (name, body) in words {
        if let Err(error) = runtime.register_word(name, body) {
            eprintln!("{}", Style::new().bold().paint(format!("{}", error)));
            std::process::exit(1);
        }
    }
    let ok = runtime.execute_word("testmath");
    let output = runtime.take_output();
    if ok {
        println!("{}", output.trim_end());
    } else {
        eprintln!("{}", Style::new().bold().paint(output.trim_end().to_string()));
        std::process::exit(1);
    }
}

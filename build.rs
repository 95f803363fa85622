//! Build script to embed the default word lists
//!
//! Turns each `data/*.txt` list into a generated Rust source file holding a
//! `&[&str]` constant and its length.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// (input file, generated file, constant name, doc line)
const LISTS: [(&str, &str, &str, &str); 2] = [
    (
        "data/solutions.txt",
        "solutions.rs",
        "SOLUTIONS",
        "Words that may be chosen as the hidden solution",
    ),
    (
        "data/guesses.txt",
        "guesses.rs",
        "GUESSES",
        "Additional acceptable guesses beyond the solution pool",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");

    for (input, output, const_name, doc) in LISTS {
        println!("cargo:rerun-if-changed={input}");

        let content =
            fs::read_to_string(input).unwrap_or_else(|e| panic!("Failed to read {input}: {e}"));
        let source = render_list(&content, const_name, doc);

        let path = Path::new(&out_dir).join(output);
        fs::write(&path, source)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));
    }
}

fn render_list(content: &str, const_name: &str, doc: &str) -> String {
    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_ascii_lowercase())
        .filter(|line| !line.is_empty())
        .collect();

    let mut source = format!("// Generated from the word list data\n\n/// {doc}\n");
    writeln!(source, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(source, "    {word:?},").unwrap();
    }
    writeln!(source, "];\n").unwrap();
    writeln!(source, "/// Number of words in {const_name}").unwrap();
    writeln!(
        source,
        "pub const {const_name}_COUNT: usize = {};",
        words.len()
    )
    .unwrap();
    source
}

//! Build script for the embedded word lists
//!
//! Checks `data/answers.txt` and `data/guesses.txt` and writes both into one generated
//! source file of `&str` constants.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

const LISTS: [(&str, &str, &str); 2] = [
    ("data/answers.txt", "ANSWERS", "Answer words eligible as secrets"),
    ("data/guesses.txt", "GUESSES", "Extra guess-only words"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let mut source = String::from("// Generated by build.rs from data/*.txt\n");

    for (input_path, const_name, doc) in LISTS {
        println!("cargo:rerun-if-changed={input_path}");
        let content = fs::read_to_string(input_path)
            .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));
        append_list(&mut source, input_path, const_name, doc, &content);
    }

    let output_path = Path::new(&out_dir).join("word_lists.rs");
    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}

fn append_list(source: &mut String, input_path: &str, const_name: &str, doc: &str, content: &str) {
    let words: Vec<&str> = content.split_whitespace().collect();
    for (index, word) in words.iter().enumerate() {
        assert!(
            word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase()),
            "{input_path}: token {index} ({word:?}) is not a lowercase 5-letter word"
        );
    }

    let _ = writeln!(source, "\n/// {doc} ({} words)", words.len());
    let _ = writeln!(source, "pub const {const_name}: &[&str] = &[");
    for word in &words {
        let _ = writeln!(source, "    \"{word}\",");
    }
    let _ = writeln!(source, "];\n");
    let _ = writeln!(source, "/// Number of words in {const_name}");
    let _ = writeln!(source, "pub const {const_name}_COUNT: usize = {};", words.len());
}

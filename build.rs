//! Build script to generate the embedded sample puzzle
//!
//! Reads the puzzle file and generates Rust source code with a const array of groups.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_puzzle(
        "data/sample_puzzle.txt",
        &Path::new(&out_dir).join("sample_puzzle.rs"),
        "SAMPLE_GROUPS",
        "Sample puzzle for offline play (4 groups of 4 words)",
    );

    // Rebuild if the puzzle changes
    println!("cargo:rerun-if-changed=data/sample_puzzle.txt");
}

fn generate_puzzle(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let groups: Vec<(&str, Vec<&str>)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (name, words) = line
                .rsplit_once(':')
                .unwrap_or_else(|| panic!("Missing ':' in puzzle line: {line}"));
            let words: Vec<&str> = words.split(',').map(str::trim).collect();
            assert!(words.len() == 4, "Group '{name}' must have 4 words");
            (name.trim(), words)
        })
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated puzzle").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, [&str; 4])] = &[").unwrap();

    for (name, words) in &groups {
        let quoted: Vec<String> = words.iter().map(|w| format!("{w:?}")).collect();
        writeln!(output, "    ({name:?}, [{}]),", quoted.join(", ")).unwrap();
    }

    writeln!(output, "];").unwrap();
}

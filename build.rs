//! Build script that embeds the bundled word lists
//!
//! Each list under `data/` becomes a `const &[&str]` plus a `_COUNT` constant
//! in `OUT_DIR`, pulled into the crate with `include!`.

use std::collections::BTreeSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

struct EmbeddedList {
    source: &'static str,
    generated: &'static str,
    const_name: &'static str,
    doc: &'static str,
    /// Dictionary lookups don't care about order, so duplicates can go
    dedupe: bool,
}

const LISTS: &[EmbeddedList] = &[
    EmbeddedList {
        source: "data/start.txt",
        generated: "start.rs",
        const_name: "ROOT_WORDS",
        doc: "Root words a round can be started with",
        dedupe: false,
    },
    EmbeddedList {
        source: "data/dictionary.txt",
        generated: "dictionary.rs",
        const_name: "DICTIONARY",
        doc: "English dictionary of accepted submissions",
        dedupe: true,
    },
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");

    for list in LISTS {
        println!("cargo:rerun-if-changed={}", list.source);
        let words = read_words(list.source, list.dedupe);
        let code = render(list, &words);
        let target = Path::new(&out_dir).join(list.generated);
        fs::write(&target, code)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", target.display()));
    }
}

fn read_words(path: &str, dedupe: bool) -> Vec<String> {
    let content =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));

    let words = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty());

    let words: Vec<String> = if dedupe {
        words.collect::<BTreeSet<_>>().into_iter().collect()
    } else {
        words.collect()
    };

    if let Some(bad) = words.iter().find(|w| w.contains(['"', '\\'])) {
        panic!("{path}: entry {bad:?} cannot be embedded");
    }
    words
}

fn render(list: &EmbeddedList, words: &[String]) -> String {
    let mut code = String::new();
    let count = words.len();

    // Writing to a String cannot fail
    let _ = writeln!(code, "// Generated from {} ({count} words)\n", list.source);
    let _ = writeln!(code, "/// {}", list.doc);
    let _ = writeln!(code, "pub const {}: &[&str] = &[", list.const_name);
    for word in words {
        let _ = writeln!(code, "    \"{word}\",");
    }
    let _ = writeln!(code, "];\n");
    let _ = writeln!(code, "/// Number of words in {}", list.const_name);
    let _ = writeln!(code, "pub const {}_COUNT: usize = {count};", list.const_name);
    code
}

// Prints every dictionary word with a medial dorsal-labial cluster, the
// break.fast and bag.pipe pattern, one line per word.
use std::env;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process;

use syllabify_core::clusters::has_dorsal_labial_juncture;
use syllabify_core::persistence;
use syllabify_core::syllabify;

const DEFAULT_DICTIONARY_PATH: &str = "cmudict.0.7a";

fn main() -> io::Result<()> {
    let dict_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DICTIONARY_PATH.to_string());
    let dictionary = match persistence::load_or_parse(Path::new(&dict_path)) {
        Ok(dict) => dict,
        Err(e) => {
            eprintln!("[ERROR] Could not load dictionary '{}': {}", dict_path, e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for entry in dictionary.entries() {
        match syllabify(&entry.pron, true) {
            Ok(syls) => {
                if has_dorsal_labial_juncture(&syls) {
                    writeln!(out, "{}", entry.word)?;
                }
            }
            Err(e) => eprintln!("[WARN] Skipping {}: {}", entry.word, e),
        }
    }
    out.flush()
}

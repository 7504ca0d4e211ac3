// src/dictionary.rs
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::Phoneme;

/// Lines opening with this are comments or header noise in cmudict files.
const COMMENT_MARKER: char = ';';
/// cmudict separates the word from its pronunciation with two spaces.
const FIELD_SEPARATOR: &str = "  ";

/// One `WORD  PH PH ...` line of a pronouncing dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The headword verbatim, including variant suffixes like "SOW(2)".
    pub word: String,
    /// The ARPABET pronunciation.
    pub pron: Vec<Phoneme>,
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("cannot read dictionary: {0}")]
    Io(#[from] std::io::Error),

    /// The line exists but is not `WORD  PRONUNCIATION`.
    #[error("line {line_no} is not a dictionary entry: {text:?}")]
    BadLine { line_no: usize, text: String },

    #[error("cannot decode dictionary cache: {0}")]
    Cache(#[from] bincode::Error),
}

/// An in-memory pronouncing dictionary. Entries keep file order; a word
/// index on top gives O(1) exact lookups.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Dictionary {
    /// Builds the dictionary and its lookup index from parsed entries.
    /// If a headword repeats, the later entry wins the index slot.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.word.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Reads a cmudict-format text file from disk.
    pub fn from_file(path: &Path) -> Result<Self, DictionaryError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses cmudict-format text: one `WORD  PH PH ...` entry per line,
    /// with `;`-led comment lines and blank lines skipped. A line without
    /// the two-space separator, or without any phonemes behind it, stops
    /// the parse with its line number.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut entries = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end();
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }
            let (word, rest) = match line.split_once(FIELD_SEPARATOR) {
                Some(parts) => parts,
                None => {
                    return Err(DictionaryError::BadLine {
                        line_no: idx + 1,
                        text: line.to_string(),
                    })
                }
            };
            let pron: Vec<Phoneme> = rest.split_whitespace().map(str::to_string).collect();
            if word.is_empty() || pron.is_empty() {
                return Err(DictionaryError::BadLine {
                    line_no: idx + 1,
                    text: line.to_string(),
                });
            }
            entries.push(Entry {
                word: word.to_string(),
                pron,
            });
        }
        Ok(Self::from_entries(entries))
    }

    /// Exact-headword lookup. cmudict headwords are uppercase, so callers
    /// normally uppercase user input first.
    pub fn lookup(&self, word: &str) -> Option<&Entry> {
        self.index.get(word).map(|&i| &self.entries[i])
    }

    /// All entries in file order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

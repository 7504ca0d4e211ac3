// File: src/persistence.rs
use std::fs::{self, File};
use std::io;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::dictionary::{Dictionary, DictionaryError, Entry};

/// Saves the parsed entry list as a compact binary cache. The write goes
/// through a temp file in the same directory and is renamed into place, so
/// a crash never leaves a half-written cache behind.
pub fn save_to_disk(dictionary: &Dictionary, path: &Path) -> Result<(), DictionaryError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, dictionary.entries())?;

    temp_file.persist(path).map_err(io::Error::from)?;
    Ok(())
}

/// Loads a dictionary from a binary cache written by `save_to_disk`. The
/// lookup index is rebuilt here rather than stored.
pub fn load_from_disk(path: &Path) -> Result<Dictionary, DictionaryError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let entries: Vec<Entry> = bincode::deserialize_from(reader)?;
    Ok(Dictionary::from_entries(entries))
}

/// Loads a dictionary text file through its sidecar cache.
///
/// A fresh cache (present and no older than the text) is used directly; a
/// missing, stale or unreadable cache falls back to parsing the text, after
/// which the cache is rewritten. Cache write failures only cost the speedup,
/// so they are reported on stderr and otherwise ignored.
pub fn load_or_parse(text_path: &Path) -> Result<Dictionary, DictionaryError> {
    let cache = cache_path(text_path);
    if cache_is_fresh(text_path, &cache) {
        if let Ok(dictionary) = load_from_disk(&cache) {
            return Ok(dictionary);
        }
    }
    let dictionary = Dictionary::from_file(text_path)?;
    if let Err(e) = save_to_disk(&dictionary, &cache) {
        eprintln!(
            "[WARN] could not write dictionary cache '{}': {}",
            cache.display(),
            e
        );
    }
    Ok(dictionary)
}

/// The sidecar cache lives next to the text file as `<name>.bin`, appended
/// rather than substituted so "cmudict.0.7a" maps to "cmudict.0.7a.bin".
fn cache_path(text_path: &Path) -> PathBuf {
    let mut os = text_path.as_os_str().to_os_string();
    os.push(".bin");
    PathBuf::from(os)
}

/// A cache is fresh when both files exist and the cache is not older than
/// the text it was built from.
fn cache_is_fresh(text_path: &Path, cache: &Path) -> bool {
    let text_mtime = match fs::metadata(text_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(cache_mtime) => cache_mtime >= text_mtime,
        Err(_) => false,
    }
}

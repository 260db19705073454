// src/emit/json.rs
// =============================================================================
// JSON output for crawl results.
//
// Two shapes:
// - crawl mode:       [ { "word": ..., "entries": [...] }, ... ]
// - single-word mode:   { "word": ..., "entries": [...] }
//
// Output is pretty-printed (2-space indent), UTF-8, and keeps non-ASCII
// characters as-is (serde_json never escapes them), so IPA like "θɪˈsɔː.rəs"
// stays readable.
//
// Writing is atomic: we write a temp file in the same directory and rename
// it over the destination. If anything fails, the destination is untouched.
//
// Nothing to write (empty corpus or no record) is not an error: we log a
// warning, create no file, and return EmitOutcome::Skipped.
// =============================================================================

use crate::error::PersistenceError;
use crate::model::WordRecord;
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// What the emitter did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    /// Output written to this path
    Written(PathBuf),
    /// Nothing to save; no file was created
    Skipped,
}

// Writes a whole crawl corpus as a JSON array
pub fn emit_corpus(corpus: &[WordRecord], path: &Path) -> Result<EmitOutcome, PersistenceError> {
    if corpus.is_empty() {
        warn!(path = %path.display(), "corpus is empty, nothing to save");
        return Ok(EmitOutcome::Skipped);
    }

    write_json_atomic(corpus, path)?;
    info!(path = %path.display(), records = corpus.len(), "saved corpus");
    Ok(EmitOutcome::Written(path.to_path_buf()))
}

// Writes one word's record as a JSON object
pub fn emit_record(
    record: Option<&WordRecord>,
    path: &Path,
) -> Result<EmitOutcome, PersistenceError> {
    let Some(record) = record else {
        warn!(path = %path.display(), "no data to save");
        return Ok(EmitOutcome::Skipped);
    };

    write_json_atomic(record, path)?;
    info!(path = %path.display(), word = %record.word, "saved word");
    Ok(EmitOutcome::Written(path.to_path_buf()))
}

// Output file for a seed word: <dir>/<seed>_data.json
//
// Path separators in the word are replaced so the file always lands in `dir`.
pub fn output_path(dir: &Path, seed: &str) -> PathBuf {
    let stem: String = seed
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    dir.join(format!("{stem}_data.json"))
}

fn write_json_atomic<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), PersistenceError> {
    let io_error = |source: std::io::Error| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_error)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n").map_err(io_error)?;
        writer.flush().map_err(io_error)?;
    }

    tmp.persist(path).map_err(|e| io_error(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entry, PronunciationPair};
    use std::fs;

    fn thesaurus() -> WordRecord {
        WordRecord::new(
            "thesaurus",
            vec![Entry {
                headword: Some("thesaurus".to_string()),
                part_of_speech: Some("noun".to_string()),
                pronunciation: PronunciationPair {
                    uk: "θɪˈsɔː.rəs".to_string(),
                    us: String::new(),
                },
                definitions: vec!["a type of dictionary".to_string()],
                examples: vec![],
            }],
        )
    }

    #[test]
    fn test_empty_corpus_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = output_path(dir.path(), "cat");

        let outcome = emit_corpus(&[], &path).unwrap();

        assert_eq!(outcome, EmitOutcome::Skipped);
        assert!(!path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_record_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = output_path(dir.path(), "xyzzy");
        assert_eq!(emit_record(None, &path).unwrap(), EmitOutcome::Skipped);
        assert!(!path.exists());
    }

    #[test]
    fn test_corpus_written_as_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = output_path(dir.path(), "thesaurus");
        let corpus = vec![thesaurus(), WordRecord::new("dictionary", vec![])];

        let outcome = emit_corpus(&corpus, &path).unwrap();
        assert_eq!(outcome, EmitOutcome::Written(path.clone()));

        let text = fs::read_to_string(&path).unwrap();
        let parsed: Vec<WordRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, corpus);
    }

    #[test]
    fn test_record_written_as_object_with_readable_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let path = output_path(dir.path(), "thesaurus");

        emit_record(Some(&thesaurus()), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"word\": \"thesaurus\""));
        assert!(text.contains("θɪˈsɔː.rəs"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = output_path(dir.path(), "thesaurus");
        fs::write(&path, "old").unwrap();

        emit_record(Some(&thesaurus()), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["word"], "thesaurus");
    }

    #[test]
    fn test_unwritable_destination_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("cat_data.json");

        let result = emit_corpus(&[thesaurus()], &path);

        assert!(matches!(result, Err(PersistenceError::Io { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_output_path_keeps_file_in_dir() {
        let path = output_path(Path::new("out"), "and/or");
        assert_eq!(path, Path::new("out").join("and_or_data.json"));
    }
}

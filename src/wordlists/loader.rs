//! Word list loading utilities
//!
//! Builds dictionaries from files or string slices.

use crate::core::{Dictionary, Word};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Blank and invalid lines are skipped; duplicates keep their first position.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no valid word.
///
/// # Examples
/// ```no_run
/// use wordle_host::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    let dictionary = parse_words(&content)
        .with_context(|| format!("Word list {} has no usable words", path.display()))?;
    log::info!("Loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

/// Parse newline-separated words into a dictionary
///
/// # Errors
///
/// Returns `GameError::EmptyDictionary` if no line is a valid word.
pub fn parse_words(content: &str) -> Result<Dictionary, crate::error::GameError> {
    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        log::warn!("Skipped {skipped} invalid entries in word list");
    }
    Dictionary::new(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use std::io::Write;

    #[test]
    fn parse_words_skips_invalid_and_blank_lines() {
        let dictionary = parse_words("crane\n\n  slate  \ntoolong\nab1de\nIRATE\n").unwrap();
        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_words_deduplicates() {
        let dictionary = parse_words("crane\nslate\ncrane\n").unwrap();
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn parse_words_empty() {
        assert_eq!(parse_words("").unwrap_err(), GameError::EmptyDictionary);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("wordle_host_{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "crane\nslate\ntrace").unwrap();
        }

        let dictionary = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.words()[2].text(), "trace");
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }
}

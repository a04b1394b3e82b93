//! Dictionary file loading
//!
//! Reads a UTF-8 text file of whitespace/punctuation-delimited tokens and
//! returns the raw word tokens. Screening and annotation happen later, in
//! the table builder; a missing or unreadable file is a fatal startup error
//! propagated to the caller.

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load raw word tokens from a dictionary file
///
/// Tokens are split on every non-alphanumeric boundary, so prose, word
/// lists and CSV-ish dumps all work. Duplicates are dropped, first
/// occurrence wins, making the result deterministic for a given file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use termo_solver::wordlists::loader::load_tokens;
///
/// let tokens = load_tokens("palavras.txt").unwrap();
/// println!("Loaded {} raw tokens", tokens.len());
/// ```
pub fn load_tokens<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(tokenize(&content))
}

/// Split text into deduplicated word tokens
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .filter(|token| seen.insert(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_whitespace_and_punctuation() {
        let tokens = tokenize("mundo, porta; radar\nfonte\tcanal");
        assert_eq!(tokens, ["mundo", "porta", "radar", "fonte", "canal"]);
    }

    #[test]
    fn tokenize_dedups_keeping_first() {
        let tokens = tokenize("porta mundo porta radar mundo");
        assert_eq!(tokens, ["porta", "mundo", "radar"]);
    }

    #[test]
    fn tokenize_keeps_accented_tokens() {
        // Accented words survive tokenization; the normalizer screens them
        let tokens = tokenize("avião mundo");
        assert_eq!(tokens, ["avião", "mundo"]);
    }

    #[test]
    fn tokenize_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t ,;").is_empty());
    }

    #[test]
    fn load_tokens_missing_file_is_an_error() {
        let result = load_tokens("/definitely/not/a/real/path/palavras.txt");
        assert!(result.is_err());
    }
}

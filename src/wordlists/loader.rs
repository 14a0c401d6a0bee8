//! Word list loading utilities
//!
//! Word lists are whitespace-separated tokens. Tokens are lowercased and kept in
//! order, duplicates included; deciding which words are usable is the codec's job.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use wordle_cover::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words5.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    load_from_reader(File::open(path)?)
}

/// Load words from any reader
///
/// # Errors
///
/// Returns an I/O error if reading fails or the input is not valid UTF-8.
pub fn load_from_reader<R: Read>(mut reader: R) -> io::Result<Vec<String>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(words_from_str(&content))
}

/// Split text into lowercase words
///
/// # Examples
/// ```
/// use wordle_cover::wordlists::loader::words_from_str;
///
/// assert_eq!(words_from_str("Crane slate\n\tcrane"), vec!["crane", "slate", "crane"]);
/// ```
#[must_use]
pub fn words_from_str(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn splits_on_any_whitespace() {
        let words = words_from_str("crane slate\nirate\r\n\tgrate  ");
        assert_eq!(words, vec!["crane", "slate", "irate", "grate"]);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        let words = words_from_str("tears stare tears");
        assert_eq!(words, vec!["tears", "stare", "tears"]);
    }

    #[test]
    fn lowercases_but_does_not_validate() {
        let words = words_from_str("CRANE toolong ab3");
        assert_eq!(words, vec!["crane", "toolong", "ab3"]);
    }

    #[test]
    fn empty_input() {
        assert!(words_from_str("").is_empty());
        assert!(words_from_str(" \n\t ").is_empty());
    }

    #[test]
    fn reads_from_reader() {
        let words = load_from_reader(Cursor::new("fjord\ngucks\n")).unwrap();
        assert_eq!(words, vec!["fjord", "gucks"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_from_file("/nonexistent/definitely/words5.txt");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}

//! endpick Input - Sequence loading
//!
//! This crate reads a number sequence from text and hands it to the engine as
//! a validated, non-empty `Sequence`. The format is the first non-blank line of
//! the input, with integers separated by whitespace:
//!
//! ```text
//! 4 5 1 3
//! ```
//!
//! Any later lines are ignored.

mod error;

use std::fs;
use std::path::Path;

use endpick_engine::Sequence;

pub use error::LoadError;

/// Parse a sequence from text.
pub fn parse_sequence(text: &str) -> Result<Sequence, LoadError> {
    let line = match text.lines().find(|line| !line.trim().is_empty()) {
        Some(line) => line,
        None => return Err(LoadError::Empty),
    };

    let values = line
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i32>().map_err(|_| LoadError::InvalidToken {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect::<Result<Vec<i32>, LoadError>>()?;

    Sequence::new(values).ok_or(LoadError::Empty)
}

/// Read and parse a sequence file.
pub fn load_sequence(path: impl AsRef<Path>) -> Result<Sequence, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let sequence = parse_sequence(&text)?;
    log::debug!("loaded {} values from {}", sequence.len(), path.display());
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_parse_simple_line() {
        let seq = parse_sequence("4 5 1 3").unwrap();
        assert_eq!(seq.values(), &[4, 5, 1, 3]);
    }

    #[test]
    fn test_parse_negative_and_extra_whitespace() {
        let seq = parse_sequence("  3\t-5   2 \r\n").unwrap();
        assert_eq!(seq.values(), &[3, -5, 2]);
    }

    #[test]
    fn test_parse_uses_first_non_blank_line() {
        let seq = parse_sequence("\n   \n7 8\n1 2 3\n").unwrap();
        assert_eq!(seq.values(), &[7, 8]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_sequence(""), Err(LoadError::Empty)));
        assert!(matches!(parse_sequence(" \n\t\n"), Err(LoadError::Empty)));
    }

    #[test]
    fn test_parse_invalid_token() {
        match parse_sequence("1 2 x 4") {
            Err(LoadError::InvalidToken { token, position }) => {
                assert_eq!(token, "x");
                assert_eq!(position, 3);
            }
            other => panic!("expected InvalidToken, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_out_of_range_token() {
        let err = parse_sequence("1 99999999999").unwrap_err();
        assert!(matches!(err, LoadError::InvalidToken { position: 2, .. }));
        assert!(err.to_string().contains("99999999999"));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("endpick-input-does-not-exist.txt");
        let err = load_sequence(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("endpick-input-{}.txt", std::process::id()));
        fs::write(&path, "1 5 2 4\n").unwrap();
        let result = load_sequence(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(result.unwrap().values(), &[1, 5, 2, 4]);
    }
}

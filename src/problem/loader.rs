//! Plain-text problem file loader.
//!
//! The format is whitespace-separated and line-oriented:
//!
//! ```raw
//! S P                       (number of solists, number of pieces)
//! n_1_1 ... n_1_P  w_1      (need flags of solist 1, then its salary)
//! ...
//! n_S_1 ... n_S_P  w_S
//! d_1 ... d_P               (duration of each piece)
//! ```
//!
//! Need flags are `0` or `1`; salaries and durations are non-negative
//! integers. Blank lines are ignored. Parsing is all-or-nothing: the first
//! malformed line aborts with a [`ProblemError`] naming the line.

use super::error::ProblemError;
use super::types::ProblemInstance;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Loads a problem instance from a file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<ProblemInstance, ProblemError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Reads a problem instance from any reader.
pub fn read<R: Read>(mut reader: R) -> Result<ProblemInstance, ProblemError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse(&text)
}

/// Parses a problem instance from its textual representation.
///
/// # Examples
///
/// ```
/// let problem = orchestra_scheduler::problem::parse(
///     "2 3\n\
///      1 0 1 10\n\
///      0 1 1 20\n\
///      5 6 7\n",
/// )
/// .unwrap();
/// assert_eq!(problem.salaries(), &[10.0, 20.0]);
/// assert_eq!(problem.pieces_length(), &[5.0, 6.0, 7.0]);
/// ```
pub fn parse(text: &str) -> Result<ProblemInstance, ProblemError> {
    let mut lines = Lines::new(text);

    let (line, header) = lines.next_line()?;
    expect_count(line, &header, 2)?;
    let nbr_solists: usize = parse_token(line, "number of solists", header[0])?;
    let nbr_pieces: usize = parse_token(line, "number of pieces", header[1])?;
    if nbr_solists == 0 || nbr_pieces == 0 {
        return Err(ProblemError::EmptyInstance);
    }

    let mut need_matrix = Vec::with_capacity(nbr_solists);
    let mut salaries = Vec::with_capacity(nbr_solists);
    for _ in 0..nbr_solists {
        let (line, tokens) = lines.next_line()?;
        expect_count(line, &tokens, nbr_pieces + 1)?;

        let (flags, salary) = tokens.split_at(nbr_pieces);
        let row = flags
            .iter()
            .enumerate()
            .map(|(col, token)| parse_flag(line, col + 1, token))
            .collect::<Result<Vec<_>, _>>()?;
        need_matrix.push(row);
        salaries.push(parse_token::<u64>(line, "salary", salary[0])? as f64);
    }

    let (line, tokens) = lines.next_line()?;
    expect_count(line, &tokens, nbr_pieces)?;
    let pieces_length = tokens
        .iter()
        .map(|token| parse_token::<u64>(line, "piece length", token).map(|d| d as f64))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(line) = lines.remaining() {
        return Err(ProblemError::TrailingContent { line });
    }

    ProblemInstance::new(need_matrix, pieces_length, salaries)
}

/// Non-blank lines of the input, tokenized, with 1-based line numbers.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last_line: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().enumerate(),
            last_line: 0,
        }
    }

    fn next_line(&mut self) -> Result<(usize, Vec<&'a str>), ProblemError> {
        for (idx, raw) in self.inner.by_ref() {
            self.last_line = idx + 1;
            let tokens: Vec<&str> = raw.split_whitespace().collect();
            if !tokens.is_empty() {
                return Ok((idx + 1, tokens));
            }
        }
        Err(ProblemError::UnexpectedEof {
            line: self.last_line + 1,
        })
    }

    /// Line number of the first non-blank line left, if any.
    fn remaining(&mut self) -> Option<usize> {
        self.inner
            .by_ref()
            .find(|(_, raw)| !raw.trim().is_empty())
            .map(|(idx, _)| idx + 1)
    }
}

fn expect_count(line: usize, tokens: &[&str], expected: usize) -> Result<(), ProblemError> {
    if tokens.len() == expected {
        Ok(())
    } else {
        Err(ProblemError::TokenCount {
            line,
            expected,
            found: tokens.len(),
        })
    }
}

fn parse_token<T: FromStr>(
    line: usize,
    field: &'static str,
    token: &str,
) -> Result<T, ProblemError> {
    token.parse().map_err(|_| ProblemError::InvalidToken {
        line,
        field,
        token: token.to_string(),
    })
}

fn parse_flag(line: usize, column: usize, token: &str) -> Result<bool, ProblemError> {
    match token {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(ProblemError::InvalidFlag {
            line,
            column,
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "3 4\n1 0 0 1 10\n0 1 1 0 20\n1 1 0 0 5\n2 3 4 5\n";

    #[test]
    fn test_parse_small() {
        let p = parse(SMALL).unwrap();
        assert_eq!(p.nbr_solists(), 3);
        assert_eq!(p.nbr_pieces(), 4);
        assert_eq!(p.salaries(), &[10.0, 20.0, 5.0]);
        assert_eq!(p.pieces_length(), &[2.0, 3.0, 4.0, 5.0]);
        assert_eq!(p.need_matrix()[0], vec![true, false, false, true]);
        assert_eq!(p.need_matrix()[2], vec![true, true, false, false]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let text = "\n1 2\n\n  1 1 3  \n\n4 5\n\n";
        let p = parse(text).unwrap();
        assert_eq!(p.salaries(), &[3.0]);
        assert_eq!(p.pieces_length(), &[4.0, 5.0]);
    }

    #[test]
    fn test_read_from_reader() {
        let p = read(SMALL.as_bytes()).unwrap();
        assert_eq!(p.nbr_pieces(), 4);
    }

    #[test]
    fn test_header_token_count() {
        let err = parse("3\n").unwrap_err();
        assert!(matches!(
            err,
            ProblemError::TokenCount {
                line: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_header_not_numeric() {
        let err = parse("a 4\n").unwrap_err();
        assert!(matches!(
            err,
            ProblemError::InvalidToken {
                line: 1,
                field: "number of solists",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(matches!(
            parse("0 4\n").unwrap_err(),
            ProblemError::EmptyInstance
        ));
    }

    #[test]
    fn test_row_too_short() {
        let err = parse("1 3\n1 0 10\n1 2 3\n").unwrap_err();
        assert!(matches!(
            err,
            ProblemError::TokenCount {
                line: 2,
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn test_bad_flag() {
        let err = parse("1 2\n1 2 10\n1 2\n").unwrap_err();
        assert!(matches!(
            err,
            ProblemError::InvalidFlag {
                line: 2,
                column: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_bad_salary() {
        let err = parse("1 2\n1 0 ten\n1 2\n").unwrap_err();
        assert!(matches!(
            err,
            ProblemError::InvalidToken {
                line: 2,
                field: "salary",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_duration() {
        let err = parse("1 2\n1 0 10\n1 -2\n").unwrap_err();
        assert!(matches!(
            err,
            ProblemError::InvalidToken {
                line: 3,
                field: "piece length",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_duration_line() {
        let err = parse("1 2\n1 0 10\n").unwrap_err();
        assert!(matches!(err, ProblemError::UnexpectedEof { line: 3 }));
    }

    #[test]
    fn test_missing_solist_line() {
        let err = parse("2 2\n1 0 10\n").unwrap_err();
        assert!(matches!(err, ProblemError::UnexpectedEof { line: 3 }));
    }

    #[test]
    fn test_trailing_content() {
        let err = parse("1 2\n1 0 10\n1 2\n\n9 9\n").unwrap_err();
        assert!(matches!(err, ProblemError::TrailingContent { line: 5 }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load("/nonexistent/orchestra/problem.txt").unwrap_err();
        assert!(matches!(err, ProblemError::Io(_)));
    }
}

use crate::config::InvalidCountPolicy;
use crate::error::{Result, ShiftError};
use std::io::{BufRead, Write};

pub const COUNT_PROMPT: &str = "Number of characters to move (including spaces if any): ";

/// Ask the operator for the character count and read one line of answer.
///
/// Only the first whitespace-separated token is parsed. When it is missing
/// or not an integer, `policy` decides between returning 0 and failing with
/// [`ShiftError::Parse`].
pub fn read_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    policy: InvalidCountPolicy,
) -> Result<i64> {
    write!(output, "{COUNT_PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    match parse_count(&line) {
        Ok(count) => Ok(count),
        Err(err) => match policy {
            InvalidCountPolicy::Abort => Err(err),
            InvalidCountPolicy::Proceed => {
                tracing::warn!("{err}; continuing with 0");
                Ok(0)
            },
        },
    }
}

fn parse_count(line: &str) -> Result<i64> {
    line.split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| ShiftError::Parse {
            input: line.trim_end_matches(['\r', '\n']).to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str, policy: InvalidCountPolicy) -> (Result<i64>, String) {
        let mut output = Vec::new();
        let result = read_count(&mut Cursor::new(input), &mut output, policy);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_reads_integer_and_prints_prompt() {
        let (result, output) = read("4\n", InvalidCountPolicy::Proceed);
        assert_eq!(result.unwrap(), 4);
        assert_eq!(output, COUNT_PROMPT);
    }

    #[test]
    fn test_first_token_wins() {
        let (result, _) = read("  12 34\r\n", InvalidCountPolicy::Abort);
        assert_eq!(result.unwrap(), 12);
    }

    #[test]
    fn test_negative_value_passes_through() {
        let (result, _) = read("-3\n", InvalidCountPolicy::Abort);
        assert_eq!(result.unwrap(), -3);
    }

    #[test]
    fn test_invalid_input_proceeds_with_zero() {
        let (result, _) = read("four\n", InvalidCountPolicy::Proceed);
        assert_eq!(result.unwrap(), 0);

        let (result, _) = read("", InvalidCountPolicy::Proceed);
        assert_eq!(result.unwrap(), 0);
    }

    #[test]
    fn test_invalid_input_aborts_when_configured() {
        let (result, _) = read("four\n", InvalidCountPolicy::Abort);
        match result.unwrap_err() {
            ShiftError::Parse { input } => assert_eq!(input, "four"),
            other => panic!("expected parse error, got {other:?}"),
        }

        let (result, _) = read("\n", InvalidCountPolicy::Abort);
        assert!(matches!(result, Err(ShiftError::Parse { .. })));
    }

    #[test]
    fn test_trailing_garbage_is_not_an_integer() {
        // The whole token must parse; no leading-digit prefix is taken
        for input in ["4abc\n", "4.5\n"] {
            let (result, _) = read(input, InvalidCountPolicy::Proceed);
            assert_eq!(result.unwrap(), 0, "input {input:?}");

            let (result, _) = read(input, InvalidCountPolicy::Abort);
            assert!(matches!(result, Err(ShiftError::Parse { .. })), "input {input:?}");
        }
    }
}

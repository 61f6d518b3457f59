use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string at the current position
///
/// On success the matched slice of the input is produced and the cursor
/// moves past it. On failure nothing is consumed and the error points at
/// the position where the match was attempted.
pub struct LiteralParser {
    expected: Cow<'static, str>,
}

impl LiteralParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for LiteralParser {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let len = self.expected.len();
        match cursor.remaining().get(..len) {
            Some(matched) if matched == self.expected => Ok((matched, cursor.advance_by(len))),
            _ => Err(ParseError::new(
                format!("\"{}\" not found", self.expected),
                cursor,
            )),
        }
    }
}

/// Convenience function to create a LiteralParser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> LiteralParser {
    LiteralParser::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::run;

    #[test]
    fn test_exact_match() {
        assert_eq!(run(literal("Hello"), "Hello").unwrap(), "Hello");
    }

    #[test]
    fn test_partial_match_with_remaining() {
        let (result, remaining) = literal("hello").parse(Cursor::new("hello world")).unwrap();

        assert_eq!(result, "hello");
        assert_eq!(remaining.remaining(), " world");
    }

    #[test]
    fn test_unicode_string() {
        let (result, remaining) = literal("こんにちは")
            .parse(Cursor::new("こんにちは世界"))
            .unwrap();

        assert_eq!(result, "こんにちは");
        assert_eq!(remaining.value().unwrap(), '世');
    }

    #[test]
    fn test_empty_string() {
        let cursor = Cursor::new("hello");
        let (result, cursor_after) = literal("").parse(cursor).unwrap();

        assert_eq!(result, "");
        assert_eq!(cursor, cursor_after);
    }

    #[test]
    fn test_mismatch() {
        let error = run(literal("Hello"), "Goodbye").unwrap_err();

        assert_eq!(error.message(), "\"Hello\" not found");
        assert_eq!(error.line(), 1);
        assert_eq!(error.column(), 1);
        assert!(
            error
                .to_string()
                .starts_with("Parse failure at 1:1: \"Hello\" not found")
        );
    }

    #[test]
    fn test_insufficient_input() {
        let error = run(literal("hello"), "hel").unwrap_err();

        assert_eq!(error.offset(), 0);
    }

    #[test]
    fn test_owned_expected_string() {
        let keyword = String::from("let");

        assert_eq!(run(literal(keyword), "let x").unwrap(), "let");
    }
}

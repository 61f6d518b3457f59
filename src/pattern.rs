use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use regex::Regex;

/// A regular expression anchored at the cursor position
///
/// The source pattern is kept for error messages; the compiled form only
/// matches when the match starts exactly at the cursor.
#[derive(Debug, Clone)]
struct AnchoredPattern {
    source: String,
    regex: Regex,
}

impl AnchoredPattern {
    fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(AnchoredPattern {
            source: pattern.to_owned(),
            regex: Regex::new(&format!("^(?:{pattern})"))?,
        })
    }

    fn mismatch<'code>(&self, cursor: Cursor<'code>) -> ParseError<'code> {
        ParseError::new(format!("regex /{}/ doesn't match", self.source), cursor)
    }
}

/// Parser producing the text matched by a regular expression
#[derive(Debug, Clone)]
pub struct RegexParser {
    pattern: AnchoredPattern,
}

impl RegexParser {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(RegexParser {
            pattern: AnchoredPattern::new(pattern)?,
        })
    }
}

impl<'code> Parser<'code> for RegexParser {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.pattern.regex.find(cursor.remaining()) {
            Some(found) => Ok((found.as_str(), cursor.advance_by(found.end()))),
            None => Err(self.pattern.mismatch(cursor)),
        }
    }
}

/// Parser producing the full match and every capture group of a regular
/// expression
///
/// Element 0 is the whole match, followed by the groups in order. Groups
/// that did not take part in the match produce an empty string.
#[derive(Debug, Clone)]
pub struct RegexMatchParser {
    pattern: AnchoredPattern,
}

impl RegexMatchParser {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(RegexMatchParser {
            pattern: AnchoredPattern::new(pattern)?,
        })
    }
}

impl<'code> Parser<'code> for RegexMatchParser {
    type Output = Vec<&'code str>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let Some(captures) = self.pattern.regex.captures(cursor.remaining()) else {
            return Err(self.pattern.mismatch(cursor));
        };
        let consumed = captures.get(0).map_or(0, |whole| whole.end());
        let groups = captures
            .iter()
            .map(|group| group.map_or("", |m| m.as_str()))
            .collect();
        Ok((groups, cursor.advance_by(consumed)))
    }
}

/// Create a parser producing the string matched by `pattern`
///
/// Fails to build if `pattern` is not a valid regular expression.
pub fn regex(pattern: &str) -> Result<RegexParser, regex::Error> {
    RegexParser::new(pattern)
}

/// Create a parser producing the full match and capture groups of `pattern`
pub fn regex_match(pattern: &str) -> Result<RegexMatchParser, regex::Error> {
    RegexMatchParser::new(pattern)
}

use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::until::scan_until;

/// Parser that extracts the raw text between a start and an end delimiter
///
/// Runs `start`, scans up to the first position where `end` matches, then
/// runs `end`. Produces the scanned text; both delimiters are consumed.
///
/// # Examples
/// - `"<abba@cadabra.com>"` with `<` and `>` → `"abba@cadabra.com"`
/// - `"/* note */"` with `/*` and `*/` → `" note "`
pub struct Between<S, E> {
    start: S,
    end: E,
}

impl<S, E> Between<S, E> {
    pub fn new(start: S, end: E) -> Self {
        Between { start, end }
    }
}

impl<'code, S, E> Parser<'code> for Between<S, E>
where
    S: Parser<'code>,
    E: Parser<'code>,
{
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, content_start) = self.start.parse(cursor)?;
        let (content, content_end) = scan_until(&self.end, content_start)?;
        let (_, cursor) = self.end.parse(content_end)?;

        Ok((content, cursor))
    }
}

/// Creates a parser producing the text between `start` and `end`
pub fn between<'code, S, E>(start: S, end: E) -> Between<S, E>
where
    S: Parser<'code>,
    E: Parser<'code>,
{
    Between::new(start, end)
}

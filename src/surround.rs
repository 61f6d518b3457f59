use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser that matches a value wrapped in a left and a right parser
///
/// Parses `left + value + right` and produces only the value; whatever the
/// left and right parsers produce is discarded. Unlike
/// [`between`](crate::between::between) the inner part is a parser, not a scan.
///
/// # Examples
/// - `"[42]"` with `[`, a number parser and `]` → `42`
/// - `"(a, b)"` with `(`, a list parser and `)` → `["a", "b"]`
pub struct Surround<L, P, R> {
    left: L,
    parser: P,
    right: R,
}

impl<L, P, R> Surround<L, P, R> {
    pub fn new(left: L, parser: P, right: R) -> Self {
        Surround {
            left,
            parser,
            right,
        }
    }
}

impl<'code, L, P, R> Parser<'code> for Surround<L, P, R>
where
    L: Parser<'code>,
    P: Parser<'code>,
    R: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self.left.parse(cursor)?;
        let (value, cursor) = self.parser.parse(cursor)?;
        let (_, cursor) = self.right.parse(cursor)?;

        Ok((value, cursor))
    }
}

/// Creates a parser that matches `parser` between `left` and `right`
pub fn surround<'code, L, P, R>(left: L, parser: P, right: R) -> Surround<L, P, R>
where
    L: Parser<'code>,
    P: Parser<'code>,
    R: Parser<'code>,
{
    Surround::new(left, parser, right)
}

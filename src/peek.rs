use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that runs a parser for its value without consuming input
///
/// Failures of the wrapped parser propagate unchanged.
pub struct Peek<P> {
    parser: P,
}

impl<P> Peek<P> {
    pub fn new(parser: P) -> Self {
        Peek { parser }
    }
}

impl<'code, P> Parser<'code> for Peek<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, _) = self.parser.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create a Peek parser
pub fn peek<'code, P>(parser: P) -> Peek<P>
where
    P: Parser<'code>,
{
    Peek::new(parser)
}

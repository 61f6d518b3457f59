use crate::cursor::Cursor;
use crate::many::Many;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        // First parse must succeed
        let (first_value, cursor) = self.parser.parse(cursor)?;

        let (rest, cursor) = Many::new(&self.parser).parse(cursor)?;
        let mut results = Vec::with_capacity(rest.len() + 1);
        results.push(first_value);
        results.extend(rest);

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}

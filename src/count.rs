use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that runs a parser exactly `times` times in a row
///
/// The first failed attempt fails the whole parser with its error.
pub struct Count<P> {
    times: usize,
    parser: P,
}

impl<P> Count<P> {
    pub fn new(times: usize, parser: P) -> Self {
        Count { times, parser }
    }
}

impl<'code, P> Parser<'code> for Count<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::with_capacity(self.times);
        for _ in 0..self.times {
            let (value, next_cursor) = self.parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }
        Ok((results, cursor))
    }
}

/// Convenience function to create a Count parser
pub fn count<'code, P>(times: usize, parser: P) -> Count<P>
where
    P: Parser<'code>,
{
    Count::new(times, parser)
}

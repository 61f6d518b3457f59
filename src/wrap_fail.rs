use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use std::fmt;

/// Parser combinator that rewrites the message of a failure
///
/// The wrapper receives the bare message of the wrapped parser's failure
/// and returns the replacement. The failure's position is left untouched,
/// so a generic "regex doesn't match" can become "expected number" at the
/// same line and column.
pub struct WrapFail<P, F> {
    parser: P,
    wrapper: F,
}

impl<P, F> WrapFail<P, F> {
    pub fn new(parser: P, wrapper: F) -> Self {
        WrapFail { parser, wrapper }
    }
}

impl<P, F> fmt::Debug for WrapFail<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapFail")
            .field("parser", &self.parser)
            .field("wrapper", &"<function>")
            .finish()
    }
}

impl<'code, P, F> Parser<'code> for WrapFail<P, F>
where
    P: Parser<'code>,
    F: Fn(&str) -> String,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(cursor).map_err(|error| {
            let message = (self.wrapper)(error.message());
            error.with_message(message)
        })
    }
}

/// Extension trait to add .wrap_fail() method support for parsers
pub trait WrapFailExt<'code>: Parser<'code> + Sized {
    fn wrap_fail<F>(self, wrapper: F) -> WrapFail<Self, F>
    where
        F: Fn(&str) -> String,
    {
        WrapFail::new(self, wrapper)
    }
}

/// Implement WrapFailExt for all parsers
impl<'code, P> WrapFailExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a WrapFail parser
pub fn wrap_fail<'code, P, F>(parser: P, wrapper: F) -> WrapFail<P, F>
where
    P: Parser<'code>,
    F: Fn(&str) -> String,
{
    WrapFail::new(parser, wrapper)
}

use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser that consumes nothing and reports the current position to a
/// logging callback
///
/// The callback receives the same excerpt used in error messages, which
/// makes it handy to drop into a sequence while debugging a grammar.
pub struct DebugTrace<F> {
    log: F,
}

impl<F> DebugTrace<F> {
    pub fn new(log: F) -> Self {
        DebugTrace { log }
    }
}

impl<'code, F> Parser<'code> for DebugTrace<F>
where
    F: Fn(&str),
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (self.log)(&cursor.loc().excerpt());
        Ok(((), cursor))
    }
}

/// Convenience function to create a DebugTrace parser
pub fn debug_trace<F>(log: F) -> DebugTrace<F>
where
    F: Fn(&str),
{
    DebugTrace::new(log)
}

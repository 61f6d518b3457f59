use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that succeeds only at the end of the input, consuming nothing
#[derive(Debug, Copy, Clone, Default)]
pub struct End;

impl<'code> Parser<'code> for End {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        if cursor.eos() {
            Ok(((), cursor))
        } else {
            Err(ParseError::new("Not at end of string", cursor))
        }
    }
}

/// Convenience function to create an End parser
pub fn end() -> End {
    End
}

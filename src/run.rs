use crate::and::And;
use crate::cursor::Cursor;
use crate::end::end;
use crate::error::ParseError;
use crate::parser::Parser;

/// Run a parser from the start of `input`, allowing trailing unconsumed input
///
/// Returns the parser's value, or the failure it produced.
pub fn run<'code, P>(parser: P, input: &'code str) -> Result<P::Output, ParseError<'code>>
where
    P: Parser<'code>,
{
    let (value, _) = parser.parse(Cursor::new(input))?;
    Ok(value)
}

/// Run a parser from the start of `input` and require that it consumes all of it
///
/// Trailing input fails with "Not at end of string" at the first unconsumed
/// character.
pub fn run_to_end<'code, P>(parser: P, input: &'code str) -> Result<P::Output, ParseError<'code>>
where
    P: Parser<'code>,
{
    let ((value, ()), _) = And::new(parser, end()).parse(Cursor::new(input))?;
    Ok(value)
}

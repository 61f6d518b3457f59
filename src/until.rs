use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Find the first position at or after `cursor` where `terminator` matches
///
/// Every character boundary is tried in order, the end of input included.
/// Returns the skipped text and the cursor at the terminator's start, not
/// past it.
pub(crate) fn scan_until<'code, T>(
    terminator: &T,
    cursor: Cursor<'code>,
) -> Result<(&'code str, Cursor<'code>), ParseError<'code>>
where
    T: Parser<'code>,
{
    let mut scan = cursor;
    loop {
        if terminator.parse(scan).is_ok() {
            // `scan` only ever moves forward from `cursor`
            let skipped = cursor.slice_to(&scan).unwrap_or_default();
            return Ok((skipped, scan));
        }
        scan = match scan.try_next() {
            Ok(next) => next,
            Err(_) => return Err(ParseError::new("Didn't find terminator", cursor)),
        };
    }
}

/// Parser that consumes input up to where a terminator parser matches
///
/// Produces the consumed text and leaves the cursor at the terminator,
/// which itself is not consumed. The scan costs one terminator attempt per
/// character, so the terminator should be cheap.
pub struct Until<T> {
    terminator: T,
}

impl<T> Until<T> {
    pub fn new(terminator: T) -> Self {
        Until { terminator }
    }
}

impl<'code, T> Parser<'code> for Until<T>
where
    T: Parser<'code>,
{
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        scan_until(&self.terminator, cursor)
    }
}

/// Convenience function to create an Until parser
pub fn until<'code, T>(terminator: T) -> Until<T>
where
    T: Parser<'code>,
{
    Until::new(terminator)
}

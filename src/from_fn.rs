use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser defined by a closure over the cursor
///
/// This is the general way to write a custom parser as a sequence of
/// dependent steps. Each step either delegates to a sub-parser with
/// `sub.parse(cursor)?`, which resumes with the sub-parser's value or fails
/// the whole parser with the sub-parser's error, or advances explicitly
/// with [`Cursor::advance`]. Nothing is undone on failure here; backtracking
/// is left to combinators such as [`choice`](crate::choice::choice) and
/// [`maybe`](crate::maybe::maybe).
///
/// Example:
/// ```
/// use climbcomb::{from_fn, literal, regex, run, Parser};
///
/// let number = regex(r"[0-9]+").unwrap();
/// let sum = from_fn(|cursor| {
///     let (left, cursor) = number.parse(cursor)?;
///     let (_, cursor) = literal("+").parse(cursor)?;
///     let (right, cursor) = number.parse(cursor)?;
///     let total = left.parse::<u32>().unwrap_or(0) + right.parse::<u32>().unwrap_or(0);
///     Ok((total, cursor))
/// });
///
/// assert_eq!(run(&sum, "123+456").unwrap(), 579);
/// assert!(run(&sum, "23.5+92").unwrap_err().to_string().starts_with("Parse failure at 1:3"));
/// ```
pub struct FromFn<F> {
    step: F,
}

impl<F> FromFn<F> {
    pub fn new(step: F) -> Self {
        FromFn { step }
    }
}

impl<'code, F, O> Parser<'code> for FromFn<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (self.step)(cursor)
    }
}

/// Create a parser from a closure taking the current cursor
pub fn from_fn<'code, F, O>(step: F) -> FromFn<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, O>,
{
    FromFn::new(step)
}

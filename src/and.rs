use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. For a list
/// of parsers sharing one output type, use [`sequence`](crate::sequence::sequence).
///
/// Example:
/// ```
/// use climbcomb::and::AndExt;
/// use climbcomb::{literal, regex, run};
///
/// let key_value = regex(r"[a-z]+").unwrap()
///     .and(literal("="))
///     .and(regex(r"[0-9]+").unwrap());
///
/// let ((key, _), value) = run(&key_value, "port=8080").unwrap();
/// assert_eq!(key, "port");
/// assert_eq!(value, "8080");
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::pattern::regex;

    #[test]
    fn test_and_both_succeed() {
        let parser = literal("A").and(literal("5"));

        let ((first, second), cursor) = parser.parse(Cursor::new("A5xyz")).unwrap();
        assert_eq!(first, "A");
        assert_eq!(second, "5");
        assert_eq!(cursor.value().unwrap(), 'x');
    }

    #[test]
    fn test_and_first_fails() {
        let parser = literal("A").and(literal("x"));

        let error = parser.parse(Cursor::new("Bxyz")).unwrap_err();
        assert_eq!(error.offset(), 0);
    }

    #[test]
    fn test_and_second_fails() {
        let parser = literal("A").and(literal("5"));

        let error = parser.parse(Cursor::new("Axyz")).unwrap_err();
        assert_eq!(error.offset(), 1);
        assert_eq!(error.message(), "\"5\" not found");
    }

    #[test]
    fn test_and_chain() {
        let parser = literal("A").and(regex(r"[0-9]").unwrap()).and(literal("B"));

        let (((a, five), b), cursor) = parser.parse(Cursor::new("A5B")).unwrap();
        assert_eq!(a, "A");
        assert_eq!(five, "5");
        assert_eq!(b, "B");
        assert!(cursor.eos());
    }

    #[test]
    fn test_and_function_syntax() {
        let parser = and(literal("X"), literal("Y"));

        let ((x, y), cursor) = parser.parse(Cursor::new("XY")).unwrap();
        assert_eq!(x, "X");
        assert_eq!(y, "Y");
        assert!(cursor.eos());
    }
}

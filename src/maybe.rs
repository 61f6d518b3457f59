use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that makes a parser optional
///
/// Produces `Some` with the wrapped parser's value on success. On failure
/// the cursor is restored to where this parser started and `None` is
/// produced; the failure is never propagated.
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<'code, P> Parser<'code> for Maybe<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, next)) => Ok((Some(value), next)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create a Maybe parser
pub fn maybe<'code, P>(parser: P) -> Maybe<P>
where
    P: Parser<'code>,
{
    Maybe::new(parser)
}

/// Extension trait to add .maybe() method support for parsers
pub trait MaybeExt<'code>: Parser<'code> + Sized {
    fn maybe(self) -> Maybe<Self> {
        Maybe::new(self)
    }
}

/// Implement MaybeExt for all parsers
impl<'code, P> MaybeExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::run::run;
    use crate::sequence::sequence;

    #[test]
    fn test_maybe_hit() {
        assert_eq!(run(maybe(literal("Hit")), "Hit").unwrap(), Some("Hit"));
    }

    #[test]
    fn test_maybe_miss() {
        assert_eq!(run(maybe(literal("Hit")), "Not a hit").unwrap(), None);
    }

    #[test]
    fn test_maybe_restores_position_after_partial_progress() {
        // The inner sequence consumes "ab" before failing on 'd'
        let partial = sequence(vec![literal("a"), literal("b"), literal("c")]);
        let cursor = Cursor::new("abd");

        let (value, after) = partial.maybe().parse(cursor).unwrap();
        assert_eq!(value, None);
        assert_eq!(after, cursor);
    }
}

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries each alternative in order from the same position
///
/// The first alternative to succeed wins. When every alternative fails, the
/// failures are merged into one error listing all candidates, the candidate
/// that got furthest into the input first.
///
/// Alternatives of different concrete types can share the list once boxed:
/// ```
/// use climbcomb::{choice, literal, regex, run, BoxedExt};
///
/// let token = choice(vec![
///     literal("true").boxed(),
///     literal("false").boxed(),
///     regex(r"[0-9]+").unwrap().boxed(),
/// ]);
///
/// assert_eq!(run(&token, "false").unwrap(), "false");
/// assert_eq!(run(&token, "42").unwrap(), "42");
/// assert!(run(&token, "maybe").is_err());
/// ```
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Choice { parsers }
    }
}

impl<'code, P> Parser<'code> for Choice<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut errors = Vec::with_capacity(self.parsers.len());
        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok(result) => return Ok(result),
                Err(error) => errors.push(error),
            }
        }
        Err(merge_failures(errors, cursor))
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'code, P>(parsers: Vec<P>) -> Choice<P>
where
    P: Parser<'code>,
{
    Choice::new(parsers)
}

/// Combine the failures of every alternative into one error at `cursor`
pub(crate) fn merge_failures<'code>(
    mut errors: Vec<ParseError<'code>>,
    cursor: Cursor<'code>,
) -> ParseError<'code> {
    // Stable, so alternatives failing at the same offset keep their order
    errors.sort_by(|a, b| b.offset().cmp(&a.offset()));

    let candidates = errors
        .iter()
        .map(|error| error.to_string().replace('\n', "\n  "))
        .collect::<Vec<_>>();

    ParseError::new(
        format!(
            "Multiple choices; potential matches:\n- {}",
            candidates.join("\n- ")
        ),
        cursor,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::{LiteralParser, literal};
    use crate::map::MapExt;
    use crate::parser::BoxedExt;
    use crate::run::run;
    use crate::sequence::sequence;

    #[test]
    fn test_choice_first_match_wins() {
        let parser = choice(vec![literal("foo"), literal("foobar")]);

        let (value, cursor) = parser.parse(Cursor::new("foobar")).unwrap();
        assert_eq!(value, "foo");
        assert_eq!(cursor.remaining(), "bar");
    }

    #[test]
    fn test_choice_later_alternative() {
        let parser = choice(vec![literal("a"), literal("b"), literal("c")]);

        assert_eq!(run(&parser, "c").unwrap(), "c");
    }

    #[test]
    fn test_choice_restarts_each_alternative() {
        // The first alternative consumes "ab" before failing
        let parser = choice(vec![
            sequence(vec![literal("a"), literal("b"), literal("x")]).boxed(),
            sequence(vec![literal("a"), literal("b"), literal("c")]).boxed(),
        ]);

        assert_eq!(run(&parser, "abc").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_choice_all_fail_lists_candidates() {
        let parser = choice(vec![literal("foo"), literal("bar")]);

        let error = run(&parser, "baz").unwrap_err();
        assert_eq!(error.offset(), 0);
        assert!(error.message().starts_with(
            "Multiple choices; potential matches:\n\
             - Parse failure at 1:1: \"foo\" not found\n  -> \"baz\""
        ));
        assert!(error.message().contains("\n- Parse failure at 1:1: \"bar\" not found"));
    }

    #[test]
    fn test_choice_orders_furthest_failure_first() {
        let parser = choice(vec![
            sequence(vec![literal("a"), literal("x")]).boxed(),
            sequence(vec![literal("a"), literal("b"), literal("y")]).boxed(),
            literal("q").map(|q| vec![q]).boxed(),
        ]);

        let error = run(&parser, "abc").unwrap_err();
        let message = error.message();
        let furthest = message.find("\"y\" not found").unwrap();
        let middle = message.find("\"x\" not found").unwrap();
        let nearest = message.find("\"q\" not found").unwrap();

        assert!(furthest < middle);
        assert!(middle < nearest);
        assert_eq!(error.offset(), 0);
    }

    #[test]
    fn test_choice_empty_list_fails() {
        let parser = choice(Vec::<LiteralParser>::new());

        let error = run(&parser, "anything").unwrap_err();
        assert_eq!(error.message(), "Multiple choices; potential matches:\n- ");
    }
}

use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that runs a parser and chooses the next parser from
/// its value
///
/// The parser returned by the binder runs from the position the first
/// parser stopped at; its value becomes the result. A failure of either
/// parser propagates unchanged.
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.binder)(value).parse(cursor)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    Bind::new(parser, binder)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, Q>(self, binder: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        Bind::new(self, binder)
    }
}

/// Implement BindExt for all parsers
impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::count;
    use crate::literal::literal;
    use crate::map::MapExt;
    use crate::pattern::regex;
    use crate::run::{run, run_to_end};

    #[test]
    fn test_length_prefixed_items() {
        let length = regex(r"[0-9]").unwrap().map(|s: &str| s.parse::<usize>().unwrap_or(0));
        let parser = length.bind(|n| count(n, literal("x")));

        assert_eq!(run_to_end(&parser, "3xxx").unwrap().len(), 3);
        assert_eq!(run(&parser, "0xxx").unwrap().len(), 0);
    }

    #[test]
    fn test_second_parser_failure_propagates() {
        let length = regex(r"[0-9]").unwrap().map(|s: &str| s.parse::<usize>().unwrap_or(0));
        let parser = bind(length, |n| count(n, literal("x")));

        let error = run(&parser, "3xx").unwrap_err();
        assert_eq!(error.offset(), 3);
        assert_eq!(error.message(), "\"x\" not found");
    }

    #[test]
    fn test_first_parser_failure_propagates() {
        let parser = literal("a").bind(|_| literal("b"));

        let error = run(&parser, "bb").unwrap_err();
        assert_eq!(error.offset(), 0);
    }
}

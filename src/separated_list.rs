use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parse the `separator, element` pairs following a first element
///
/// Stops without failing when the separator doesn't match; an element
/// missing after a matched separator fails the list.
fn parse_rest<'code, P, PS>(
    parser: &P,
    separator: &PS,
    mut results: Vec<P::Output>,
    mut cursor: Cursor<'code>,
) -> ParseResult<'code, Vec<P::Output>>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    loop {
        let temp_cursor = match separator.parse(cursor) {
            Ok((_, new_cursor)) => new_cursor,
            Err(_) => break,
        };

        let (value, next_cursor) = parser.parse(temp_cursor)?;
        results.push(value);
        if next_cursor == cursor {
            break;
        }
        cursor = next_cursor;
    }

    Ok((results, cursor))
}

/// Parser combinator that matches one or more elements separated by a parser
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!["a", "b", "c"]`
/// - `""` → error, the first element is required
/// - `"a,b,"` → error, an element must follow every separator
pub struct SepBy1<PS, P> {
    separator: PS,
    parser: P,
}

impl<PS, P> SepBy1<PS, P> {
    pub fn new(separator: PS, parser: P) -> Self {
        SepBy1 { separator, parser }
    }
}

impl<'code, PS, P> Parser<'code> for SepBy1<PS, P>
where
    PS: Parser<'code>,
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first_value, cursor) = self.parser.parse(cursor)?;
        parse_rest(&self.parser, &self.separator, vec![first_value], cursor)
    }
}

/// Creates a parser for one or more elements separated by `separator`
pub fn sep_by1<'code, PS, P>(separator: PS, parser: P) -> SepBy1<PS, P>
where
    PS: Parser<'code>,
    P: Parser<'code>,
{
    SepBy1::new(separator, parser)
}

/// Parser combinator that matches zero or more elements separated by a parser
///
/// When the first element doesn't match, the result is an empty list and
/// nothing is consumed.
pub struct SepBy<PS, P> {
    separator: PS,
    parser: P,
}

impl<PS, P> SepBy<PS, P> {
    pub fn new(separator: PS, parser: P) -> Self {
        SepBy { separator, parser }
    }
}

impl<'code, PS, P> Parser<'code> for SepBy<PS, P>
where
    PS: Parser<'code>,
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((first_value, cursor)) => {
                parse_rest(&self.parser, &self.separator, vec![first_value], cursor)
            }
            Err(_) => Ok((Vec::new(), cursor)),
        }
    }
}

/// Creates a parser for zero or more elements separated by `separator`
pub fn sep_by<'code, PS, P>(separator: PS, parser: P) -> SepBy<PS, P>
where
    PS: Parser<'code>,
    P: Parser<'code>,
{
    SepBy::new(separator, parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::or::OrExt;
    use crate::pattern::regex;
    use crate::run::run;

    #[test]
    fn test_sep_by_empty_input() {
        let parser = sep_by(literal(","), regex(r"[0-9]+").unwrap());

        assert!(run(&parser, "").unwrap().is_empty());
    }

    #[test]
    fn test_sep_by1_empty_input_fails() {
        let parser = sep_by1(literal(","), regex(r"[0-9]+").unwrap());

        let error = run(&parser, "").unwrap_err();
        assert_eq!(error.message(), "regex /[0-9]+/ doesn't match");
    }

    #[test]
    fn test_single_element() {
        let parser = sep_by1(literal(","), regex(r"[0-9]+").unwrap());

        assert_eq!(run(&parser, "42").unwrap(), vec!["42"]);
    }

    #[test]
    fn test_multiple_elements() {
        let parser = sep_by(literal(","), regex(r"[0-9]+").unwrap());

        assert_eq!(run(&parser, "1,2,3").unwrap(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_trailing_separator_fails() {
        let parser = sep_by(literal(","), regex(r"[0-9]+").unwrap());

        let error = run(&parser, "1,2,").unwrap_err();
        assert_eq!(error.offset(), 4);
    }

    #[test]
    fn test_missing_element_after_separator_reports_position() {
        let parser = sep_by(literal(" "), regex(r"[a-z]+").unwrap());

        let error = run(&parser, "why hello 123").unwrap_err();
        assert_eq!(error.line(), 1);
        assert_eq!(error.column(), 11);
    }

    #[test]
    fn test_non_matching_separator_stops() {
        let parser = sep_by1(literal(","), regex(r"[0-9]+").unwrap());

        let (results, cursor) = parser.parse(Cursor::new("1;2;3")).unwrap();
        assert_eq!(results, vec!["1"]);
        assert_eq!(cursor.value().unwrap(), ';');
    }

    #[test]
    fn test_sep_by_no_first_element_consumes_nothing() {
        let parser = sep_by(literal(","), regex(r"[0-9]+").unwrap());

        let (results, cursor) = parser.parse(Cursor::new("x,1")).unwrap();
        assert!(results.is_empty());
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_string_separator() {
        let fruit = literal("apple").or(literal("banana")).or(literal("cherry"));
        let parser = sep_by1(literal("::"), fruit);

        assert_eq!(
            run(&parser, "apple::banana::cherry").unwrap(),
            vec!["apple", "banana", "cherry"]
        );
    }
}

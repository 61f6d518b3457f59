use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{BoxedParser, ParseResult, Parser};
use std::cell::OnceCell;
use std::rc::{Rc, Weak};

/// Semantic action of a prefix or postfix operator
pub type UnaryFn<T> = Rc<dyn Fn(T) -> T>;

/// Semantic action of an infix operator
pub type BinaryFn<T> = Rc<dyn Fn(T, T) -> T>;

/// Wrap a closure as a prefix or postfix operator action
pub fn unary<T>(action: impl Fn(T) -> T + 'static) -> UnaryFn<T> {
    Rc::new(action)
}

/// Wrap a closure as an infix operator action
pub fn binary<T>(action: impl Fn(T, T) -> T + 'static) -> BinaryFn<T> {
    Rc::new(action)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`
    Right,
}

/// One entry of an operator table
///
/// The parser matches the operator's token and produces its action.
pub enum Operator<'code, T> {
    Prefix(BoxedParser<'code, UnaryFn<T>>),
    Postfix(BoxedParser<'code, UnaryFn<T>>),
    Infix {
        associativity: Associativity,
        parser: BoxedParser<'code, BinaryFn<T>>,
    },
}

impl<'code, T> Operator<'code, T> {
    pub fn prefix<P>(parser: P) -> Self
    where
        P: Parser<'code, Output = UnaryFn<T>> + 'code,
    {
        Operator::Prefix(Box::new(parser))
    }

    pub fn postfix<P>(parser: P) -> Self
    where
        P: Parser<'code, Output = UnaryFn<T>> + 'code,
    {
        Operator::Postfix(Box::new(parser))
    }

    pub fn infix<P>(associativity: Associativity, parser: P) -> Self
    where
        P: Parser<'code, Output = BinaryFn<T>> + 'code,
    {
        Operator::Infix {
            associativity,
            parser: Box::new(parser),
        }
    }
}

struct InfixOperator<'code, T> {
    precedence: usize,
    associativity: Associativity,
    parser: BoxedParser<'code, BinaryFn<T>>,
}

type TermFactory<'code, T> = Box<dyn Fn(ExpressionRef<'code, T>) -> BoxedParser<'code, T> + 'code>;

struct Grammar<'code, T> {
    prefix: Vec<BoxedParser<'code, UnaryFn<T>>>,
    postfix: Vec<BoxedParser<'code, UnaryFn<T>>>,
    /// Ordered from highest to lowest precedence
    infix: Vec<InfixOperator<'code, T>>,
    term: OnceCell<BoxedParser<'code, T>>,
    term_factory: TermFactory<'code, T>,
    this: Weak<Grammar<'code, T>>,
}

/// First unary operator matching at `cursor`, in declaration order
fn first_unary<'code, T>(
    operators: &[BoxedParser<'code, UnaryFn<T>>],
    cursor: Cursor<'code>,
) -> Option<(UnaryFn<T>, Cursor<'code>)> {
    operators
        .iter()
        .find_map(|operator| operator.parse(cursor).ok())
}

/// Greedily collect the unary operators matching from `cursor` onwards
fn unary_run<'code, T>(
    operators: &[BoxedParser<'code, UnaryFn<T>>],
    mut cursor: Cursor<'code>,
) -> (Vec<UnaryFn<T>>, Cursor<'code>) {
    let mut actions = Vec::new();
    while let Some((action, next_cursor)) = first_unary(operators, cursor) {
        actions.push(action);
        if next_cursor == cursor {
            break;
        }
        cursor = next_cursor;
    }
    (actions, cursor)
}

impl<'code, T> Grammar<'code, T> {
    fn term(&self) -> &BoxedParser<'code, T> {
        self.term.get_or_init(|| {
            (self.term_factory)(ExpressionRef {
                grammar: self.this.clone(),
            })
        })
    }

    /// Prefix operators, the term, then postfix operators
    fn parse_term(&self, cursor: Cursor<'code>) -> ParseResult<'code, T> {
        let (prefixes, cursor) = unary_run(&self.prefix, cursor);
        let (mut value, cursor) = self.term().parse(cursor)?;

        // The prefix closest to the term applies first
        for action in prefixes.iter().rev() {
            value = action(value);
        }

        let (postfixes, cursor) = unary_run(&self.postfix, cursor);
        for action in &postfixes {
            value = action(value);
        }

        Ok((value, cursor))
    }

    /// Precedence climbing: only infix operators binding at least as tightly
    /// as `min_precedence` may extend the expression
    fn parse_precedence(
        &self,
        min_precedence: usize,
        cursor: Cursor<'code>,
    ) -> ParseResult<'code, T> {
        let (mut left, mut cursor) = self.parse_term(cursor)?;

        'climb: loop {
            for operator in &self.infix {
                if operator.precedence < min_precedence {
                    continue;
                }
                let Ok((action, after_operator)) = operator.parser.parse(cursor) else {
                    continue;
                };

                let next_min = match operator.associativity {
                    Associativity::Left => operator.precedence + 1,
                    Associativity::Right => operator.precedence,
                };
                let (right, after_right) = self.parse_precedence(next_min, after_operator)?;
                left = action(left, right);
                cursor = after_right;
                continue 'climb;
            }

            return Ok((left, cursor));
        }
    }
}

/// Parser for a whole operator expression, built by [`build_expression_parser`]
pub struct ExpressionParser<'code, T> {
    grammar: Rc<Grammar<'code, T>>,
}

impl<'code, T> Clone for ExpressionParser<'code, T> {
    fn clone(&self) -> Self {
        ExpressionParser {
            grammar: Rc::clone(&self.grammar),
        }
    }
}

impl<'code, T> Parser<'code> for ExpressionParser<'code, T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.grammar.parse_precedence(0, cursor)
    }
}

/// Handle to an expression parser from inside its own term parser
///
/// Parses a full expression, which is how parenthesized sub-expressions are
/// written. The handle doesn't keep the expression parser alive.
pub struct ExpressionRef<'code, T> {
    grammar: Weak<Grammar<'code, T>>,
}

impl<'code, T> Clone for ExpressionRef<'code, T> {
    fn clone(&self) -> Self {
        ExpressionRef {
            grammar: Weak::clone(&self.grammar),
        }
    }
}

impl<'code, T> Parser<'code> for ExpressionRef<'code, T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.grammar.upgrade() {
            Some(grammar) => grammar.parse_precedence(0, cursor),
            None => Err(ParseError::new(
                "expression parser is no longer alive",
                cursor,
            )),
        }
    }
}

/// Build a parser for expressions over a table of operators
///
/// `operators` is ordered from the tightest binding operator to the
/// loosest. Prefix and postfix operators always bind tighter than infix
/// ones. `term_factory` builds the parser for the atoms between operators;
/// it is handed a reference to the expression parser being built, so terms
/// can contain nested expressions. The factory runs once, on the first
/// term parsed, and must not parse anything itself.
///
/// Failures of the term or operator parsers propagate unchanged.
///
/// Example:
/// ```
/// use climbcomb::expression::{Associativity, Operator, binary, build_expression_parser};
/// use climbcomb::map::MapExt;
/// use climbcomb::{choice, literal, regex, run_to_end, surround, BoxedExt};
///
/// let arithmetic = build_expression_parser(
///     vec![
///         Operator::infix(
///             Associativity::Left,
///             literal("*").map(|_| binary(|a: i64, b: i64| a * b)),
///         ),
///         Operator::infix(
///             Associativity::Left,
///             literal("+").map(|_| binary(|a: i64, b: i64| a + b)),
///         ),
///     ],
///     |expression| {
///         choice(vec![
///             regex(r"[0-9]+")
///                 .unwrap()
///                 .map(|digits: &str| digits.parse::<i64>().unwrap_or(0))
///                 .boxed(),
///             surround(literal("("), expression, literal(")")).boxed(),
///         ])
///     },
/// );
///
/// assert_eq!(run_to_end(&arithmetic, "1+2*3").unwrap(), 7);
/// assert_eq!(run_to_end(&arithmetic, "(1+2)*3").unwrap(), 9);
/// ```
pub fn build_expression_parser<'code, T, F, P>(
    operators: Vec<Operator<'code, T>>,
    term_factory: F,
) -> ExpressionParser<'code, T>
where
    F: Fn(ExpressionRef<'code, T>) -> P + 'code,
    P: Parser<'code, Output = T> + 'code,
{
    let total = operators.len();
    let mut prefix = Vec::new();
    let mut postfix = Vec::new();
    let mut infix = Vec::new();

    for (index, operator) in operators.into_iter().enumerate() {
        match operator {
            Operator::Prefix(parser) => prefix.push(parser),
            Operator::Postfix(parser) => postfix.push(parser),
            Operator::Infix {
                associativity,
                parser,
            } => infix.push(InfixOperator {
                precedence: total - index,
                associativity,
                parser,
            }),
        }
    }

    let grammar = Rc::new_cyclic(|this| Grammar {
        prefix,
        postfix,
        infix,
        term: OnceCell::new(),
        term_factory: Box::new(move |expression| -> BoxedParser<'code, T> {
            Box::new(term_factory(expression))
        }),
        this: this.clone(),
    });

    ExpressionParser { grammar }
}

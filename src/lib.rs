//! # ClimbComb - Parser Combinator Library
//!
//! A parser combinator library over UTF-8 text with a precedence-climbing
//! expression builder.
//!
//! ClimbComb provides composable parsers that can be combined to build
//! recursive-descent parsers from simple building blocks. The library emphasizes:
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Backtracking**: Positions are immutable [`Cursor`] values, so any
//!   combinator can retry from a saved position
//! - **Rich error reporting**: Failures carry line, column and an excerpt of
//!   the input with a caret under the failing character
//! - **Operator expressions**: [`build_expression_parser`] turns an operator
//!   table and a term parser into a full expression parser
//!
//! Custom parsers are written with [`from_fn`], threading the cursor
//! through sub-parsers with `?`:
//!
//! ```
//! use climbcomb::{from_fn, literal, regex, run_to_end, Parser};
//!
//! let assignment = from_fn(|cursor| {
//!     let (name, cursor) = regex(r"[a-z]+").unwrap().parse(cursor)?;
//!     let (_, cursor) = literal(" = ").parse(cursor)?;
//!     let (value, cursor) = regex(r"[0-9]+").unwrap().parse(cursor)?;
//!     Ok(((name, value), cursor))
//! });
//!
//! assert_eq!(run_to_end(&assignment, "x = 42").unwrap(), ("x", "42"));
//!
//! let error = run_to_end(&assignment, "x = y").unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "Parse failure at 1:5: regex /[0-9]+/ doesn't match\n-> \"x = y\"\n        ^"
//! );
//! ```

pub mod and;
pub mod between;
pub mod bind;
pub mod choice;
pub mod count;
pub mod cursor;
pub mod end;
pub mod error;
pub mod expression;
pub mod fail;
pub mod from_fn;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod many1;
pub mod map;
pub mod maybe;
pub mod or;
pub mod parser;
pub mod pattern;
pub mod peek;
pub mod run;
pub mod separated_list;
pub mod sequence;
pub mod surround;
pub mod trace;
pub mod until;
pub mod wrap_fail;

pub use and::{AndExt, and};
pub use between::between;
pub use bind::{BindExt, bind};
pub use choice::choice;
pub use count::count;
pub use cursor::Cursor;
pub use end::end;
pub use error::{CodeLoc, ParseError};
pub use expression::{
    Associativity, BinaryFn, ExpressionParser, ExpressionRef, Operator, UnaryFn, binary,
    build_expression_parser, unary,
};
pub use fail::fail;
pub use from_fn::from_fn;
pub use lazy::lazy;
pub use literal::literal;
pub use many::many;
pub use many1::many1;
pub use map::{MapExt, map};
pub use maybe::{MaybeExt, maybe};
pub use or::{OrExt, or};
pub use parser::{BoxedExt, BoxedParser, ParseResult, Parser};
pub use pattern::{regex, regex_match};
pub use peek::peek;
pub use run::{run, run_to_end};
pub use separated_list::{sep_by, sep_by1};
pub use sequence::sequence;
pub use surround::surround;
pub use trace::debug_trace;
pub use until::until;
pub use wrap_fail::{WrapFailExt, wrap_fail};

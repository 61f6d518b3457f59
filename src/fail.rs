use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always fails with a fixed message at the current position
///
/// Useful for inline validation inside [`from_fn`](crate::from_fn::from_fn)
/// or as the last alternative of a choice.
pub struct Fail<O> {
    message: Cow<'static, str>,
    _output: PhantomData<fn() -> O>,
}

impl<O> Fail<O> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            message: message.into(),
            _output: PhantomData,
        }
    }
}

impl<'code, O> Parser<'code> for Fail<O> {
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Err(ParseError::new(self.message.as_ref(), cursor))
    }
}

/// Convenience function to create a Fail parser
pub fn fail<O>(message: impl Into<Cow<'static, str>>) -> Fail<O> {
    Fail::new(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::literal::literal;
    use crate::run::run;

    #[test]
    fn test_force_failure() {
        let parser = literal("Almost").and(fail::<()>("Something descriptive"));

        let error = run(&parser, "Almost There").unwrap_err();
        assert!(
            error
                .to_string()
                .starts_with("Parse failure at 1:7: Something descriptive")
        );
    }

    #[test]
    fn test_fail_consumes_nothing() {
        let error = run(fail::<u8>("nope"), "abc").unwrap_err();

        assert_eq!(error.offset(), 0);
        assert_eq!(error.message(), "nope");
    }
}

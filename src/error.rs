use crate::cursor::Cursor;
use thiserror::Error;

/// Number of characters of input shown on each side of an error position
const CONTEXT_RADIUS: usize = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// The byte offset in `code` where the cursor encountered an error
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    /// Location at byte offset `loc` of `code`
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self { code, loc }
    }

    /// Byte offset of the location
    pub fn position(&self) -> usize {
        self.loc
    }

    /// The complete input the location points into
    pub fn source(&self) -> &'code str {
        self.code
    }

    /// 1-based line number of the location
    pub fn line(&self) -> usize {
        1 + self.before().bytes().filter(|&b| b == b'\n').count()
    }

    /// 1-based column of the location, counted in characters from the
    /// start of its line
    pub fn column(&self) -> usize {
        let before = self.before();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        1 + before[line_start..].chars().count()
    }

    /// Render a short excerpt of the input around the location
    ///
    /// The excerpt is shown in escaped form so control characters stay
    /// visible, with `...` marking truncation and a caret under the
    /// character at the location:
    ///
    /// ```text
    /// -> "...3 + * 4"
    ///          ^
    /// ```
    pub fn excerpt(&self) -> String {
        let loc = floor_char_boundary(self.code, self.loc);
        let start = self.code[..loc]
            .char_indices()
            .rev()
            .nth(CONTEXT_RADIUS - 1)
            .map_or(0, |(i, _)| i);
        let end = self.code[loc..]
            .char_indices()
            .nth(CONTEXT_RADIUS)
            .map_or(self.code.len(), |(i, _)| loc + i);

        let lead = if start == 0 { "" } else { "..." };
        let trail = if end == self.code.len() { "" } else { "..." };
        let snippet = format!("{lead}{}{trail}", &self.code[start..end]);

        // Escaped width of everything before the location, including the
        // opening quote
        let before = lead.len() + format!("{:?}", &self.code[start..loc]).chars().count() - 1;
        format!("-> {:?}\n   {}^", snippet, " ".repeat(before))
    }

    fn before(&self) -> &'code str {
        &self.code[..floor_char_boundary(self.code, self.loc)]
    }
}

fn floor_char_boundary(code: &str, index: usize) -> usize {
    let mut index = index.min(code.len());
    while !code.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// A positioned parse failure
///
/// This is the only failure kind: every primitive and combinator reports
/// mismatches through it. The message may be rewritten by
/// [`wrap_fail`](crate::wrap_fail::wrap_fail), the location never changes
/// once created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parse failure at {}:{}: {message}\n{}", .loc.line(), .loc.column(), .loc.excerpt())]
pub struct ParseError<'code> {
    message: String,
    loc: CodeLoc<'code>,
}

impl<'code> ParseError<'code> {
    /// Create an error at the cursor's position
    pub fn new(message: impl Into<String>, cursor: Cursor<'code>) -> Self {
        Self::at(message, cursor.loc())
    }

    pub fn at(message: impl Into<String>, loc: CodeLoc<'code>) -> Self {
        ParseError {
            message: message.into(),
            loc,
        }
    }

    /// The same failure with a different message
    pub fn with_message(self, message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
            loc: self.loc,
        }
    }

    /// The bare failure message, without position or excerpt
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn loc(&self) -> CodeLoc<'code> {
        self.loc
    }

    pub fn line(&self) -> usize {
        self.loc.line()
    }

    pub fn column(&self) -> usize {
        self.loc.column()
    }

    /// Returns the byte offset where this error occurred
    pub fn offset(&self) -> usize {
        self.loc.position()
    }

    pub fn input(&self) -> &'code str {
        self.loc.source()
    }

    /// Excerpt of the input around the failure with a caret marker
    pub fn context(&self) -> String {
        self.loc.excerpt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codeloc_first_line() {
        let loc = CodeLoc::new("hello world", 6);

        assert_eq!(loc.line(), 1);
        assert_eq!(loc.column(), 7);
        assert_eq!(loc.position(), 6);
    }

    #[test]
    fn test_codeloc_after_newline() {
        let loc = CodeLoc::new("\nfoobar", 4);

        assert_eq!(loc.line(), 2);
        assert_eq!(loc.column(), 4);
    }

    #[test]
    fn test_codeloc_eos_after_newline() {
        let loc = CodeLoc::new("hello\n", 6);

        assert_eq!(loc.line(), 2);
        assert_eq!(loc.column(), 1);
    }

    #[test]
    fn test_codeloc_counts_characters_not_bytes() {
        let loc = CodeLoc::new("héllo", 3);

        assert_eq!(loc.column(), 3);
    }

    #[test]
    fn test_excerpt_short_input() {
        let loc = CodeLoc::new("hello world", 6);

        assert_eq!(loc.excerpt(), "-> \"hello world\"\n          ^");
    }

    #[test]
    fn test_excerpt_truncated_both_sides() {
        let code = "abcdefghijklmnopqrstuvwxyz0123";
        let loc = CodeLoc::new(code, 15);

        let excerpt = loc.excerpt();
        let mut lines = excerpt.lines();
        let snippet = lines.next().unwrap();
        let marker = lines.next().unwrap();

        assert_eq!(snippet, "-> \"...fghijklmnopqrstuvwxy...\"");
        // Caret sits under 'p'
        let caret = marker.find('^').unwrap();
        assert_eq!(&snippet[caret..caret + 1], "p");
    }

    #[test]
    fn test_excerpt_escapes_control_characters() {
        let loc = CodeLoc::new("a\nb\tc", 4);

        let excerpt = loc.excerpt();
        assert!(excerpt.starts_with("-> \"a\\nb\\tc\""));

        let mut lines = excerpt.lines();
        let snippet = lines.next().unwrap();
        let caret = lines.next().unwrap().find('^').unwrap();
        assert_eq!(&snippet[caret..caret + 1], "c");
    }

    #[test]
    fn test_excerpt_empty_input() {
        let loc = CodeLoc::new("", 0);

        assert_eq!(loc.excerpt(), "-> \"\"\n    ^");
    }

    #[test]
    fn test_excerpt_multibyte_window() {
        // The window edges fall inside multi-byte characters and must widen
        let code = "ééééééééééxéééééééééé";
        let loc = CodeLoc::new(code, 20);

        let excerpt = loc.excerpt();
        assert!(excerpt.contains('x'));
    }

    #[test]
    fn test_excerpt_counts_characters_on_both_sides() {
        let code = "〇一二三四五六七八九十ABCDEFGHIJK";
        let loc = CodeLoc::new(code, code.find('A').unwrap());

        let excerpt = loc.excerpt();
        let snippet = excerpt.lines().next().unwrap();
        assert_eq!(snippet, "-> \"...一二三四五六七八九十ABCDEFGHIJ...\"");
    }

    #[test]
    fn test_display_includes_position_and_excerpt() {
        let error = ParseError::at("\"baz\" not found", CodeLoc::new("foobarbar", 9));

        let display = error.to_string();
        assert!(display.starts_with("Parse failure at 1:10: \"baz\" not found\n"));
        assert!(display.contains("-> \"foobarbar\""));
    }

    #[test]
    fn test_with_message_preserves_location() {
        let error = ParseError::at("first message", CodeLoc::new("\n\nabc", 3));
        let rewritten = error.clone().with_message("rewritten");

        assert_eq!(rewritten.message(), "rewritten");
        assert_eq!(rewritten.offset(), error.offset());
        assert_eq!(rewritten.line(), 3);
        assert_eq!(rewritten.column(), 2);
        assert_eq!(rewritten.input(), "\n\nabc");
    }
}

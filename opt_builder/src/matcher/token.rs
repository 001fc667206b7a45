use std::collections::VecDeque;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The classification of a raw command line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `--name`, `--name=value`.
    Long,
    /// `-n`, `-abc`, `-n5`.
    Short,
    /// Anything else, including everything after `--`.
    Text,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Long => write!(f, "long"),
            TokenKind::Short => write!(f, "short"),
            TokenKind::Text => write!(f, "text"),
        }
    }
}

/// A classified command line input, with its leading dashes stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    kind: TokenKind,
    value: String,
}

pub(crate) type Tokens = VecDeque<Token>;

impl Token {
    pub(crate) fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub(crate) fn kind(&self) -> TokenKind {
        self.kind
    }

    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn into_value(self) -> String {
        self.value
    }

    pub(crate) fn is_text(&self) -> bool {
        self.kind == TokenKind::Text
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Long => write!(f, "--{}", self.value),
            TokenKind::Short => write!(f, "-{}", self.value),
            TokenKind::Text => write!(f, "{}", self.value),
        }
    }
}

/// Classify the raw inputs, in order.
///
/// Everything following a bare `--` is text, verbatim.
pub(crate) fn tokenize<I, S>(inputs: I) -> Tokens
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens = Tokens::default();
    let mut inputs = inputs.into_iter();

    while let Some(input) = inputs.next() {
        let input = input.as_ref();

        if input == "--" {
            tokens.extend(inputs.by_ref().map(|rest| Token::new(TokenKind::Text, rest.as_ref())));
            break;
        } else if let Some(value) = input.strip_prefix("--") {
            tokens.push_back(Token::new(TokenKind::Long, value));
        } else if let Some(value) = input.strip_prefix('-') {
            tokens.push_back(Token::new(TokenKind::Short, value));
        } else {
            tokens.push_back(Token::new(TokenKind::Text, input));
        }
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Tokenized: {tokens:?}.");
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn t(kind: TokenKind, value: &str) -> Token {
        Token::new(kind, value)
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec!["abc"], vec![t(TokenKind::Text, "abc")])]
    #[case(vec!["-v"], vec![t(TokenKind::Short, "v")])]
    #[case(vec!["-abc"], vec![t(TokenKind::Short, "abc")])]
    #[case(vec!["--help"], vec![t(TokenKind::Long, "help")])]
    #[case(vec!["--level=5"], vec![t(TokenKind::Long, "level=5")])]
    #[case(vec!["-"], vec![t(TokenKind::Short, "")])]
    #[case(vec!["-v", "--", "-h"], vec![t(TokenKind::Short, "v"), t(TokenKind::Text, "-h")])]
    #[case(vec!["--", "--", "--x", "y"], vec![t(TokenKind::Text, "--"), t(TokenKind::Text, "--x"), t(TokenKind::Text, "y")])]
    #[case(vec!["a", "-b", "--c", "--"], vec![t(TokenKind::Text, "a"), t(TokenKind::Short, "b"), t(TokenKind::Long, "c")])]
    #[case(vec!["-めこ"], vec![t(TokenKind::Short, "めこ")])]
    fn tokenize_inputs(#[case] inputs: Vec<&str>, #[case] expected: Vec<Token>) {
        assert_eq!(tokenize(inputs), Tokens::from(expected));
    }

    #[rstest]
    #[case(t(TokenKind::Long, "help"), "--help")]
    #[case(t(TokenKind::Short, "abc"), "-abc")]
    #[case(t(TokenKind::Text, "-h"), "-h")]
    fn display(#[case] token: Token, #[case] expected: &str) {
        assert_eq!(token.to_string(), expected);
    }
}

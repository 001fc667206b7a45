use std::sync::LazyLock;

use regex::Regex;

use crate::matcher::token::{Token, TokenKind, Tokens};
use crate::parser::DefinitionError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

static SWITCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<dash>-{0,2})(?P<name>\w+(?:[\w-]*\w)?)$").expect("static regex must compile")
});

/// How a matched switch was taken off the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Consumed {
    /// The token was removed entirely (any `=value` suffix was pushed back as text).
    Whole,
    /// The switch was the head of a short token group; the rest of the group is at the front.
    Residual,
}

/// A single dashed form of a parameter, such as `-h` or `--help`.
///
/// Switches are equal when their names are equal, regardless of being short or long.
#[derive(Debug, Clone, Eq)]
pub(crate) struct Switch {
    name: String,
    short: bool,
}

impl PartialEq for Switch {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl std::hash::Hash for Switch {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Switch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.short {
            write!(f, "-{}", self.name)
        } else {
            write!(f, "--{}", self.name)
        }
    }
}

impl Switch {
    pub(crate) fn new(definition: &str) -> Result<Self, DefinitionError> {
        let captures = SWITCH_RE
            .captures(definition)
            .ok_or_else(|| DefinitionError::InvalidSwitch(definition.to_string()))?;
        let name = captures["name"].to_string();
        let short = match captures["dash"].len() {
            0 => name.chars().count() == 1,
            1 => true,
            _ => false,
        };

        Ok(Self { name, short })
    }

    /// Parse a comma separated definition, such as `-h, --help`.
    /// Repeated names are only kept once, at their first position.
    pub(crate) fn parse_list(definition: &str) -> Result<Vec<Self>, DefinitionError> {
        let mut switches: Vec<Switch> = Vec::default();

        for part in definition.split(',') {
            let switch = Switch::new(part.trim())?;

            if !switches.contains(&switch) {
                switches.push(switch);
            }
        }

        Ok(switches)
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn is_short(&self) -> bool {
        self.short
    }

    /// Whether the front of the token stream triggers this switch.
    /// Short switches only compare the first character of their name.
    pub(crate) fn matches(&self, tokens: &Tokens) -> bool {
        match tokens.front() {
            Some(token) => match token.kind() {
                TokenKind::Long => {
                    !self.short && token.value().split('=').next() == Some(self.name.as_str())
                }
                TokenKind::Short => {
                    self.short
                        && token.value().chars().next().is_some()
                        && token.value().chars().next() == self.name.chars().next()
                }
                TokenKind::Text => false,
            },
            None => false,
        }
    }

    /// Take this switch off the front of the token stream.
    /// Must only be called after [`Switch::matches`].
    pub(crate) fn consume(&self, tokens: &mut Tokens) -> Consumed {
        let token = tokens
            .pop_front()
            .expect("internal error - consume must follow a successful match");

        if self.short && token.value().chars().nth(1).is_some() {
            let mut chars = token.value().chars();
            chars.next();
            let residual = Token::new(TokenKind::Short, chars.as_str());

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Switch {self} leaves residual {residual}.");
            }

            tokens.push_front(residual);
            Consumed::Residual
        } else {
            if let Some((_, value)) = token.value().split_once('=') {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Switch {self} splits off value '{value}'.");
                }

                tokens.push_front(Token::new(TokenKind::Text, value));
            }

            Consumed::Whole
        }
    }
}

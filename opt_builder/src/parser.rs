use thiserror::Error;

use crate::matcher::TokenKind;
use crate::model::Arity;

mod base;
mod interface;
mod middleware;
mod printer;

pub(crate) use base::Parser;
pub(crate) use interface::{ColumnRenderer, ConsoleInterface};
pub use interface::UserInterface;
pub use middleware::GeneralParser;
pub(crate) use printer::Printer;

#[cfg(test)]
pub(crate) use interface::util;

/// A mistake in the declared command line interface.
/// Raised while defining parameters and sub-commands, never while parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DefinitionError {
    /// The definition is not of the form `-n`, `--name`, or `name`.
    #[error("Invalid command line switch '{0}'.")]
    InvalidSwitch(String),

    /// A string argument count that is neither numeric nor a known sentinel.
    #[error("Invalid argument count '{0}': not an integer, '+', '*', 'inf', or 'infinity'.")]
    InvalidArityLiteral(String),

    /// An argument count whose lower end is below zero.
    #[error("Argument count must not be negative.")]
    NegativeArity,

    /// An exclusive range such as `2..2`.
    #[error("Argument count range '{0}' is empty.")]
    EmptyArity(String),

    /// A [`Nargs::Bounds`](crate::Nargs::Bounds) without precisely two elements.
    #[error("Argument count bounds must have precisely two elements (provided={0}).")]
    ArityBoundsLength(usize),

    /// A bounds pair where both ends are unbounded.
    #[error("Argument count lower bound must be finite.")]
    UnboundedMinimum,

    /// A free-text parameter with an arity of `0`.
    #[error("Free-text parameter '{0}' must accept at least one argument.")]
    TextWithoutArguments(String),

    /// Two parameters share a name or a switch.
    #[error("Parameter '{definition}' collides with already registered parameter '{existing}'.")]
    Collision {
        /// The definition being registered.
        definition: String,
        /// The name of the registered parameter it collides with.
        existing: String,
    },

    /// Sub-command names must be unique within their parent.
    #[error("Command '{0}' is already registered.")]
    DuplicateCommand(String),

    /// A command may have sub-commands or free-text parameters, but not both.
    #[error("Command '{0}' can only have sub-commands OR free-text parameters.")]
    MixedTextAndCommands(String),
}

/// A mismatch between the command line input and the declared interface.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A triggered parameter collected a number of arguments outside its arity.
    #[error("Wrong number of arguments for '{name}' (provided={provided}, expected={expected}).")]
    ArityMismatch {
        /// The parameter name.
        name: String,
        /// The number of arguments collected.
        provided: usize,
        /// The arity of the parameter.
        expected: Arity,
    },

    /// A token which no parameter consumed and which names no sub-command.
    #[error("Unknown option ({kind}): {token}")]
    UnknownToken {
        /// The classification of the token.
        kind: TokenKind,
        /// The token as it was written, dashes included.
        token: String,
    },
}

//! Builder module for `opt`.
//! See the `opt` crate documentation for full details.
#![deny(missing_docs)]
mod api;
mod matcher;
mod model;
mod parser;

pub use api::*;
pub use matcher::TokenKind;
pub use model::{Arity, Limit, Nargs, Value};
pub use parser::{DefinitionError, GeneralParser, ParseError, UserInterface};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

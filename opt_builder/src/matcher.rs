mod switch;
mod token;

pub(crate) use switch::{Consumed, Switch};
pub(crate) use token::{tokenize, Token, Tokens};
pub use token::TokenKind;

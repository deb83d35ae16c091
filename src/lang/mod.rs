/*!
# Rust Language Module

This Rust module splits input lines into tokens and classifies them.

*/

#[macro_use]
mod error;
mod lex;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::literal;
pub use token::{assignment, dup_count, is_reserved, Token, Word};

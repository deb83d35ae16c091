/*!
## Rust Machine Module

This Rust module holds the calculator state and evaluates lines of tokens
against it.

*/

mod format;
mod function;
mod help;
mod macros;
mod opcode;
mod operation;
mod runtime;
mod session;
mod stack;
mod val;
mod var;

pub use format::Radix;
pub use function::Function;
pub use help::HELP;
pub use macros::Macros;
pub use opcode::Opcode;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::MAX_PENDING;
pub use session::Session;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;

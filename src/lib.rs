//! # RPN
//!
//! A Reverse Polish Notation calculator with variables, macros and
//! a `repeat` directive.
//!
//! Run the executable without arguments for an interactive session, or
//! pass an expression to evaluate it once and print the stack.
//! ```text
//! $ rpn 1 2 + 3 + 4 + 5 +
//! 15
//! $ rpn
//! > 1024 x=
//! [x=1024] > macro kib 1024 *
//! [x=1024] [kib: 1024 *] > 4 kib
//! [x=1024] [kib: 1024 *] 4096 >
//! ```
//!
//! Numbers are 64-bit integers or floats. Integer results stay exact
//! and a float with no fractional part becomes an integer again.
//! `help` lists every command.
//!
//! Library users drive a [`mach::Runtime`]: `enter` a line, then call
//! `execute` until it stops.

pub mod lang;
pub mod mach;
pub mod term;

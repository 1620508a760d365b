#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

//! Truthtable, a crate for parsing boolean expressions and tabulating them.
//!
//! This crate parses boolean expressions written in infix notation and
//! evaluates them over every assignment of their variables. The easiest way
//! to evaluate a single expression is the [`eval`](fn.eval.html) function:
//!
//! ```
//! use truthtable::Assignment;
//! assert_eq!(truthtable::eval("true and not false", &Assignment::new()), Ok(true));
//! ```
//!
//! The second argument to `eval` is an [`Assignment`](type.Assignment.html),
//! giving values to variables. Variables missing from it are `false`:
//!
//! ```
//! use truthtable::Assignment;
//!
//! let mut assignment = Assignment::new();
//! assignment.insert("a".into(), true);
//! assert_eq!(truthtable::eval("a and b", &assignment), Ok(false));
//! assert_eq!(truthtable::eval("a or b", &assignment), Ok(true));
//! ```
//!
//! Parsing can be separated from evaluation with the [`Expr`](struct.Expr.html)
//! type, and a whole truth table built with [`TruthTable`](struct.TruthTable.html):
//!
//! ```
//! use truthtable::{Expr, TruthTable};
//!
//! let expr = Expr::parse("p imply q").unwrap();
//! let table = TruthTable::new(&expr);
//! assert_eq!(table.to_string(), "\
//! P | Q | Result
//! --------------
//! 0 | 0 | true
//! 1 | 0 | false
//! 0 | 1 | true
//! 1 | 1 | true
//! ");
//! ```
//!
//! # Language definition
//!
//! Tokens are separated by whitespace; parentheses must stand alone, as in
//! `( a or b ) and c`. The language contains:
//!
//! - the constants `true` and `false`;
//! - variables, made of ASCII letters only. Variable names are case
//!   sensitive: `A` and `a` are two different variables;
//! - `not`, applying to the following operand;
//! - the logical operators `and` (`∧`), `or` (`∨`), `xor` (`⊕`) and
//!   `imply` (`→`);
//! - the comparison operators `eq` (`=`) and `neq` (`≠`);
//! - left and right parenthesis.
//!
//! Keywords are case insensitive. Comparisons bind looser than the logical
//! operators, and all binary operators are left associative: `a = b and c`
//! is `a = (b and c)`, and `a and b or c` is `(a and b) or c`.
//!
//! Tokens following a complete expression are ignored.

#[macro_use]
extern crate lazy_static;

mod ast;
mod error;
mod expr;
mod lexer;
mod parser;
mod table;
mod token;
mod util;

pub use ast::Ast;
pub use error::Error;
pub use expr::{eval, Assignment, Expr};
pub use lexer::{is_variable, tokenize};
pub use parser::parse;
pub use table::{row_count, Assignments, Classification, Row, Rows, TruthTable};
pub use token::{Level, Op, Token};

//! Evaluates single-line arithmetic expressions over `+ - * /` and
//! parentheses, with the usual precedence and left-associativity.
//!
//! ```
//! assert_eq!(bcalc::evaluate("(2+3)*4").ok(), Some(20.0));
//! assert_eq!(bcalc::GeneralFloat(1.0 / 3.0).to_string(), "0.333333");
//! ```

#[path = "a10_lexer.rs"]
mod lexer;
#[path = "a15_token.rs"]
mod token;
#[path = "a20_eval.rs"]
mod eval;
#[path = "a21_eval_err.rs"]
mod eval_err;
#[path = "a45_general_float.rs"]
mod general_float;
#[path = "b04_pos.rs"]
mod pos;
#[path = "b05_span.rs"]
mod span;
#[path = "b10_errors.rs"]
mod errors;

pub use errors::{Diag, ErrorKind};
pub use eval::evaluate;
pub use general_float::GeneralFloat;
pub use lexer::{next_token, Lexer};
pub use pos::{ByteLen, BytePos};
pub use span::Span;
pub use token::{BinOpToken, Token, TokenKind};

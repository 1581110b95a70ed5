use crate::errors::{Diag, Diagnostic};
use crate::eval_err as EE;
use crate::lexer::Lexer;
use crate::span::{respan, span, Spanned};
use crate::token::*;

/// Evaluates one line as it is parsed; no syntax tree is built.
///
/// ```text
/// Expression := Term (('+' | '-') Term)*
/// Term       := Factor (('*' | '/') Factor)*
/// Factor     := Number | '(' Expression ')'
/// ```
///
/// There is no unary minus: `-1` is an error, write `0-1`.
struct Evaluator<'a> {
    lexer: Lexer<'a>,
    /// The next token that has not been consumed yet.
    lookahead: Token,
    /// Parentheses currently open.
    depth: usize,
}

/// Each '(' costs three stack frames; stop well before the stack runs out.
pub(crate) const MAX_PAREN_DEPTH: usize = 256;

type ValueResult = Result<f64, Diag>;
type FactorResult = Result<Spanned<f64>, Diag>;

pub fn evaluate(line: &str) -> ValueResult {
    Evaluator::new(line).evaluate()
}

fn err<T>(x: impl Diagnostic) -> Result<T, Diag> {
    Err(x.into_diag())
}

impl<'a> Evaluator<'a> {
    fn new(input: &'a str) -> Evaluator<'a> {
        let mut lexer = Lexer::new(input);
        let lookahead = lexer.next_token();
        Evaluator {
            lexer,
            lookahead,
            depth: 0,
        }
    }

    fn evaluate(&mut self) -> ValueResult {
        let value = self.eval_expression()?;
        self.assert_stream_done()?;
        Ok(value)
    }

    fn assert_stream_done(&mut self) -> Result<(), Diag> {
        let tok = self.lookahead;
        match tok.kind {
            End => Ok(()),
            Invalid(c) => err(EE::InvalidCharacter { c }.span(tok.span)),
            found => err(EE::TrailingToken { found }.span(tok.span)),
        }
    }

    /// Hand out the lookahead and fetch the token after it.
    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.lookahead, next)
    }

    fn eval_expression(&mut self) -> ValueResult {
        let mut result = self.eval_term()?;
        while let BinOp(op @ (Plus | Minus)) = self.lookahead.kind {
            self.advance();
            let right = self.eval_term()?;
            match op {
                Plus => result += right,
                _ => result -= right,
            }
        }
        Ok(result)
    }

    fn eval_term(&mut self) -> ValueResult {
        let mut result = self.eval_factor()?.node;
        while let BinOp(op @ (Star | Slash)) = self.lookahead.kind {
            self.advance();
            let right = self.eval_factor()?;
            match op {
                Star => result *= right.node,
                _ => {
                    if right.node == 0.0 {
                        return err(EE::DivisionByZero.span(right.span));
                    }
                    result /= right.node
                }
            }
        }
        Ok(result)
    }

    fn eval_factor(&mut self) -> FactorResult {
        let start = self.advance();
        match start.kind {
            Number(x) => Ok(respan(x, start.span)),
            OpenParen => {
                if self.depth == MAX_PAREN_DEPTH {
                    return err(EE::NestedTooDeep {
                        limit: MAX_PAREN_DEPTH,
                    }
                    .span(start.span));
                }
                self.depth += 1;
                let inner = self.eval_expression()?;
                let close = self.lookahead;
                let CloseParen = close.kind else {
                    return err(EE::MissingCloseParen {
                        open_paren: start.span,
                        found: close.kind,
                    }
                    .span(close.span));
                };
                self.advance();
                self.depth -= 1;
                Ok(respan(inner, span(start.span.lo, close.span.hi)))
            }
            Invalid(c) => err(EE::InvalidCharacter { c }.span(start.span)),
            found @ (BinOp(_) | CloseParen | End) => {
                err(EE::ExpectedOperand { found }.span(start.span))
            }
        }
    }
}

#[cfg(test)]
mod eval_tests {
    use super::*;
    use crate::errors::ErrorKind;
    use expect_test::{expect, Expect};

    fn check_eval(input: &str, expect: Expect) {
        let actual = match evaluate(input) {
            Ok(value) => format!("{:?}", value),
            Err(diag) => format!("{:?}", diag),
        };
        expect.assert_eq(&actual)
    }

    fn error_kind(input: &str) -> ErrorKind {
        match evaluate(input) {
            Ok(value) => panic!("Expected {input:?} to fail, got {value}"),
            Err(diag) => diag.kind,
        }
    }

    #[test]
    fn smoke_test() {
        check_eval("12*3+8/4-2", expect!["36.0"]);
        check_eval("  2 * (3 + 4) * 5\n", expect!["70.0"]);
    }

    #[test]
    fn atoms() {
        check_eval("7", expect!["7.0"]);
        check_eval("3.14", expect!["3.14"]);
        check_eval(".5", expect!["0.5"]);
        check_eval("((7))", expect!["7.0"]);
    }

    #[test]
    fn precedence() {
        check_eval("2+3*4", expect!["14.0"]);
        check_eval("(2+3)*4", expect!["20.0"]);
        check_eval("2*3+4", expect!["10.0"]);
        check_eval("2*(3+4)", expect!["14.0"]);
        check_eval("10-4/2", expect!["8.0"]);
    }

    #[test]
    fn left_associative() {
        check_eval("8-3-2", expect!["3.0"]);
        check_eval("8-(3-2)", expect!["7.0"]);
        check_eval("16/4/2", expect!["2.0"]);
        check_eval("16/(4/2)", expect!["8.0"]);
        check_eval("2*3/4*5", expect!["7.5"]);
    }

    #[test]
    fn floating_point() {
        check_eval("1/3", expect!["0.3333333333333333"]);
        check_eval("0.1+0.2", expect!["0.30000000000000004"]);
        check_eval("1 - 5", expect!["-4.0"]);
        check_eval("10/4", expect!["2.5"]);
    }

    #[test]
    fn division_by_zero() {
        check_eval("1/0", expect!["At 3: Division by zero."]);
        check_eval("1/0.0", expect!["At 3-5: Division by zero."]);
        check_eval("1/(2-2)", expect!["At 3-7: Division by zero."]);
        check_eval("(1+(4/(3-3)))", expect!["At 7-11: Division by zero."]);
        assert_eq!(error_kind("((1/(2-2)))"), ErrorKind::DivisionByZero);
        // Zero on the left is fine.
        check_eval("0/5", expect!["0.0"]);
    }

    #[test]
    fn multiple_points() {
        check_eval(
            "1.2.3",
            expect!["At 4-5: Unexpected token after expression: found number 0.3."],
        );
        assert_eq!(error_kind("1.2.3"), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn unbalanced_parens() {
        check_eval(
            "(1+2",
            expect!["At 5: Expected closing parenthesis for the '(' at 1, found end of input."],
        );
        check_eval(
            "1+2)",
            expect!["At 4: Unexpected token after expression: found ')'."],
        );
        check_eval(
            "((1)",
            expect!["At 5: Expected closing parenthesis for the '(' at 1, found end of input."],
        );
        check_eval(
            "(1 2)",
            expect!["At 4: Expected closing parenthesis for the '(' at 1, found number 2."],
        );
        check_eval(
            "()",
            expect!["At 2: Unexpected token: expected a number or '(', found ')'."],
        );
        assert_eq!(error_kind("(1+2"), ErrorKind::MissingClosingParen);
        assert_eq!(error_kind("1+2)"), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn empty() {
        check_eval(
            "",
            expect!["At 1: Unexpected token: expected a number or '(', found end of input."],
        );
        check_eval(
            " \t\n",
            expect!["At 4: Unexpected token: expected a number or '(', found end of input."],
        );
        assert_eq!(error_kind("\n"), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn no_unary_operators() {
        check_eval(
            "-1",
            expect!["At 1: Unexpected token: expected a number or '(', found '-'."],
        );
        check_eval(
            "+1",
            expect!["At 1: Unexpected token: expected a number or '(', found '+'."],
        );
        check_eval(
            "2*-3",
            expect!["At 3: Unexpected token: expected a number or '(', found '-'."],
        );
        check_eval(
            "1+",
            expect!["At 3: Unexpected token: expected a number or '(', found end of input."],
        );
    }

    #[test]
    fn invalid_characters() {
        check_eval("x", expect!["At 1: Unrecognized character 'x'."]);
        check_eval("2 @ 3", expect!["At 3: Unrecognized character '@'."]);
        check_eval("1 + x", expect!["At 5: Unrecognized character 'x'."]);
        check_eval("2^3", expect!["At 2: Unrecognized character '^'."]);
        assert_eq!(error_kind("2 @ 3"), ErrorKind::InvalidCharacter);
        // Where ')' is required, the missing paren is what gets reported.
        check_eval(
            "(1 @",
            expect!["At 4: Expected closing parenthesis for the '(' at 1, found '@'."],
        );
    }

    #[test]
    fn nesting_limit() {
        let deepest = format!(
            "{}1{}",
            "(".repeat(MAX_PAREN_DEPTH),
            ")".repeat(MAX_PAREN_DEPTH)
        );
        assert_eq!(evaluate(&deepest).ok(), Some(1.0));
        // Depth is released at each ')', so siblings don't add up.
        let siblings = format!("{deepest}+{deepest}");
        assert_eq!(evaluate(&siblings).ok(), Some(2.0));

        check_eval(
            &format!("{}1", "(".repeat(100_000)),
            expect!["At 257: Parentheses nested more than 256 deep."],
        );
        assert_eq!(
            error_kind(&format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000))),
            ErrorKind::UnexpectedToken
        );
    }

    /// Each expression is evaluated both by the calculator (as text) and by
    /// Rust itself; IEEE arithmetic in the same order must agree exactly.
    macro_rules! check_against_rust {
        ($($e:expr),+ $(,)?) => {$(
            let source = stringify!($e);
            let expected: f64 = $e;
            assert_eq!(evaluate(source).ok(), Some(expected), "{source}");
        )+};
    }

    #[test]
    fn agrees_with_rust_arithmetic() {
        check_against_rust!(
            1.0 + 2.0 * 3.0 - 4.0 / 8.0,
            2.5 * 4.0 + 1.5 / 3.0 * 6.0 - 7.0,
            (1.5 + 2.25) * (3.0 - 0.5) / 0.75,
            100.0 - 3.0 * 7.0 / 2.0 + 0.1 - 0.2,
            9.0 / 3.0 / 3.0 * 2.0 - 1.0 - 1.0,
            ((2.0 + 3.0) * (4.0 + 5.0) - (6.0 - 1.0)) / 7.0,
            0.1 + 0.2 * 0.3 - 0.4 / 0.5,
            12.0 * (3.0 + 8.0 / (4.0 - 2.0)) - 2.0,
            1.0 / 3.0 + 1.0 / 3.0 + 1.0 / 3.0,
            123.456 * 7.89 - 1000.0 / 3.0,
        );
    }

    #[test]
    fn reentrant() {
        let mut a = Evaluator::new("1+2");
        let mut b = Evaluator::new("3*4");
        assert_eq!(b.evaluate().ok(), Some(12.0));
        assert_eq!(a.evaluate().ok(), Some(3.0));
    }
}

use crate::pos::{ByteLen, BytePos};
use crate::span::span;
use crate::token::*;
use std::str::Chars;

/// Produces tokens one at a time on request. Knows nothing about the grammar.
///
/// Before any lexing, or after finishing a token, `chars` points to the first
/// character that has not been in a token yet.
pub struct Lexer<'a> {
    /// The whole line, used to turn `chars` back into a byte offset.
    input: &'a str,
    /// Iterator pointing at the current character
    chars: Chars<'a>,
    /// Set once `End` or `Invalid` has been handed out by the iterator.
    done: bool,
}

/// Lex a single token from `line`, starting at byte offset `cursor`.
/// Returns the token and the offset just past it.
///
/// A `cursor` past the end of the line (or inside a multi-byte character)
/// lexes as `End`.
pub fn next_token(line: &str, cursor: usize) -> (Token, usize) {
    let mut lexer = Lexer::at(line, cursor);
    let token = lexer.next_token();
    (token, lexer.pos().into())
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Lexer<'a> {
        Lexer::at(input, 0)
    }

    fn at(input: &'a str, cursor: usize) -> Lexer<'a> {
        let rest = input.get(cursor..).unwrap_or("");
        Lexer {
            input,
            chars: rest.chars(),
            done: false,
        }
    }

    /// Byte offset of the first character not yet consumed.
    pub fn pos(&self) -> BytePos {
        BytePos::from(self.input.len() - self.chars.as_str().len())
    }

    /// Return the char that `chars` points to, and shift it along.
    #[mutants::skip] // Will loop forever if it doesn't call next()
    fn consume(&mut self) -> Option<char> {
        self.chars.next()
    }

    /// Peeks the next character without consuming it. `None` at end of line.
    fn peek(&self) -> Option<char> {
        // `.next()` optimizes better than `.nth(0)` according to Rust repo.
        self.chars.clone().next()
    }

    /// Eats characters while predicate returns true, or until the end of line.
    /// After calling this method, `chars` will point to one after the last
    /// character satisfying the predicate.
    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.consume();
        }
    }

    /// Skips whitespace, then lexes one token.
    pub fn next_token(&mut self) -> Token {
        self.eat_while(is_whitespace);
        let lo = self.pos();
        let kind = match self.peek() {
            None => End,
            Some(c) if is_digit(c) || c == '.' => self.number(),
            Some('+') => self.single(BinOp(Plus)),
            Some('-') => self.single(BinOp(Minus)),
            Some('*') => self.single(BinOp(Star)),
            Some('/') => self.single(BinOp(Slash)),
            Some('(') => self.single(OpenParen),
            Some(')') => self.single(CloseParen),
            Some(c) => {
                // Not consumed: the span covers the character for diagnostics only.
                let hi = lo + ByteLen::from(c.len_utf8());
                return Token::new(Invalid(c), span(lo, hi));
            }
        };
        Token::new(kind, span(lo, self.pos()))
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.consume();
        kind
    }

    /// Digits with at most one '.', accumulated digit by digit and scaled
    /// down once at the end.
    fn number(&mut self) -> TokenKind {
        let mut value = 0.0;
        let mut divisor = 1.0;
        let mut seen_point = false;
        while let Some(c) = self.peek() {
            match c {
                '.' if !seen_point => seen_point = true,
                '0'..='9' => {
                    value = value * 10.0 + f64::from(c as u8 - b'0');
                    if seen_point {
                        divisor *= 10.0;
                    }
                }
                // A second '.' starts the next token.
                _ => break,
            }
            self.consume();
        }
        Number(value / divisor)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Stops before `End`, and right after the first `Invalid`.
    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        match token.kind {
            End => {
                self.done = true;
                None
            }
            Invalid(_) => {
                self.done = true;
                Some(token)
            }
            _ => Some(token),
        }
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'   // \t
        | '\u{000A}' // \n
        | '\u{000B}' // vertical tab
        | '\u{000C}' // form feed
        | '\u{000D}' // \r
        | '\u{0020}' // space
    )
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

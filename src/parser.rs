//! Recursive-descent parser for boolean expressions.
//!
//! The grammar has two binary precedence levels, both left associative:
//!
//! ```text
//! expression := term ( ("=" | "eq" | "≠" | "neq") term )*
//! term       := factor ( ("and" | "or" | "xor" | "imply" | "∧" | "∨" | "⊕" | "→") factor )*
//! factor     := "not" factor | "true" | "false" | variable | "(" expression ")"
//! ```
//!
//! Comparisons bind looser than the logical connectives, so `a = b and c`
//! is `a = (b and c)`.

use crate::ast::Ast;
use crate::error::Error;
use crate::token::{Level, Token};

/// Parse a sequence of raw tokens into an [`Ast`].
///
/// Tokens left over after a complete expression are ignored, with a warning
/// in the log.
pub fn parse(tokens: &[&str]) -> Result<Ast, Error> {
    log::debug!("parsing {} tokens", tokens.len());
    let mut parser = Parser::new(tokens);
    let ast = parser.expression()?;
    if let Some(extra) = parser.peek_raw() {
        log::warn!(
            "ignoring {} trailing token(s) starting at {:?}",
            parser.remaining(),
            extra
        );
    }
    Ok(ast)
}

/// Cursor over the token sequence
struct Parser<'t, 'a> {
    tokens: &'t [&'a str],
    position: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn new(tokens: &'t [&'a str]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn peek_raw(&self) -> Option<&'a str> {
        self.tokens.get(self.position).copied()
    }

    fn peek(&self) -> Option<Token<'a>> {
        self.peek_raw().map(Token::classify)
    }

    fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }

    fn advance(&mut self) -> Option<(&'a str, Token<'a>)> {
        let raw = self.peek_raw()?;
        self.position += 1;
        let token = Token::classify(raw);
        log::trace!("token #{}: {:?} -> {:?}", self.position, raw, token);
        Some((raw, token))
    }

    /// Parse a left-associative chain of `operand`s joined by operators of
    /// the given `level`
    fn chain<F>(&mut self, level: Level, mut operand: F) -> Result<Ast, Error>
    where
        F: FnMut(&mut Self) -> Result<Ast, Error>,
    {
        let mut left = operand(self)?;
        while let Some(Token::Op(op)) = self.peek() {
            if op.level() != level {
                break;
            }
            self.advance();
            let right = operand(self)?;
            left = Ast::binary(op, left, right);
        }
        Ok(left)
    }

    fn expression(&mut self) -> Result<Ast, Error> {
        self.chain(Level::Comparison, Self::term)
    }

    fn term(&mut self) -> Result<Ast, Error> {
        self.chain(Level::Logical, Self::factor)
    }

    fn factor(&mut self) -> Result<Ast, Error> {
        let (raw, token) = self.advance().ok_or_else(Error::unexpected_end)?;
        match token {
            Token::Not => Ok(Ast::negate(self.factor()?)),
            Token::Literal(value) => Ok(Ast::Constant(value)),
            Token::Variable(name) => Ok(Ast::Variable(name.into())),
            Token::LParen => {
                let inner = self.expression()?;
                match self.advance() {
                    Some((_, Token::RParen)) => Ok(inner),
                    _ => Err(Error::unclosed_paren()),
                }
            }
            Token::Op(_) | Token::RParen | Token::Unknown(_) => Err(Error::unexpected_token(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::ast::Ast;
    use crate::error::Error;
    use crate::lexer::tokenize;
    use crate::token::Op;
    use test_case::test_case;

    fn var(name: &str) -> Ast {
        Ast::Variable(name.into())
    }

    fn parse_str(input: &str) -> Result<Ast, Error> {
        parse(&tokenize(input))
    }

    #[test]
    fn logical_chain_is_left_associative() {
        let expected = Ast::binary(Op::Or, Ast::binary(Op::And, var("a"), var("b")), var("c"));
        assert_eq!(parse_str("a and b or c"), Ok(expected));

        let expected = Ast::binary(
            Op::Imply,
            Ast::binary(Op::Imply, var("a"), var("b")),
            var("c"),
        );
        assert_eq!(parse_str("a → b imply c"), Ok(expected));
    }

    #[test]
    fn comparison_binds_looser() {
        let expected = Ast::binary(Op::Equal, var("a"), Ast::binary(Op::And, var("b"), var("c")));
        assert_eq!(parse_str("a = b and c"), Ok(expected));

        let expected = Ast::binary(
            Op::Equal,
            Ast::binary(Op::And, var("a"), var("b")),
            Ast::binary(Op::And, var("c"), var("d")),
        );
        assert_eq!(parse_str("a and b = c and d"), Ok(expected));

        let expected = Ast::binary(
            Op::NotEqual,
            Ast::binary(Op::Equal, var("a"), var("b")),
            var("c"),
        );
        assert_eq!(parse_str("a EQ b neq c"), Ok(expected));
    }

    #[test]
    fn parentheses_and_negation() {
        let expected = Ast::binary(Op::And, var("a"), Ast::binary(Op::Or, var("b"), var("c")));
        assert_eq!(parse_str("a and ( b or c )"), Ok(expected));

        assert_eq!(
            parse_str("not not a"),
            Ok(Ast::negate(Ast::negate(var("a"))))
        );

        let expected = Ast::binary(Op::And, Ast::negate(var("a")), var("b"));
        assert_eq!(parse_str("NOT a ∧ b"), Ok(expected));

        let expected = Ast::negate(Ast::binary(Op::Xor, var("a"), Ast::Constant(true)));
        assert_eq!(parse_str("not ( a xor TRUE )"), Ok(expected));
    }

    #[test]
    fn keywords_and_variables() {
        assert_eq!(
            parse_str("A and a"),
            Ok(Ast::binary(Op::And, var("A"), var("a")))
        );
        assert_eq!(parse_str("False"), Ok(Ast::Constant(false)));
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        assert_eq!(parse_str("a b"), Ok(var("a")));
        assert_eq!(parse_str("a ) or b"), Ok(var("a")));
    }

    #[test_case("( a and b" => "expected closing parenthesis" ; "unclosed parenthesis")]
    #[test_case("( a b )" => "expected closing parenthesis" ; "junk before closing parenthesis")]
    #[test_case("a and" => "unexpected end of input" ; "missing right operand")]
    #[test_case("" => "unexpected end of input" ; "empty input")]
    #[test_case("not" => "unexpected end of input" ; "dangling not")]
    #[test_case("and a" => "unexpected token: and" ; "leading operator")]
    #[test_case("a or )" => "unexpected token: )" ; "closing parenthesis as operand")]
    #[test_case("a and b1" => "unexpected token: b1" ; "invalid variable")]
    #[test_case("(a and b)" => "unexpected token: (a" ; "parenthesis glued to variable")]
    fn errors(input: &str) -> String {
        match parse_str(input) {
            Err(Error::InvalidExpression(reason)) => reason,
            Ok(ast) => panic!("{:?} should not parse, got {}", input, ast),
        }
    }
}

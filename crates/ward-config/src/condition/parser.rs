//! Recursive-descent parser for `when` expressions.
//!
//! Precedence, loosest first: `||`, `&&`, `!`, then names, literals and
//! parenthesized groups.

use ward_common::ConditionError;

use super::lexer::{Spanned, Token};
use super::Condition;

/// Maximum nesting of `!` and parentheses.
pub(super) const MAX_DEPTH: usize = 64;

pub(super) struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub(super) fn new(tokens: Vec<Spanned>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    pub(super) fn parse(mut self) -> Result<Condition, ConditionError> {
        let expr = self.parse_or()?;
        match self.tokens.get(self.pos) {
            None => Ok(expr),
            Some((token, offset)) => Err(unexpected(token, *offset)),
        }
    }

    fn parse_or(&mut self) -> Result<Condition, ConditionError> {
        let mut lhs = self.parse_and()?;
        while self.eat(&Token::Or) {
            let rhs = self.parse_and()?;
            lhs = Condition::Or(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<Condition, ConditionError> {
        let mut lhs = self.parse_unary()?;
        while self.eat(&Token::And) {
            let rhs = self.parse_unary()?;
            lhs = Condition::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Condition, ConditionError> {
        if self.eat(&Token::Not) {
            self.descend()?;
            let inner = self.parse_unary()?;
            self.depth -= 1;
            return Ok(Condition::Not(Box::new(inner)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Condition, ConditionError> {
        let (token, offset) = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(ConditionError::UnexpectedEnd)?;
        self.pos += 1;

        match token {
            Token::Bool(value) => Ok(Condition::Literal(value)),
            Token::Ident(name) if name == "always" => Ok(Condition::Always),
            Token::Ident(name) => Ok(Condition::Flag(name)),
            Token::LParen => {
                self.descend()?;
                let inner = self.parse_or()?;
                self.depth -= 1;
                match self.tokens.get(self.pos) {
                    Some((Token::RParen, _)) => {
                        self.pos += 1;
                        Ok(inner)
                    }
                    Some((token, offset)) => Err(unexpected(token, *offset)),
                    None => Err(ConditionError::UnexpectedEnd),
                }
            }
            other => Err(unexpected(&other, offset)),
        }
    }

    fn descend(&mut self) -> Result<(), ConditionError> {
        if self.depth >= MAX_DEPTH {
            return Err(ConditionError::TooDeep(MAX_DEPTH));
        }
        self.depth += 1;
        Ok(())
    }

    fn eat(&mut self, expected: &Token) -> bool {
        match self.tokens.get(self.pos) {
            Some((token, _)) if token == expected => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }
}

fn unexpected(token: &Token, offset: usize) -> ConditionError {
    let text = match token {
        Token::Ident(name) => name.clone(),
        Token::Bool(value) => value.to_string(),
        Token::And => "&&".into(),
        Token::Or => "||".into(),
        Token::Not => "!".into(),
        Token::LParen => "(".into(),
        Token::RParen => ")".into(),
    };
    ConditionError::UnexpectedToken {
        token: text,
        offset,
    }
}

//! The `when` condition language.
//!
//! Shortcut definitions gate themselves with small boolean expressions over
//! named flags: `"always"`, `"canEdit && !readOnly"`,
//! `"questionnairesEnabled || (canCreate && !readOnly)"`. Expressions are
//! parsed once into a [`Condition`] tree and evaluated against a
//! [`Conditions`] set on every classification pass.

mod conditions;
mod lexer;
mod parser;

#[cfg(test)]
mod tests;

pub use conditions::{Conditions, CAN_CREATE, CAN_EDIT, QUESTIONNAIRES_ENABLED, READ_ONLY};

use std::fmt;
use std::str::FromStr;

use ward_common::ConditionError;

/// A parsed `when` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Always,
    Literal(bool),
    Flag(String),
    Not(Box<Condition>),
    And(Box<Condition>, Box<Condition>),
    Or(Box<Condition>, Box<Condition>),
}

impl Condition {
    pub fn parse(input: &str) -> Result<Self, ConditionError> {
        let tokens = lexer::tokenize(input)?;
        if tokens.is_empty() {
            return Err(ConditionError::UnexpectedEnd);
        }
        parser::Parser::new(tokens).parse()
    }

    /// Evaluate against a flag set.
    ///
    /// `&&` and `||` short-circuit, so an unknown flag on the skipped side
    /// is not an error.
    pub fn eval(&self, conditions: &Conditions) -> Result<bool, ConditionError> {
        match self {
            Condition::Always => Ok(true),
            Condition::Literal(value) => Ok(*value),
            Condition::Flag(name) => conditions
                .get(name)
                .ok_or_else(|| ConditionError::UnknownCondition(name.clone())),
            Condition::Not(inner) => Ok(!inner.eval(conditions)?),
            Condition::And(lhs, rhs) => Ok(lhs.eval(conditions)? && rhs.eval(conditions)?),
            Condition::Or(lhs, rhs) => Ok(lhs.eval(conditions)? || rhs.eval(conditions)?),
        }
    }
}

impl FromStr for Condition {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Always => write!(f, "always"),
            Condition::Literal(value) => write!(f, "{value}"),
            Condition::Flag(name) => write!(f, "{name}"),
            Condition::Not(inner) => match inner.as_ref() {
                Condition::And(..) | Condition::Or(..) => write!(f, "!({inner})"),
                _ => write!(f, "!{inner}"),
            },
            Condition::And(lhs, rhs) => {
                write_operand(f, lhs)?;
                write!(f, " && ")?;
                write_operand(f, rhs)
            }
            Condition::Or(lhs, rhs) => write!(f, "{lhs} || {rhs}"),
        }
    }
}

/// `&&` binds tighter than `||`, so an `||` operand needs parentheses.
fn write_operand(f: &mut fmt::Formatter<'_>, operand: &Condition) -> fmt::Result {
    match operand {
        Condition::Or(..) => write!(f, "({operand})"),
        _ => write!(f, "{operand}"),
    }
}

use crate::lexer::{Operator, Token};

use std::fmt;

use itertools::Itertools;

/// The tokens between two separators, terminator excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement(pub Vec<Token>);

impl Statement {
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    /// Recognizes the one well-formed shape,
    /// `<ident> = <operand> <op> <operand>`, and nothing else.
    pub fn assignment(&self) -> Option<Assignment<'_>> {
        match self.0.as_slice() {
            [Token::Ident(target), Token::Assign, left, Token::Op(operator), right] => {
                Some(Assignment {
                    target: target.as_str(),
                    left: Operand::from_token(left)?,
                    operator: *operator,
                    right: Operand::from_token(right)?,
                })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};", self.0.iter().map(Token::text).join(" "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    Number(&'a str),
    Name(&'a str),
}

impl<'a> Operand<'a> {
    fn from_token(token: &'a Token) -> Option<Operand<'a>> {
        match token {
            Token::Number(digits) => Some(Operand::Number(digits.as_str())),
            Token::Ident(name) => Some(Operand::Name(name.as_str())),
            _ => None,
        }
    }

    pub fn text(&self) -> &'a str {
        match self {
            Operand::Number(text) | Operand::Name(text) => *text,
        }
    }
}

impl<'a> fmt::Display for Operand<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// A borrowed view of a well-formed statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub target: &'a str,
    pub left: Operand<'a>,
    pub operator: Operator,
    pub right: Operand<'a>,
}

impl<'a> fmt::Display for Assignment<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} {} {}",
            self.target, self.left, self.operator, self.right
        )
    }
}

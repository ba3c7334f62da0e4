use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_byte(ch: u8) -> Option<Operator> {
        #[rustfmt::skip]
        let operator = match ch {
            b'+' => Operator::Add,
            b'-' => Operator::Sub,
            b'*' => Operator::Mul,
            b'/' => Operator::Div,
            _    => return None,
        };

        Some(operator)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Identifier,
    Assign,
    Op,
    Semicolon,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[rustfmt::skip]
        let pretty = match self {
            TokenKind::Number     => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Assign     => "ASSIGN",
            TokenKind::Op         => "OP",
            TokenKind::Semicolon  => "SEMICOLON",
        };

        write!(f, "{}", pretty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Number(String),
    Ident(String),
    Assign,
    Op(Operator),
    Semicolon,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Ident(_) => TokenKind::Identifier,
            Token::Assign => TokenKind::Assign,
            Token::Op(_) => TokenKind::Op,
            Token::Semicolon => TokenKind::Semicolon,
        }
    }

    /// Source text of the token, exactly as written.
    pub fn text(&self) -> &str {
        match self {
            Token::Number(string) | Token::Ident(string) => string,
            Token::Assign => "=",
            Token::Op(operator) => operator.symbol(),
            Token::Semicolon => ";",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.kind(), self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    #[test_case(Token::Number("42".to_string()), "(NUMBER, 42)"   ; "number"    )]
    #[test_case(Token::Ident("x_1".to_string()), "(IDENTIFIER, x_1)" ; "identifier")]
    #[test_case(Token::Assign                  , "(ASSIGN, =)"    ; "assign"    )]
    #[test_case(Token::Op(Operator::Div)       , "(OP, /)"        ; "operator"  )]
    #[test_case(Token::Semicolon               , "(SEMICOLON, ;)" ; "semicolon" )]
    fn display(token: Token, expected: &str) {
        assert_eq!(token.to_string(), expected)
    }

    #[test]
    fn operator_bytes() {
        assert_eq!(Operator::from_byte(b'+'), Some(Operator::Add));
        assert_eq!(Operator::from_byte(b'-'), Some(Operator::Sub));
        assert_eq!(Operator::from_byte(b'*'), Some(Operator::Mul));
        assert_eq!(Operator::from_byte(b'/'), Some(Operator::Div));
        assert_eq!(Operator::from_byte(b'%'), None);
    }
}

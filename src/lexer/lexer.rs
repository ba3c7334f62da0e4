use crate::error::{LexError, Result};
use crate::lexer::token::{Operator, Token};

use std::iter::Iterator;

use tracing::{debug, warn};

#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    current: usize,
    peek: usize,
    ch: u8,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Lexer<'a> {
        let mut lexer = Lexer {
            input,
            current: 0,
            peek: 0,
            ch: 0,
            failed: false,
        };

        lexer.read_char();

        lexer
    }

    fn read_char(&mut self) {
        let bytes = self.input.as_bytes();
        if self.peek >= bytes.len() {
            self.ch = 0;
        } else {
            self.ch = bytes[self.peek];
        }
        self.current = self.peek;
        self.peek += 1;
    }

    fn at_end(&self) -> bool {
        self.current >= self.input.len()
    }

    fn read_while(&mut self, predicate: fn(u8) -> bool) -> &'a str {
        let input = self.input;
        let position = self.current;

        while !self.at_end() && predicate(self.ch) {
            self.read_char()
        }

        // only ASCII bytes are consumed, so both ends sit on char boundaries
        &input[position..self.current]
    }

    fn skip_whitespace(&mut self) {
        while !self.at_end() && is_whitespace(self.ch) {
            self.read_char()
        }
    }

    fn illegal(&mut self) -> LexError {
        let found = self.input[self.current..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.failed = true;

        LexError::new(self.current, found)
    }
}

fn is_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\r' | b'\n')
}

fn is_letter(ch: u8) -> bool {
    (ch as char).is_ascii_alphabetic() || (ch as char) == '_'
}

fn is_word(ch: u8) -> bool {
    is_letter(ch) || is_digit(ch)
}

fn is_digit(ch: u8) -> bool {
    (ch as char).is_ascii_digit()
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        self.skip_whitespace();

        if self.at_end() {
            return None;
        }

        let token = match self.ch {
            b'=' => Token::Assign,
            b';' => Token::Semicolon,
            ch if is_digit(ch) => {
                return Some(Ok(Token::Number(self.read_while(is_digit).to_string())));
            }
            ch if is_letter(ch) => {
                return Some(Ok(Token::Ident(self.read_while(is_word).to_string())));
            }
            ch => match Operator::from_byte(ch) {
                Some(operator) => Token::Op(operator),
                None => return Some(Err(self.illegal())),
            },
        };

        self.read_char();

        Some(Ok(token))
    }
}

/// Lexes the whole source. Any unrecognized character fails the call;
/// no partial token list is returned.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    match Lexer::new(source).collect::<Result<Vec<Token>>>() {
        Ok(tokens) => {
            debug!(tokens = tokens.len(), "tokenized source");
            Ok(tokens)
        }
        Err(err) => {
            warn!(error = %err, "lexing failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    fn ident(name: &str) -> Token {
        Token::Ident(name.to_string())
    }

    fn number(digits: &str) -> Token {
        Token::Number(digits.to_string())
    }

    #[test]
    fn example1() {
        let input = "x = 5 + 3;";

        let expected = vec![
            ident("x"),
            Token::Assign,
            number("5"),
            Token::Op(Operator::Add),
            number("3"),
            Token::Semicolon,
        ];

        assert_eq!(tokenize(input).unwrap(), expected)
    }

    #[test]
    fn example2() {
        let input = "total_1=alpha*42;\n\
            _tmp = total_1 / 7 ;\t\n\
            d = _tmp - 1";

        let expected = vec![
            ident("total_1"),
            Token::Assign,
            ident("alpha"),
            Token::Op(Operator::Mul),
            number("42"),
            Token::Semicolon,
            ident("_tmp"),
            Token::Assign,
            ident("total_1"),
            Token::Op(Operator::Div),
            number("7"),
            Token::Semicolon,
            ident("d"),
            Token::Assign,
            ident("_tmp"),
            Token::Op(Operator::Sub),
            number("1"),
        ];

        assert_eq!(tokenize(input).unwrap(), expected)
    }

    #[test]
    fn digits_then_letters_split() {
        let expected = vec![number("5"), ident("x9")];

        assert_eq!(tokenize("5x9").unwrap(), expected)
    }

    #[test]
    fn no_merge_across_whitespace() {
        let expected = vec![ident("ab"), ident("cd"), number("12"), number("34")];

        assert_eq!(tokenize("ab cd 12\t34").unwrap(), expected)
    }

    #[test_case(""          ; "empty"           )]
    #[test_case("  \t \n "  ; "whitespace only" )]
    fn nothing_to_emit(input: &str) {
        assert_eq!(tokenize(input).unwrap(), vec![])
    }

    #[test_case("x = 5 $ 3;", 6, '$' ; "dollar"          )]
    #[test_case("x = (5);"  , 4, '(' ; "parenthesis"     )]
    #[test_case("é = 1;"    , 0, 'é' ; "non ascii letter")]
    #[test_case("x = 1; ?"  , 7, '?' ; "trailing garbage")]
    fn illegal(input: &str, position: usize, found: char) {
        assert_eq!(tokenize(input), Err(LexError::new(position, found)))
    }

    #[test]
    fn iteration_stops_after_error() {
        let mut lexer = Lexer::new("a # b");

        assert_eq!(lexer.next(), Some(Ok(ident("a"))));
        assert_eq!(lexer.next(), Some(Err(LexError::new(2, '#'))));
        assert_eq!(lexer.next(), None);
    }
}

mod lexer;
mod token;

pub use lexer::{tokenize, Lexer};
pub use token::{Operator, Token, TokenKind};

use crate::lexer::Token;
use crate::parser::ast::Statement;

use tracing::debug;

/*
   Splitting never fails:
   (1) a `Token::Semicolon` closes the current group if it is non-empty,
     otherwise it is ignored (leading and repeated separators are fine).

   (2) a non-empty group left over at the end is kept, so the last
     statement does not need a terminator.
*/
pub fn split(tokens: &[Token]) -> Vec<Statement> {
    let mut stmts = vec![];
    let mut current = vec![];

    for token in tokens {
        match token {
            Token::Semicolon => {
                if !current.is_empty() {
                    stmts.push(Statement(std::mem::take(&mut current)));
                }
            }
            token => current.push(token.clone()),
        }
    }

    if !current.is_empty() {
        stmts.push(Statement(current));
    }

    debug!(statements = stmts.len(), "split token stream");

    stmts
}

pub mod ast;
mod parser;
mod tree;

pub use ast::{Assignment, Operand, Statement};
pub use parser::split;
pub use tree::build_tree;

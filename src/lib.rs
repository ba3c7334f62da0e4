pub mod config;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod pipeline;
pub mod repl;
pub mod symbol;

pub use pipeline::{run, Report, SharedStore};
pub use symbol::SymbolStore;

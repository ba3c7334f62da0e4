mod interpreter;
mod object;

pub use interpreter::{eval_program, evaluate, Evaluation};
pub use object::Value;

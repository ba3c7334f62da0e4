use crate::interpreter::object::Value;
use crate::lexer::Operator;
use crate::parser::ast::{Operand, Statement};
use crate::symbol::{CollectionEvent, SymbolStore};

use tracing::{debug, trace};

/// Result of evaluating one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// `None` for undefined results and for skipped statements.
    pub result: Option<i64>,
    pub collections: Vec<CollectionEvent>,
}

impl Evaluation {
    fn skipped() -> Evaluation {
        Evaluation {
            result: None,
            collections: vec![],
        }
    }
}

/// Evaluates the statements in source order against `store` and returns
/// the collection events of the whole run.
pub fn eval_program(stmts: &[Statement], store: &mut SymbolStore) -> Vec<CollectionEvent> {
    let mut collections = vec![];

    for stmt in stmts {
        collections.extend(evaluate(stmt, store).collections);
    }

    collections
}

/// Evaluates a single statement. Malformed statements are skipped without
/// touching the store.
pub fn evaluate(stmt: &Statement, store: &mut SymbolStore) -> Evaluation {
    let assignment = match stmt.assignment() {
        Some(assignment) => assignment,
        None => {
            debug!(statement = %stmt, "skipping malformed statement");
            return Evaluation::skipped();
        }
    };

    let left = resolve(&assignment.left, store);
    let right = resolve(&assignment.right, store);

    let result = match (left, right) {
        (Some(left), Some(right)) => apply(assignment.operator, left, right),
        _ => None,
    };

    let collections = if store.contains(assignment.target) {
        store.release(assignment.target)
    } else {
        vec![]
    };

    let value = Value::from(result);
    store.assign(assignment.target, value);

    trace!(statement = %assignment, result = %value, "evaluated statement");

    Evaluation {
        result,
        collections,
    }
}

// a literal too large for `i64` has no value
fn resolve(operand: &Operand, store: &SymbolStore) -> Option<i64> {
    match operand {
        Operand::Number(digits) => digits.parse().ok(),
        Operand::Name(name) => Some(store.lookup(name)),
    }
}

/// Integer arithmetic; `/` truncates toward zero. Division by zero and
/// overflow have no result.
pub(crate) fn apply(operator: Operator, left: i64, right: i64) -> Option<i64> {
    #[rustfmt::skip]
    let result = match operator {
        Operator::Add => left.checked_add(right),
        Operator::Sub => left.checked_sub(right),
        Operator::Mul => left.checked_mul(right),
        Operator::Div => left.checked_div(right),
    };

    result
}

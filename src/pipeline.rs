use crate::error::LexError;
use crate::interpreter::{eval_program, evaluate};
use crate::lexer::{tokenize, Token};
use crate::parser::{build_tree, split, Statement};
use crate::symbol::{CollectionEvent, SymbolEntry, SymbolStore};

use std::fmt;
use std::sync::Arc;

use itertools::Itertools;
use parking_lot::Mutex;
use tracing::debug;

const NO_EVENTS: &str = "No GC events.";

/// The four artifacts of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub tokens: std::result::Result<Vec<Token>, LexError>,
    pub parse_tree: String,
    pub symbols: Vec<SymbolEntry>,
    pub collections: Vec<CollectionEvent>,
}

impl Report {
    fn failed(err: LexError) -> Report {
        Report {
            tokens: Err(err),
            parse_tree: String::new(),
            symbols: vec![],
            collections: vec![],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.tokens.is_ok()
    }

    /// Collection log lines, or the explicit no-events marker.
    pub fn gc_log(&self) -> String {
        if self.collections.is_empty() {
            NO_EVENTS.to_string()
        } else {
            self.collections.iter().join("\n")
        }
    }

    /// Text rendering, optionally without the parse tree section.
    pub fn render(&self, with_tree: bool) -> String {
        let tokens = match &self.tokens {
            Ok(tokens) => format!("[{}]", tokens.iter().join(", ")),
            Err(err) => format!("ERROR: {}", err),
        };

        let mut sections = vec![format!("Token Stream:\n{}", tokens)];

        if self.is_ok() {
            if with_tree {
                sections.push(format!("Parse Tree:\n{}", self.parse_tree.trim_end()));
            }
            sections.push(format!("Symbol Table:\n{}", self.symbol_table()));
            sections.push(format!("Garbage Collection Log:\n{}", self.gc_log()));
        }

        sections.join("\n\n")
    }

    fn symbol_table(&self) -> String {
        let rows = self.symbols.iter().map(|entry| {
            format!(
                "{:<12} {:<12} {}",
                entry.name,
                entry.value.to_string(),
                entry.ref_count
            )
        });

        std::iter::once(format!("{:<12} {:<12} {}", "Variable", "Value", "Reference Count"))
            .chain(rows)
            .join("\n")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(true))
    }
}

// Lexing, splitting and tree rendering; shared by both store flavours.
struct Front {
    tokens: Vec<Token>,
    stmts: Vec<Statement>,
    parse_tree: String,
}

impl Front {
    fn new(source: &str) -> std::result::Result<Front, LexError> {
        let tokens = tokenize(source)?;
        let stmts = split(&tokens);
        let parse_tree = build_tree(&stmts);

        Ok(Front {
            tokens,
            stmts,
            parse_tree,
        })
    }

    fn finish(self, symbols: Vec<SymbolEntry>, collections: Vec<CollectionEvent>) -> Report {
        debug!(
            statements = self.stmts.len(),
            collections = collections.len(),
            symbols = symbols.len(),
            "finished submission"
        );

        Report {
            tokens: Ok(self.tokens),
            parse_tree: self.parse_tree,
            symbols,
            collections,
        }
    }
}

/// Runs one submission against `store`. A lexing failure aborts before
/// any statement runs and leaves the store untouched.
pub fn run(source: &str, store: &mut SymbolStore) -> Report {
    let front = match Front::new(source) {
        Ok(front) => front,
        Err(err) => return Report::failed(err),
    };

    let collections = eval_program(&front.stmts, store);

    front.finish(store.snapshot(), collections)
}

/// A store shared between threads. Every statement evaluation holds the
/// lock from operand lookup through release and assignment.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<SymbolStore>>,
}

impl SharedStore {
    pub fn new() -> SharedStore {
        SharedStore::default()
    }

    pub fn run(&self, source: &str) -> Report {
        let front = match Front::new(source) {
            Ok(front) => front,
            Err(err) => return Report::failed(err),
        };

        let mut collections = vec![];
        for stmt in &front.stmts {
            let evaluation = evaluate(stmt, &mut self.inner.lock());
            collections.extend(evaluation.collections);
        }

        front.finish(self.snapshot(), collections)
    }

    pub fn snapshot(&self) -> Vec<SymbolEntry> {
        self.inner.lock().snapshot()
    }

    pub fn reset(&self) {
        self.inner.lock().reset()
    }

    /// Runs `f` with exclusive access to the store.
    pub fn with<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&mut SymbolStore) -> T,
    {
        f(&mut self.inner.lock())
    }
}

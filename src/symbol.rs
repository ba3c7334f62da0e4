use crate::interpreter::Value;

use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionEvent {
    pub name: String,
}

impl fmt::Display for CollectionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Collected variable '{}'", self.name)
    }
}

/// One row of a store snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    pub value: Value,
    pub ref_count: u32,
}

impl fmt::Display for SymbolEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} (refs: {})", self.name, self.value, self.ref_count)
    }
}

#[derive(Debug, Clone)]
struct Binding {
    value: Value,
    refs: u32,
    // installation order, used to keep snapshots stable
    seq: u64,
}

/// Variable bindings together with their simulated reference counts.
///
/// Value and count live in one entry, so a name is either fully present
/// with a count of at least one or absent from both.
#[derive(Debug, Clone, Default)]
pub struct SymbolStore {
    store: HashMap<String, Binding>,
    next_seq: u64,
}

impl SymbolStore {
    pub fn new() -> SymbolStore {
        SymbolStore::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    /// Current integer value of `name`. Unbound and undefined both read as 0.
    pub fn lookup(&self, name: &str) -> i64 {
        self.store
            .get(name)
            .and_then(|binding| binding.value.as_integer())
            .unwrap_or(0)
    }

    pub fn ref_count(&self, name: &str) -> u32 {
        self.store.get(name).map_or(0, |binding| binding.refs)
    }

    /// Drops one reference to `name`. Reaching zero removes the binding
    /// and yields its collection event. Unknown names are a no-op.
    pub fn release(&mut self, name: &str) -> Vec<CollectionEvent> {
        let refs = match self.store.get_mut(name) {
            Some(binding) => {
                binding.refs = binding.refs.saturating_sub(1);
                binding.refs
            }
            None => return vec![],
        };

        if refs > 0 {
            return vec![];
        }

        self.store.remove(name);
        info!(name, "collected variable");

        vec![CollectionEvent {
            name: name.to_string(),
        }]
    }

    /// Installs `value` for `name` and adds one reference.
    pub fn assign(&mut self, name: &str, value: Value) {
        let seq = self.next_seq;
        self.next_seq += 1;

        let binding = self.store.entry(name.to_string()).or_insert(Binding {
            value: Value::Undefined,
            refs: 0,
            seq,
        });
        binding.value = value;
        binding.refs += 1;
    }

    /// Read-only view in installation order.
    pub fn snapshot(&self) -> Vec<SymbolEntry> {
        self.store
            .iter()
            .sorted_by_key(|(_, binding)| binding.seq)
            .map(|(name, binding)| SymbolEntry {
                name: name.clone(),
                value: binding.value,
                ref_count: binding.refs,
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.store.clear();
        self.next_seq = 0;
    }
}

impl fmt::Display for SymbolStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {} }}", self.snapshot().iter().join(", "))
    }
}

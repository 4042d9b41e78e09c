use std::collections::HashMap;

use log::debug;

use crate::filter::ValueFilter;
use crate::memo::types::{Entry, Origin, Value};

/// Map from value to its best known cost and origin.
///
/// Entries are only ever added or replaced by a strictly cheaper derivation,
/// so recorded costs decrease monotonically over a run. Workers operate on
/// cloned snapshots; the driver is the only writer of the canonical memo.
#[derive(Debug, Clone, Default)]
pub struct Memo {
    entries: HashMap<Value, Entry>,
}

impl Memo {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, value: Value) -> Option<&Entry> {
        self.entries.get(&value)
    }

    pub fn cost_of(&self, value: Value) -> Option<u32> {
        self.entries.get(&value).map(|entry| entry.cost)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Entry)> {
        self.entries.iter()
    }

    /// True if recording `value` at `cost` would change the memo: either the
    /// value is new (and within the cost bound) or the known cost is strictly
    /// higher.
    pub fn improves(&self, value: Value, cost: u32, max_cost: u32) -> bool {
        match self.entries.get(&value) {
            None => cost <= max_cost,
            Some(entry) => cost < entry.cost,
        }
    }

    pub fn record(&mut self, value: Value, cost: u32, origin: Origin) {
        debug!("Recording {} at cost {} via {}", value, cost, origin);
        self.entries.insert(value, Entry { cost, origin });
    }

    /// Folds a worker's local memo into this one, keeping the lower cost per
    /// value. Equal costs keep the entry already present, so merge order only
    /// affects which of two equal-cost derivations survives.
    pub fn merge_from(&mut self, other: Memo) {
        for (value, entry) in other.entries {
            match self.entries.get(&value) {
                Some(current) if current.cost <= entry.cost => {}
                _ => {
                    self.entries.insert(value, entry);
                }
            }
        }
    }

    /// All values currently admitted by the filter, sorted ascending for a
    /// deterministic per-worker iteration order.
    pub fn admissible_values(&self, filter: &ValueFilter) -> Vec<Value> {
        let mut values: Vec<Value> = self
            .entries
            .keys()
            .copied()
            .filter(|value| filter.is_admissible(value.into_inner()))
            .collect();
        values.sort_unstable();
        values
    }
}

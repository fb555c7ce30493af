use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Deterministic, machine-readable diagnostics for one import call.
///
/// Notes:
/// - Contains *no* wall-clock timestamps (to preserve determinism).
/// - Never part of the document itself; intended for operational
///   monitoring and CI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Elements handed to the tag dispatcher.
    pub elements_visited: usize,

    /// Blocks produced during traversal, grouped by block type name.
    /// Excludes the synthesized layout root.
    pub blocks_by_type: BTreeMap<String, usize>,

    /// Elements the dispatcher mapped to no block.
    pub dropped_elements: usize,

    /// Whether the terminal passthrough block was synthesized because
    /// no element yielded a block.
    pub used_passthrough: bool,
}

impl ImportReport {
    pub fn record_block(&mut self, type_name: &str) {
        *self.blocks_by_type.entry(type_name.to_string()).or_insert(0) += 1;
    }

    pub fn blocks_total(&self) -> usize {
        self.blocks_by_type.values().sum()
    }
}

//! Dependency cycle report types.

use super::TaskKey;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// One closed loop of dependency edges.
///
/// Members are listed in traversal order; the first member closes the loop
/// again after the last one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cycle(Vec<TaskKey>);

impl Cycle {
    /// Creates a cycle from its members in traversal order.
    #[must_use]
    pub const fn new(members: Vec<TaskKey>) -> Self {
        Self(members)
    }

    /// Returns the cycle members without the closing repeat.
    #[must_use]
    pub fn members(&self) -> &[TaskKey] {
        &self.0
    }

    /// Returns `true` when `key` lies on this cycle.
    #[must_use]
    pub fn contains(&self, key: &TaskKey) -> bool {
        self.0.contains(key)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cycle detected: ")?;
        for member in &self.0 {
            write!(f, "{member} → ")?;
        }
        match self.0.first() {
            Some(first) => write!(f, "{first}"),
            None => Ok(()),
        }
    }
}

/// Every cycle found in one task list, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReport {
    cycles: Vec<Cycle>,
}

impl CycleReport {
    /// Creates a report from discovered cycles.
    #[must_use]
    pub const fn new(cycles: Vec<Cycle>) -> Self {
        Self { cycles }
    }

    /// Returns `true` when at least one cycle was found.
    #[must_use]
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Returns the discovered cycles.
    #[must_use]
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// Renders one human-readable trace per cycle.
    #[must_use]
    pub fn cycle_details(&self) -> Vec<String> {
        self.cycles.iter().map(ToString::to_string).collect()
    }

    /// Returns the keys of every task lying on some cycle.
    #[must_use]
    pub fn cyclic_ids(&self) -> HashSet<&TaskKey> {
        self.cycles
            .iter()
            .flat_map(|cycle| cycle.members().iter())
            .collect()
    }
}

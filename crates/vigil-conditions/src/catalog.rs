//! The fixed condition catalog.

use serde::{Deserialize, Serialize};

/// One entry in the condition catalog.
///
/// Ids are lowercase with no spaces and unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionDescriptor {
    /// Stable identifier (lowercase, no spaces).
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Icon path shown on tokens and trackers.
    pub icon: String,
}

/// An immutable set of condition descriptors, built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ConditionDescriptor>,
}

/// Normalize an id or label for lookup: lowercase, spaces and hyphens removed.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect::<String>()
        .to_lowercase()
}

impl Catalog {
    /// Build a catalog from descriptors.
    pub fn new(entries: Vec<ConditionDescriptor>) -> Self {
        Self { entries }
    }

    /// The standard condition set shipped with the system.
    pub fn standard() -> Self {
        let make = |id: &str, label: &str| ConditionDescriptor {
            id: id.to_string(),
            label: label.to_string(),
            icon: format!("icons/conditions/{id}.svg"),
        };
        Self::new(vec![
            make("dead", "Dead"),
            make("unconscious", "Unconscious"),
            make("stunned", "Stunned"),
            make("prone", "Prone"),
            make("restrained", "Restrained"),
            make("blinded", "Blinded"),
            make("deafened", "Deafened"),
            make("poisoned", "Poisoned"),
            make("burning", "Burning"),
            make("frightened", "Frightened"),
            make("invisible", "Invisible"),
            make("offbalance", "Off Balance"),
        ])
    }

    /// All descriptors in catalog order.
    pub fn entries(&self) -> &[ConditionDescriptor] {
        &self.entries
    }

    /// Look up a descriptor by id or label, format-normalized.
    ///
    /// `"Off Balance"`, `"off-balance"` and `"offbalance"` all resolve to the
    /// same entry. Returns `None` when nothing matches.
    pub fn by_id(&self, id_or_label: &str) -> Option<&ConditionDescriptor> {
        let wanted = normalize(id_or_label);
        self.entries
            .iter()
            .find(|c| normalize(&c.id) == wanted || normalize(&c.label) == wanted)
    }

    /// Returns true if the id resolves to a catalog entry.
    pub fn contains(&self, id_or_label: &str) -> bool {
        self.by_id(id_or_label).is_some()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

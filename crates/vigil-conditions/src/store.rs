//! Status backends: presence management for conditions on a subject.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Catalog, ConditionDescriptor};
use crate::error::{ConditionError, ConditionResult};

/// Identifies who carries conditions (a combatant, token, or actor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectId(pub Uuid);

impl SubjectId {
    /// Generate a new random subject id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Presence management for conditions, polymorphic over storage.
///
/// Implementations are selected once at startup via [`select_backend`];
/// callers hold a `Box<dyn StatusBackend>` and never branch on which
/// implementation is behind it. All operations are idempotent with respect
/// to the catalog.
pub trait StatusBackend {
    /// The catalog this backend validates ids against.
    fn catalog(&self) -> &Catalog;

    /// Conditions currently on the subject, in catalog order.
    fn active(&self, subject: SubjectId) -> Vec<ConditionDescriptor>;

    /// True if the subject carries any of the given conditions.
    fn has(&self, ids: &[&str], subject: SubjectId) -> ConditionResult<bool>;

    /// Add each condition not already present. Returns how many were written.
    fn add(&mut self, ids: &[&str], subject: SubjectId) -> ConditionResult<usize>;

    /// Remove matching conditions. With `check_first` set, performs no write
    /// when nothing matches. Returns how many were removed.
    fn remove(
        &mut self,
        ids: &[&str],
        subject: SubjectId,
        check_first: bool,
    ) -> ConditionResult<usize>;
}

/// The built-in backend: a deduplicated per-subject condition list.
#[derive(Debug, Default)]
pub struct LocalStatus {
    catalog: Catalog,
    states: HashMap<SubjectId, Vec<String>>,
}

impl LocalStatus {
    /// Create a local backend over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            states: HashMap::new(),
        }
    }

    /// Resolve a batch of ids against the catalog, rejecting unknown ones.
    fn resolve(&self, ids: &[&str]) -> ConditionResult<Vec<String>> {
        ids.iter()
            .map(|id| {
                self.catalog
                    .by_id(id)
                    .map(|c| c.id.clone())
                    .ok_or_else(|| ConditionError::UnknownCondition((*id).to_string()))
            })
            .collect()
    }
}

impl StatusBackend for LocalStatus {
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn active(&self, subject: SubjectId) -> Vec<ConditionDescriptor> {
        let Some(present) = self.states.get(&subject) else {
            return Vec::new();
        };
        self.catalog
            .entries()
            .iter()
            .filter(|c| present.contains(&c.id))
            .cloned()
            .collect()
    }

    fn has(&self, ids: &[&str], subject: SubjectId) -> ConditionResult<bool> {
        let wanted = self.resolve(ids)?;
        let present = self.states.get(&subject);
        Ok(present.is_some_and(|list| wanted.iter().any(|id| list.contains(id))))
    }

    fn add(&mut self, ids: &[&str], subject: SubjectId) -> ConditionResult<usize> {
        let wanted = self.resolve(ids)?;
        let list = self.states.entry(subject).or_default();
        let mut written = 0;
        for id in wanted {
            if !list.contains(&id) {
                list.push(id);
                written += 1;
            }
        }
        Ok(written)
    }

    fn remove(
        &mut self,
        ids: &[&str],
        subject: SubjectId,
        check_first: bool,
    ) -> ConditionResult<usize> {
        let wanted = self.resolve(ids)?;
        let Some(list) = self.states.get_mut(&subject) else {
            return Ok(0);
        };
        if check_first && !wanted.iter().any(|id| list.contains(id)) {
            return Ok(0);
        }
        let before = list.len();
        list.retain(|id| !wanted.contains(id));
        Ok(before - list.len())
    }
}

/// Choose the status backend once at startup.
///
/// An external provider discovered by capability probe wins; otherwise the
/// built-in local list over the standard catalog is used.
pub fn select_backend(probe: Option<Box<dyn StatusBackend>>) -> Box<dyn StatusBackend> {
    probe.unwrap_or_else(|| Box::new(LocalStatus::new(Catalog::standard())))
}

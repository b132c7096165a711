use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::table::FlatRow;

/// Which side of the table an overlap map groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SetKind {
    Center,
    Function,
}

impl SetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SetKind::Center => "center",
            SetKind::Function => "function",
        }
    }
}

impl std::fmt::Display for SetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled member set selected for one diagram circle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedSet {
    pub label: String,
    pub members: IndexSet<String>,
}

/// Ordered `label -> member set` grouping over a flat row sequence.
///
/// Key order is first-seen order, and each member set keeps its own
/// first-seen order too. Duplicate associations collapse into one member.
#[derive(Debug, Clone, Serialize)]
pub struct OverlapMap {
    kind: SetKind,
    groups: IndexMap<String, IndexSet<String>>,
}

impl OverlapMap {
    /// Groups rows by center, collecting the distinct functions of each.
    pub fn by_center(rows: &[FlatRow]) -> Self {
        let mut groups: IndexMap<String, IndexSet<String>> = IndexMap::new();
        for row in rows {
            groups
                .entry(row.center.clone())
                .or_default()
                .insert(row.function.clone());
        }
        Self {
            kind: SetKind::Center,
            groups,
        }
    }

    /// Groups rows by function, collecting the distinct centers of each.
    pub fn by_function(rows: &[FlatRow]) -> Self {
        let mut groups: IndexMap<String, IndexSet<String>> = IndexMap::new();
        for row in rows {
            groups
                .entry(row.function.clone())
                .or_default()
                .insert(row.center.clone());
        }
        Self {
            kind: SetKind::Function,
            groups,
        }
    }

    pub fn kind(&self) -> SetKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&IndexSet<String>> {
        self.groups.get(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &IndexSet<String>)> {
        self.groups.iter()
    }

    /// Selects the first 3 keys (insertion order) as named sets.
    ///
    /// This is the diagram precondition: a map with fewer than 3 distinct
    /// keys can never reach the layout stage.
    pub fn first_three(&self) -> Result<[NamedSet; 3]> {
        let mut picked = self.groups.iter().take(3).map(|(label, members)| NamedSet {
            label: label.clone(),
            members: members.clone(),
        });
        match (picked.next(), picked.next(), picked.next()) {
            (Some(a), Some(b), Some(c)) => Ok([a, b, c]),
            _ => Err(Error::NotEnoughSets {
                kind: self.kind,
                found: self.groups.len(),
            }),
        }
    }
}

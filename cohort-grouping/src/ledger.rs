//! Per-member assignment state, kept apart from the roster itself.

use serde::Serialize;

/// Where one roster entry has been placed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assignment {
    /// Preference bucket the member landed in.
    pub bucket: Option<String>,
    /// Final group label.
    pub group: Option<String>,
}

/// Assignment state for a roster, indexed by roster position.
///
/// Positions rather than member ids are used as keys because ids are opaque
/// caller data and may repeat or be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssignmentLedger {
    entries: Vec<Assignment>,
}

impl AssignmentLedger {
    /// Ledger for `len` unassigned members.
    pub fn new(len: usize) -> Self {
        Self {
            entries: vec![Assignment::default(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True once the member has a bucket.
    pub fn is_assigned(&self, index: usize) -> bool {
        self.entries
            .get(index)
            .is_some_and(|a| a.bucket.is_some())
    }

    /// Positions without a bucket, in roster order.
    pub fn unassigned(&self) -> Vec<usize> {
        (0..self.entries.len())
            .filter(|&i| !self.is_assigned(i))
            .collect()
    }

    pub fn assign_bucket(&mut self, index: usize, label: &str) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.bucket = Some(label.to_string());
        }
    }

    pub fn assign_group(&mut self, index: usize, label: &str) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.group = Some(label.to_string());
        }
    }

    pub fn bucket_of(&self, index: usize) -> Option<&str> {
        self.entries.get(index).and_then(|a| a.bucket.as_deref())
    }

    pub fn group_of(&self, index: usize) -> Option<&str> {
        self.entries.get(index).and_then(|a| a.group.as_deref())
    }
}

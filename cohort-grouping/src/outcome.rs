//! Pipeline output: ordered groups, the assignment ledger, and summary statistics.

use serde::Serialize;

use cohort_core::models::{CompositeTag, Group, ScoredMember, TierCounts};

use crate::ledger::AssignmentLedger;

/// Count of members per composite tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompositeTagCounts {
    pub creator: usize,
    pub office_worker: usize,
    pub all_rounder: usize,
    pub untagged: usize,
}

impl CompositeTagCounts {
    pub fn from_members<'a>(members: impl IntoIterator<Item = &'a ScoredMember>) -> Self {
        let mut counts = Self::default();
        for m in members {
            match m.profile.composite_tag {
                Some(CompositeTag::Creator) => counts.creator += 1,
                Some(CompositeTag::OfficeWorker) => counts.office_worker += 1,
                Some(CompositeTag::AllRounder) => counts.all_rounder += 1,
                None => counts.untagged += 1,
            }
        }
        counts
    }
}

/// Roster-wide statistics for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupingSummary {
    pub total_members: usize,
    pub group_count: usize,
    /// Buckets that exceeded the maximum and were subdivided.
    pub split_buckets: Vec<String>,
    /// Members moved by the rebalancer.
    pub transfers: usize,
    /// Groups that ended below the minimum size.
    pub undersized_groups: Vec<String>,
    /// Groups above the maximum size.
    pub oversized_groups: Vec<String>,
    pub tier_totals: TierCounts,
    pub composite_tags: CompositeTagCounts,
}

/// Result of one grouping run.
#[derive(Debug, Clone, Serialize)]
pub struct GroupingOutcome {
    /// Groups in output order; labels are the mapping keys.
    pub groups: Vec<Group>,
    /// Bucket and group label per roster position.
    pub assignments: AssignmentLedger,
    pub summary: GroupingSummary,
}

impl GroupingOutcome {
    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.label.as_str()).collect()
    }

    /// Group by label.
    pub fn get(&self, label: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.label == label)
    }

    pub fn group_label_of(&self, index: usize) -> Option<&str> {
        self.assignments.group_of(index)
    }

    pub fn bucket_label_of(&self, index: usize) -> Option<&str> {
        self.assignments.bucket_of(index)
    }

    /// Members across all groups.
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Per-group tier counts in output order.
    pub fn tier_summary(&self) -> Vec<(&str, TierCounts)> {
        self.groups
            .iter()
            .map(|g| (g.label.as_str(), g.tier_counts))
            .collect()
    }

    /// Serialize the outcome for a rendering collaborator.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

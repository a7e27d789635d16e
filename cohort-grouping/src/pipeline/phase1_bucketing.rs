//! Phase 1: Preference bucketing.
//!
//! Pass 1 places members by first choice, pass 2 places the rest by second
//! choice, pass 3 appends whoever is left to the smallest bucket.

use cohort_core::models::ScoredMember;
use tracing::debug;

use crate::ledger::AssignmentLedger;

/// Members sharing a preference label, as roster positions in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub label: String,
    pub members: Vec<usize>,
}

impl Bucket {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            members: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Result of bucketing: ordered buckets plus the updated ledger.
#[derive(Debug, Clone)]
pub struct Bucketing {
    pub buckets: Vec<Bucket>,
    pub ledger: AssignmentLedger,
}

/// Distinct non-empty preference labels in order of first appearance.
///
/// Each member contributes its first choice, then its second choice. When no
/// member states any preference, the result is `[sentinel]`.
pub fn collect_preference_labels(roster: &[ScoredMember], sentinel: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for scored in roster {
        for choice in [&scored.member.first_choice, &scored.member.second_choice] {
            if !choice.is_empty() && !labels.iter().any(|l| l == choice) {
                labels.push(choice.clone());
            }
        }
    }
    if labels.is_empty() {
        labels.push(sentinel.to_string());
    }
    labels
}

/// Bucket the roster by preference.
///
/// `labels` fixes both bucket order and the tie-break order of pass 3; a
/// bucket is created for every label even if it stays empty. Duplicate labels
/// are ignored after their first occurrence. With no labels at all, leftover
/// members go to a new bucket named `fallback_label`.
pub fn bucketize(roster: &[ScoredMember], labels: &[String], fallback_label: &str) -> Bucketing {
    let mut ledger = AssignmentLedger::new(roster.len());
    let mut buckets: Vec<Bucket> = Vec::new();
    for label in labels {
        if !buckets.iter().any(|b| &b.label == label) {
            buckets.push(Bucket::new(label));
        }
    }

    // Pass 1: first choice.
    for bucket in buckets.iter_mut() {
        for (idx, scored) in roster.iter().enumerate() {
            if !ledger.is_assigned(idx) && scored.member.first_choice == bucket.label {
                ledger.assign_bucket(idx, &bucket.label);
                bucket.members.push(idx);
            }
        }
    }

    // Pass 2: second choice.
    for bucket in buckets.iter_mut() {
        for (idx, scored) in roster.iter().enumerate() {
            if !ledger.is_assigned(idx) && scored.member.second_choice == bucket.label {
                ledger.assign_bucket(idx, &bucket.label);
                bucket.members.push(idx);
            }
        }
    }

    // Pass 3: leftovers as one block into the least-loaded bucket.
    let leftovers = ledger.unassigned();
    if !leftovers.is_empty() {
        let target = buckets
            .iter()
            .enumerate()
            .min_by_key(|(pos, b)| (b.len(), *pos))
            .map(|(pos, _)| pos);
        let target = match target {
            Some(pos) => pos,
            None => {
                buckets.push(Bucket::new(fallback_label));
                buckets.len() - 1
            }
        };
        let bucket = &mut buckets[target];
        debug!(
            bucket = %bucket.label,
            count = leftovers.len(),
            "Phase 1: placing members without a matching preference"
        );
        for idx in leftovers {
            ledger.assign_bucket(idx, &bucket.label);
            bucket.members.push(idx);
        }
    }

    Bucketing { buckets, ledger }
}

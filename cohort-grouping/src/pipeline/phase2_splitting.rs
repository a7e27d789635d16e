//! Phase 2: Cohort splitting.
//!
//! Buckets within `[min, max]` pass through whole, as do undersized ones.
//! Oversized buckets are cut into `ceil(size / max)` subgroups filled tier by
//! tier, highest first, so each subgroup is dominated by one tier.

use std::collections::HashSet;

use cohort_core::models::{ScoredMember, SkillTier};

use super::phase1_bucketing::Bucket;

/// One cohort under construction: a label and roster positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cohort {
    pub label: String,
    pub members: Vec<usize>,
}

impl Cohort {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Output of splitting one bucket.
#[derive(Debug, Clone)]
pub struct SplitResult {
    pub cohorts: Vec<Cohort>,
    /// True when the bucket exceeded `max` and was subdivided.
    pub was_split: bool,
}

/// Suffix for the `n`th subgroup (0-based): A..Z, then AA, AB, ...
pub fn subgroup_suffix(mut n: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

/// Label of a subgroup of `bucket_label`.
pub fn subgroup_label(bucket_label: &str, n: usize) -> String {
    format!("{bucket_label}-{}", subgroup_suffix(n))
}

/// Claim `count` subgroup labels for `bucket_label`, skipping any suffix
/// whose label is already in `taken`. Claimed labels are added to `taken`.
pub fn claim_subgroup_labels(
    bucket_label: &str,
    count: usize,
    taken: &mut HashSet<String>,
) -> Vec<String> {
    let mut labels = Vec::with_capacity(count);
    let mut n = 0usize;
    while labels.len() < count {
        let label = subgroup_label(bucket_label, n);
        n += 1;
        if taken.insert(label.clone()) {
            labels.push(label);
        }
    }
    labels
}

/// Split a bucket according to the `max_size` bound.
///
/// `taken` holds every label already used in the output; generated subgroup
/// labels never repeat one. An empty bucket yields no cohorts.
pub fn split_bucket(
    bucket: &Bucket,
    roster: &[ScoredMember],
    max_size: usize,
    taken: &mut HashSet<String>,
) -> SplitResult {
    let size = bucket.len();
    let max_size = max_size.max(1);

    if size == 0 {
        return SplitResult {
            cohorts: Vec::new(),
            was_split: false,
        };
    }

    if size <= max_size {
        return SplitResult {
            cohorts: vec![Cohort {
                label: bucket.label.clone(),
                members: bucket.members.clone(),
            }],
            was_split: false,
        };
    }

    let count = size.div_ceil(max_size);
    let threshold = size.div_ceil(count);

    let mut cohorts: Vec<Cohort> = claim_subgroup_labels(&bucket.label, count, taken)
        .into_iter()
        .map(|label| Cohort {
            label,
            members: Vec::with_capacity(threshold),
        })
        .collect();

    // Tier runs, highest first; bucket order within a tier.
    let mut target = 0usize;
    for &tier in SkillTier::DESCENDING.iter() {
        for &idx in bucket.members.iter().filter(|&&i| roster[i].tier() == tier) {
            if cohorts[target].len() >= threshold {
                target = (target + 1) % count;
            }
            cohorts[target].members.push(idx);
        }
    }

    SplitResult {
        cohorts,
        was_split: true,
    }
}

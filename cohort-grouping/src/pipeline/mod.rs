//! Grouping pipeline orchestrator.
//!
//! Scoring → Phase 1: Bucketing → Phase 2: Splitting →
//! Phase 3: Rebalancing (split buckets only) → Phase 4: Assembly

pub mod phase1_bucketing;
pub mod phase2_splitting;
pub mod phase3_rebalancing;
pub mod phase4_assembly;

use std::collections::HashSet;

use cohort_core::config::GroupingConfig;
use cohort_core::models::{Member, TierCounts};
use tracing::{debug, info};

use crate::outcome::{CompositeTagCounts, GroupingOutcome, GroupingSummary};

/// Run the full grouping pipeline over a roster.
///
/// Infallible: degenerate input falls back to the configured labels. The
/// policy is used as given; `GroupingEngine` validates it up front.
pub fn run_pipeline(roster: &[Member], config: &GroupingConfig) -> GroupingOutcome {
    let _span =
        cohort_core::grouping_span!(roster.len(), config.min_size, config.max_size).entered();

    let scored = cohort_scoring::score_roster(roster);

    // Phase 1: Bucketing.
    let labels =
        phase1_bucketing::collect_preference_labels(&scored, &config.sentinel_preference_label);
    let phase1_bucketing::Bucketing {
        buckets,
        mut ledger,
    } = phase1_bucketing::bucketize(&scored, &labels, &config.fallback_bucket_label);
    info!(
        labels = labels.len(),
        buckets = buckets.iter().filter(|b| !b.is_empty()).count(),
        "Phase 1: bucketed roster"
    );

    // Phases 2-3 per bucket, in bucket order.
    let mut cohorts = Vec::new();
    let mut split_buckets = Vec::new();
    let mut transfers = 0usize;
    let mut taken: HashSet<String> = buckets
        .iter()
        .filter(|b| !b.is_empty())
        .map(|b| b.label.clone())
        .collect();
    for bucket in &buckets {
        let split =
            phase2_splitting::split_bucket(bucket, &scored, config.max_size, &mut taken);
        let mut bucket_cohorts = split.cohorts;
        if split.was_split {
            debug!(
                bucket = %bucket.label,
                size = bucket.len(),
                subgroups = bucket_cohorts.len(),
                "Phase 2: split oversized bucket"
            );
            let report =
                phase3_rebalancing::rebalance(&mut bucket_cohorts, &scored, config.min_size);
            transfers += report.transfers.len();
            split_buckets.push(bucket.label.clone());
        }
        cohorts.extend(bucket_cohorts);
    }

    // Phase 4: Assembly.
    let groups = phase4_assembly::assemble_groups(
        cohorts,
        &scored,
        &mut ledger,
        &config.default_group_label,
    );

    let summary = GroupingSummary {
        total_members: scored.len(),
        group_count: groups.len(),
        split_buckets,
        transfers,
        undersized_groups: groups
            .iter()
            .filter(|g| g.len() < config.min_size)
            .map(|g| g.label.clone())
            .collect(),
        oversized_groups: groups
            .iter()
            .filter(|g| g.len() > config.max_size)
            .map(|g| g.label.clone())
            .collect(),
        tier_totals: TierCounts::from_members(&scored),
        composite_tags: CompositeTagCounts::from_members(&scored),
    };

    info!(
        groups = summary.group_count,
        undersized = summary.undersized_groups.len(),
        transfers = summary.transfers,
        "Grouping pipeline complete"
    );

    GroupingOutcome {
        groups,
        assignments: ledger,
        summary,
    }
}

//! Phase 4: Assembly of final labelled groups.

use cohort_core::models::{Group, ScoredMember};

use super::phase2_splitting::Cohort;
use crate::ledger::AssignmentLedger;

/// Turn cohorts into output groups and record each member's group label.
///
/// When `cohorts` is empty, a single group named `default_label` holding the
/// whole roster (possibly empty) is produced instead.
pub fn assemble_groups(
    cohorts: Vec<Cohort>,
    roster: &[ScoredMember],
    ledger: &mut AssignmentLedger,
    default_label: &str,
) -> Vec<Group> {
    if cohorts.is_empty() {
        for idx in 0..roster.len() {
            ledger.assign_group(idx, default_label);
        }
        return vec![Group::new(default_label, roster.to_vec())];
    }

    cohorts
        .into_iter()
        .map(|cohort| {
            for &idx in &cohort.members {
                ledger.assign_group(idx, &cohort.label);
            }
            let members = cohort.members.iter().map(|&i| roster[i].clone()).collect();
            Group::new(cohort.label, members)
        })
        .collect()
}

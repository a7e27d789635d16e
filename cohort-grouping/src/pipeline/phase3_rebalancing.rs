//! Phase 3: Rebalancing split subgroups.
//!
//! Greedy single pass. Each undersized subgroup takes at most one member from
//! every sibling larger than `min`, preferring a member of the recipient's own
//! dominant tier. A recipient can stay undersized once donors run out.

use cohort_core::models::{ScoredMember, SkillTier, TierCounts};
use tracing::{debug, warn};

use super::phase2_splitting::Cohort;

/// One member moved between sibling subgroups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub member: usize,
    pub from: usize,
    pub to: usize,
    /// Whether the moved member matched the recipient's dominant tier.
    pub tier_matched: bool,
}

/// What a rebalancing pass did.
#[derive(Debug, Clone, Default)]
pub struct RebalanceReport {
    pub transfers: Vec<Transfer>,
    /// Subgroup positions still below `min` afterwards.
    pub undersized: Vec<usize>,
}

fn tier_counts(cohort: &Cohort, roster: &[ScoredMember]) -> TierCounts {
    TierCounts::from_members(cohort.members.iter().map(|&i| &roster[i]))
}

/// Pick the donor member to move: first of `tier`, else the first member.
fn pick_donor_member(
    donor: &Cohort,
    roster: &[ScoredMember],
    tier: Option<SkillTier>,
) -> (usize, bool) {
    tier.and_then(|t| donor.members.iter().position(|&i| roster[i].tier() == t))
        .map(|pos| (pos, true))
        .unwrap_or((0, false))
}

/// Rebalance sibling subgroups in place.
pub fn rebalance(cohorts: &mut [Cohort], roster: &[ScoredMember], min_size: usize) -> RebalanceReport {
    let mut report = RebalanceReport::default();

    for to in 0..cohorts.len() {
        if cohorts[to].len() >= min_size {
            continue;
        }

        for from in 0..cohorts.len() {
            if cohorts[to].len() >= min_size {
                break;
            }
            if from == to || cohorts[from].len() <= min_size {
                continue;
            }

            let dominant = tier_counts(&cohorts[to], roster).dominant();
            let (pos, tier_matched) = pick_donor_member(&cohorts[from], roster, dominant);
            let member = cohorts[from].members.remove(pos);
            cohorts[to].members.push(member);

            debug!(
                from = %cohorts[from].label,
                to = %cohorts[to].label,
                member = %roster[member].member.id,
                tier_matched,
                "Phase 3: moved member"
            );
            report.transfers.push(Transfer {
                member,
                from,
                to,
                tier_matched,
            });
        }

        if cohorts[to].len() < min_size {
            warn!(
                cohort = %cohorts[to].label,
                size = cohorts[to].len(),
                min_size,
                "Phase 3: no donors left, subgroup stays undersized"
            );
            report.undersized.push(to);
        }
    }

    report
}

//! Property tests for cohort-grouping.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use cohort_core::config::GroupingConfig;
use cohort_core::models::Member;
use cohort_grouping::pipeline::phase1_bucketing::Bucket;
use cohort_grouping::pipeline::phase2_splitting::{split_bucket, Cohort};
use cohort_grouping::pipeline::phase3_rebalancing::rebalance;
use cohort_grouping::run_pipeline;

const SKILLS: &[&str] = &[
    "",
    "パソコンを持っていない",
    "マウスが使える",
    "マウスが使える,メールの送受信ができる",
    "プログラミングができる",
    "Wordで文書が作れる,Excelの関数が使える",
    "プログラミングができる,ホームページが作れる,Excelの関数が使える",
    "料理が得意",
];

const SLOTS: &[&str] = &["", "mon", "mon-A", "mon-B", "tue", "wed", "sat-am", "sat-pm"];

fn arb_member() -> impl Strategy<Value = (usize, usize, usize)> {
    (0..SKILLS.len(), 0..SLOTS.len(), 0..SLOTS.len())
}

fn build_roster(seeds: &[(usize, usize, usize)]) -> Vec<Member> {
    seeds
        .iter()
        .enumerate()
        .map(|(i, &(skill, first, second))| {
            Member::new(
                format!("member {i}"),
                format!("id-{i}"),
                SKILLS[skill],
                SLOTS[first],
                SLOTS[second],
            )
        })
        .collect()
}

fn arb_policy() -> impl Strategy<Value = GroupingConfig> {
    (1usize..6, 0usize..5).prop_map(|(min, extra)| GroupingConfig::with_bounds(min, min + extra))
}

proptest! {
    #[test]
    fn prop_partition_is_complete_and_disjoint(
        seeds in prop::collection::vec(arb_member(), 0..80),
        policy in arb_policy(),
    ) {
        let roster = build_roster(&seeds);
        let outcome = run_pipeline(&roster, &policy);

        let mut counts: HashMap<String, usize> = HashMap::new();
        for group in &outcome.groups {
            for m in &group.members {
                *counts.entry(m.member.id.clone()).or_default() += 1;
            }
        }
        prop_assert_eq!(counts.len(), roster.len());
        prop_assert!(counts.values().all(|&c| c == 1));
        prop_assert!(!outcome.groups.is_empty());
    }

    #[test]
    fn prop_every_member_has_a_listed_group(
        seeds in prop::collection::vec(arb_member(), 0..60),
        policy in arb_policy(),
    ) {
        let roster = build_roster(&seeds);
        let outcome = run_pipeline(&roster, &policy);
        for idx in 0..roster.len() {
            let label = outcome.group_label_of(idx);
            prop_assert!(label.is_some());
            prop_assert!(outcome.get(label.unwrap()).is_some());
        }
    }

    #[test]
    fn prop_output_labels_are_unique(
        seeds in prop::collection::vec(arb_member(), 0..80),
        policy in arb_policy(),
    ) {
        let roster = build_roster(&seeds);
        let outcome = run_pipeline(&roster, &policy);
        let labels = outcome.labels();
        let unique: HashSet<&str> = labels.iter().copied().collect();
        prop_assert_eq!(unique.len(), labels.len());
    }

    #[test]
    fn prop_idempotent(
        seeds in prop::collection::vec(arb_member(), 0..60),
        policy in arb_policy(),
    ) {
        let roster = build_roster(&seeds);
        let first = run_pipeline(&roster, &policy);
        let second = run_pipeline(&roster, &policy);
        prop_assert_eq!(first.labels(), second.labels());
        prop_assert_eq!(first.groups, second.groups);
    }

    #[test]
    fn prop_groups_never_exceed_max(
        seeds in prop::collection::vec(arb_member(), 0..80),
        policy in arb_policy(),
    ) {
        let roster = build_roster(&seeds);
        let outcome = run_pipeline(&roster, &policy);
        for group in &outcome.groups {
            prop_assert!(group.len() <= policy.max_size);
        }
    }

    #[test]
    fn prop_split_count_is_ceil_of_size_over_max(size in 1usize..120, max in 1usize..10) {
        let roster = build_roster(&vec![(2, 1, 0); size]);
        let scored = cohort_scoring::score_roster(&roster);
        let bucket = Bucket { label: "mon".to_string(), members: (0..size).collect() };
        let mut taken = HashSet::from(["mon".to_string()]);
        let result = split_bucket(&bucket, &scored, max, &mut taken);
        let expected = if size > max { size.div_ceil(max) } else { 1 };
        prop_assert_eq!(result.cohorts.len(), expected);
        let total: usize = result.cohorts.iter().map(Cohort::len).sum();
        prop_assert_eq!(total, size);
    }

    #[test]
    fn prop_rebalance_fills_when_supply_allows(extra_b in 3usize..10, extra_c in 3usize..10) {
        // [2, 4 + extra_b, 4 + extra_c] with min 4: both donors can give.
        let size = 2 + 4 + extra_b + 4 + extra_c;
        let roster = build_roster(&vec![(2, 1, 0); size]);
        let scored = cohort_scoring::score_roster(&roster);
        let b_end = 2 + 4 + extra_b;
        let mut cohorts = vec![
            Cohort { label: "mon-A".to_string(), members: (0..2).collect() },
            Cohort { label: "mon-B".to_string(), members: (2..b_end).collect() },
            Cohort { label: "mon-C".to_string(), members: (b_end..size).collect() },
        ];
        let report = rebalance(&mut cohorts, &scored, 4);
        prop_assert!(report.undersized.is_empty());
        prop_assert!(cohorts.iter().all(|c| c.len() >= 4));
        prop_assert_eq!(cohorts.iter().map(Cohort::len).sum::<usize>(), size);
    }
}

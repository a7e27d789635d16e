//! Integration tests for cohort-grouping: the full pipeline end to end.

use std::collections::HashSet;

use cohort_core::config::{CohortConfig, GroupingConfig};
use cohort_core::errors::{CohortError, ConfigError, RosterError};
use cohort_core::models::{Member, SkillTier};
use cohort_grouping::{run_pipeline, GroupingEngine};

const ADVANCED: &str = "プログラミングができる,ホームページが作れる,Excelの関数が使える";
const INTERMEDIATE: &str = "プログラミングができる";
const BEGINNER: &str = "マウスが使える";
const NO_PC: &str = "パソコンを持っていない";

fn member(id: &str, skills: &str, first: &str, second: &str) -> Member {
    Member::new(format!("name-{id}"), id, skills, first, second)
}

/// 3 advanced, 4 intermediate, 6 beginner, all preferring "sat".
fn saturday_thirteen() -> Vec<Member> {
    let mut roster = Vec::new();
    for i in 0..3 {
        roster.push(member(&format!("a{i}"), ADVANCED, "sat", ""));
    }
    for i in 0..4 {
        roster.push(member(&format!("i{i}"), INTERMEDIATE, "sat", ""));
    }
    for i in 0..6 {
        roster.push(member(&format!("b{i}"), BEGINNER, "sat", ""));
    }
    roster
}

fn mixed_roster() -> Vec<Member> {
    vec![
        member("1", ADVANCED, "sat-am", "sun-pm"),
        member("2", BEGINNER, "sun-pm", ""),
        member("3", "", "", "sat-am"),
        member("4", NO_PC, "sat-am", ""),
        member("5", INTERMEDIATE, "", ""),
        member("6", BEGINNER, "wed", "sun-pm"),
        member("7", ADVANCED, "sun-pm", "sat-am"),
        member("8", "", "", ""),
        member("9", INTERMEDIATE, "sat-am", ""),
        member("10", BEGINNER, "sat-am", "wed"),
    ]
}

fn group_ids(outcome: &cohort_grouping::GroupingOutcome, label: &str) -> Vec<String> {
    outcome
        .get(label)
        .map(|g| g.members.iter().map(|m| m.member.id.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn empty_roster_yields_single_default_group() {
    let outcome = run_pipeline(&[], &GroupingConfig::default());
    assert_eq!(outcome.labels(), vec!["all-members"]);
    assert_eq!(outcome.groups[0].len(), 0);
    assert_eq!(outcome.summary.total_members, 0);
    assert_eq!(outcome.summary.group_count, 1);
}

#[test]
fn every_member_lands_in_exactly_one_group() {
    let roster = mixed_roster();
    let outcome = run_pipeline(&roster, &GroupingConfig::default());

    let mut seen = HashSet::new();
    for group in &outcome.groups {
        for m in &group.members {
            assert!(seen.insert(m.member.id.clone()), "duplicate {}", m.member.id);
        }
    }
    let expected: HashSet<String> = roster.iter().map(|m| m.id.clone()).collect();
    assert_eq!(seen, expected);
    assert_eq!(outcome.member_count(), roster.len());
}

#[test]
fn ledger_group_labels_are_output_keys() {
    let roster = mixed_roster();
    let outcome = run_pipeline(&roster, &GroupingConfig::default());
    let labels: HashSet<&str> = outcome.labels().into_iter().collect();
    for idx in 0..roster.len() {
        let label = outcome.group_label_of(idx).expect("every member has a group");
        assert!(labels.contains(label));
        let group = outcome.get(label).unwrap();
        assert!(group.members.iter().any(|m| m.member.id == roster[idx].id));
    }
}

#[test]
fn mixed_roster_buckets_by_preference() {
    let outcome = run_pipeline(&mixed_roster(), &GroupingConfig::default());

    // Labels in first-appearance order: sat-am, sun-pm, wed.
    // Pass 1: sat-am {1,4,9,10}, sun-pm {2,7}, wed {6}.
    // Pass 2: 3 → sat-am.  Pass 3: 5 and 8 → wed (smallest).
    assert_eq!(outcome.labels(), vec!["sat-am", "sun-pm", "wed"]);
    assert_eq!(group_ids(&outcome, "sat-am"), vec!["1", "4", "9", "10", "3"]);
    assert_eq!(group_ids(&outcome, "sun-pm"), vec!["2", "7"]);
    assert_eq!(group_ids(&outcome, "wed"), vec!["6", "5", "8"]);

    assert_eq!(outcome.bucket_label_of(2), Some("sat-am"));
    assert_eq!(outcome.bucket_label_of(7), Some("wed"));
    assert_eq!(
        outcome.summary.undersized_groups,
        vec!["sun-pm".to_string(), "wed".to_string()]
    );
    assert!(outcome.summary.split_buckets.is_empty());
}

#[test]
fn thirteen_in_one_bucket_split_into_a_b_c_and_rebalanced() {
    let outcome = run_pipeline(&saturday_thirteen(), &GroupingConfig::default());

    assert_eq!(outcome.labels(), vec!["sat-A", "sat-B", "sat-C"]);
    assert_eq!(outcome.summary.split_buckets, vec!["sat".to_string()]);

    // Tier-clustered fill gives 5/5/3; sat-A donates its head to sat-C.
    assert_eq!(group_ids(&outcome, "sat-A"), vec!["a1", "a2", "i0", "i1"]);
    assert_eq!(group_ids(&outcome, "sat-B"), vec!["i2", "i3", "b0", "b1", "b2"]);
    assert_eq!(group_ids(&outcome, "sat-C"), vec!["b3", "b4", "b5", "a0"]);
    assert_eq!(outcome.summary.transfers, 1);
    assert!(outcome.summary.undersized_groups.is_empty());
    assert!(outcome.summary.oversized_groups.is_empty());

    let c = outcome.get("sat-C").unwrap();
    assert_eq!(c.tier_counts.beginner, 3);
    assert_eq!(c.tier_counts.advanced, 1);
}

#[test]
fn split_labels_avoid_a_preference_with_the_same_name() {
    let mut roster: Vec<Member> = (0..4)
        .map(|i| member(&format!("x{i}"), BEGINNER, "sat-A", ""))
        .collect();
    roster.extend(saturday_thirteen());
    let outcome = run_pipeline(&roster, &GroupingConfig::default());

    assert_eq!(outcome.labels(), vec!["sat-A", "sat-B", "sat-C", "sat-D"]);
    assert_eq!(group_ids(&outcome, "sat-A"), vec!["x0", "x1", "x2", "x3"]);
    for (idx, m) in roster.iter().enumerate() {
        let label = outcome.group_label_of(idx).unwrap();
        let group = outcome.get(label).unwrap();
        assert!(
            group.members.iter().any(|g| g.member.id == m.id),
            "{} missing from {label}",
            m.id
        );
    }
}

#[test]
fn split_groups_respect_bounds() {
    let mut roster = saturday_thirteen();
    roster.extend(saturday_thirteen().into_iter().map(|mut m| {
        m.id = format!("x{}", m.id);
        m
    }));
    let config = GroupingConfig::default();
    let outcome = run_pipeline(&roster, &config);
    assert_eq!(outcome.groups.len(), 5);
    for group in &outcome.groups {
        assert!(group.len() >= config.min_size, "{} too small", group.label);
        assert!(group.len() <= config.max_size, "{} too large", group.label);
    }
}

#[test]
fn no_preferences_anywhere_uses_sentinel_label() {
    let roster = vec![
        member("1", BEGINNER, "", ""),
        member("2", BEGINNER, "", ""),
        member("3", BEGINNER, "", ""),
        member("4", BEGINNER, "", ""),
    ];
    let outcome = run_pipeline(&roster, &GroupingConfig::default());
    assert_eq!(outcome.labels(), vec!["unspecified"]);
    assert_eq!(outcome.groups[0].len(), 4);
}

#[test]
fn pipeline_is_idempotent() {
    let roster = mixed_roster();
    let config = GroupingConfig::with_bounds(2, 3);
    let first = run_pipeline(&roster, &config);
    let second = run_pipeline(&roster, &config);
    assert_eq!(first.groups, second.groups);
    assert_eq!(first.assignments, second.assignments);
    assert_eq!(first.summary, second.summary);
}

#[test]
fn summary_counts_tiers_and_tags() {
    let roster = vec![
        member("1", ADVANCED, "x", ""),
        member("2", NO_PC, "x", ""),
        member("3", "", "x", ""),
        member("4", "動画編集ができる,デザインツールが使える", "x", ""),
    ];
    let outcome = run_pipeline(&roster, &GroupingConfig::default());
    let totals = outcome.summary.tier_totals;
    assert_eq!(totals.advanced, 1);
    assert_eq!(totals.non_pc_user, 1);
    assert_eq!(totals.beginner, 1);
    assert_eq!(totals.intermediate, 1);
    assert_eq!(outcome.summary.composite_tags.creator, 1);
    assert_eq!(outcome.summary.composite_tags.untagged, 3);

    let summary = outcome.tier_summary();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].0, "x");
    assert_eq!(summary[0].1.get(SkillTier::Advanced), 1);
}

#[test]
fn engine_rejects_invalid_policy() {
    let err = GroupingEngine::new(GroupingConfig::with_bounds(5, 4)).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));

    let engine = GroupingEngine::from_config(&CohortConfig::default()).unwrap();
    assert_eq!(engine.config().min_size, 4);
    assert_eq!(engine.config().max_size, 6);
}

#[test]
fn engine_groups_json_roster() {
    let engine = GroupingEngine::default();
    let json = r#"[
        {"name": "Aki", "id": "1", "skillText": "Excel", "firstChoice": "sat", "secondChoice": ""},
        {"name": "Ben", "id": 2, "skillText": "", "firstChoice": 7, "secondChoice": "sat"}
    ]"#;
    let outcome = engine.group_json(json).unwrap();
    assert_eq!(outcome.labels(), vec!["sat"]);
    assert_eq!(outcome.groups[0].len(), 2);
    assert_eq!(outcome.groups[0].members[1].member.id, "2");
}

#[test]
fn engine_reports_missing_roster() {
    let engine = GroupingEngine::default();
    let err = engine.group_json("null").unwrap_err();
    assert!(matches!(
        err,
        CohortError::Roster(RosterError::MissingRoster { .. })
    ));

    let err = engine.group_json(r#"{"members": []}"#).unwrap_err();
    assert!(matches!(
        err,
        CohortError::Roster(RosterError::MissingRoster { .. })
    ));

    let err = engine.group_json("[1]").unwrap_err();
    assert!(matches!(
        err,
        CohortError::Roster(RosterError::MalformedRecord { index: 0, .. })
    ));
}

#[test]
fn outcome_serializes_to_json() {
    let outcome = run_pipeline(&saturday_thirteen(), &GroupingConfig::default());
    let json = outcome.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["groups"][0]["label"], "sat-A");
    assert_eq!(value["groups"][2]["tier_counts"]["beginner"], 3);
    assert_eq!(value["summary"]["total_members"], 13);
}

#[test]
fn pipeline_runs_under_json_tracing() {
    cohort_core::tracing_setup::init_tracing_with_filter("cohort_grouping=debug,cohort_scoring=debug");
    let outcome = run_pipeline(&saturday_thirteen(), &GroupingConfig::default());
    assert_eq!(outcome.groups.len(), 3);
}

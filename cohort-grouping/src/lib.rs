//! # cohort-grouping
//!
//! 4-phase grouping pipeline: scoring → preference bucketing → cohort
//! splitting → rebalancing, followed by final assembly of labelled groups
//! with per-group tier counts.
//!
//! Assignment state lives in an [`AssignmentLedger`] keyed by roster
//! position; the caller's roster is never mutated.

pub mod engine;
pub mod ledger;
pub mod outcome;
pub mod pipeline;
pub mod roster;

pub use engine::GroupingEngine;
pub use ledger::{Assignment, AssignmentLedger};
pub use outcome::{CompositeTagCounts, GroupingOutcome, GroupingSummary};
pub use pipeline::run_pipeline;
pub use roster::{parse_roster, roster_from_value};

//! Composite-skill tag detection.
//!
//! Checked in order: creator, office worker, all-rounder. The first hit wins.

use cohort_core::models::CompositeTag;

const VIDEO_KEYWORDS: &[&str] = &["動画", "編集"];
const DESIGN_KEYWORDS: &[&str] = &["デザイン", "Photoshop", "Illustrator", "Canva"];
const TOUCH_TYPING_KEYWORDS: &[&str] = &["ブラインドタッチ", "タッチタイピング"];
const SPREADSHEET_KEYWORDS: &[&str] = &["Excel", "エクセル", "表計算"];

/// Distinct matched statements needed for the all-rounder tag.
pub const ALL_ROUNDER_MIN_STATEMENTS: usize = 4;

fn any_statement_has(statements: &[String], keywords: &[&str]) -> bool {
    statements
        .iter()
        .any(|s| keywords.iter().any(|k| s.contains(k)))
}

/// Pick the composite tag for a statement list.
///
/// `matched_distinct` is the number of distinct statements that matched at
/// least one rule in the weight table.
pub fn detect_composite_tag(statements: &[String], matched_distinct: usize) -> Option<CompositeTag> {
    if any_statement_has(statements, VIDEO_KEYWORDS) && any_statement_has(statements, DESIGN_KEYWORDS) {
        return Some(CompositeTag::Creator);
    }
    if any_statement_has(statements, TOUCH_TYPING_KEYWORDS)
        && any_statement_has(statements, SPREADSHEET_KEYWORDS)
    {
        return Some(CompositeTag::OfficeWorker);
    }
    if matched_distinct >= ALL_ROUNDER_MIN_STATEMENTS {
        return Some(CompositeTag::AllRounder);
    }
    None
}

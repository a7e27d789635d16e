//! Skill statement weight table.
//!
//! Evaluated in table order: an exact match on a statement wins outright,
//! otherwise every rule whose text contains the statement (or is contained
//! by it) contributes its weight.

/// A single statement → weight entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillRule {
    pub statement: &'static str,
    pub weight: i32,
}

/// Statement signalling the member has no computer of their own.
/// Overrides every other statement in the same description.
pub const NO_COMPUTER_STATEMENT: &str = "パソコンを持っていない";
pub const NO_COMPUTER_WEIGHT: i32 = -10;

/// Ordered statement table.
pub const SKILL_RULES: &[SkillRule] = &[
    SkillRule { statement: "電源の入れ方がわからない", weight: 0 },
    SkillRule { statement: "マウスが使える", weight: 1 },
    SkillRule { statement: "キーボードで文字入力ができる", weight: 1 },
    SkillRule { statement: "インターネットで検索ができる", weight: 1 },
    SkillRule { statement: "メールの送受信ができる", weight: 1 },
    SkillRule { statement: "ブラインドタッチができる", weight: 3 },
    SkillRule { statement: "Wordで文書が作れる", weight: 2 },
    SkillRule { statement: "Excelで表が作れる", weight: 2 },
    SkillRule { statement: "Excelの関数が使える", weight: 3 },
    SkillRule { statement: "PowerPointで資料が作れる", weight: 2 },
    SkillRule { statement: "写真の加工ができる", weight: 2 },
    SkillRule { statement: "動画編集ができる", weight: 4 },
    SkillRule { statement: "デザインツールが使える", weight: 4 },
    SkillRule { statement: "ホームページが作れる", weight: 4 },
    SkillRule { statement: "プログラミングができる", weight: 5 },
];

/// True if `statement` is the no-computer statement or contains it.
pub fn signals_no_computer(statement: &str) -> bool {
    statement.contains(NO_COMPUTER_STATEMENT)
}

/// Rules that apply to one statement.
///
/// Returns the single exact-match rule if there is one, otherwise every
/// rule related by substring in either direction, in table order.
pub fn matching_rules(statement: &str) -> Vec<&'static SkillRule> {
    if let Some(exact) = SKILL_RULES.iter().find(|r| r.statement == statement) {
        return vec![exact];
    }
    SKILL_RULES
        .iter()
        .filter(|r| r.statement.contains(statement) || statement.contains(r.statement))
        .collect()
}

/// Weight contributed by one statement; 0 when nothing matches.
pub fn statement_weight(statement: &str) -> i32 {
    matching_rules(statement).iter().map(|r| r.weight).sum()
}

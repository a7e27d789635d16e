//! Roster loading from JSON.
//!
//! Records are coerced rather than rejected: missing or `null` fields become
//! empty strings, numbers and booleans in `name`/`id` are stringified, any
//! non-string skill or preference value becomes empty ("no preference"), and
//! preference labels are trimmed.
//! Keys are accepted in camelCase or snake_case.

use cohort_core::errors::RosterError;
use cohort_core::models::Member;
use serde_json::{Map, Value};
use tracing::warn;

fn field<'a>(record: &'a Map<String, Value>, camel: &str, snake: &str) -> Option<&'a Value> {
    record.get(camel).or_else(|| record.get(snake))
}

/// Identity fields: scalars are stringified.
fn coerce_identity(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Skill text: anything but a string is empty. Kept verbatim otherwise.
fn coerce_text(value: Option<&Value>, index: usize, name: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => {
            warn!(index, field = name, value = %other, "coercing non-string field to empty");
            String::new()
        }
    }
}

/// Preferences: as skill text, with surrounding whitespace removed.
fn coerce_preference(value: Option<&Value>, index: usize, name: &str) -> String {
    coerce_text(value, index, name).trim().to_string()
}

/// Build a roster from an already-decoded JSON value.
///
/// The value must be an array of objects.
pub fn roster_from_value(value: &Value) -> Result<Vec<Member>, RosterError> {
    let records = match value {
        Value::Array(records) => records,
        Value::Null => {
            return Err(RosterError::MissingRoster {
                reason: "roster is null".to_string(),
            })
        }
        _ => {
            return Err(RosterError::MissingRoster {
                reason: "expected an array of member records".to_string(),
            })
        }
    };

    records
        .iter()
        .enumerate()
        .map(|(index, record)| -> Result<Member, RosterError> {
            let record = record.as_object().ok_or_else(|| RosterError::MalformedRecord {
                index,
                message: "expected an object".to_string(),
            })?;
            Ok(Member {
                name: coerce_identity(record.get("name")),
                id: coerce_identity(record.get("id")),
                skill_text: coerce_text(
                    field(record, "skillText", "skill_text"),
                    index,
                    "skillText",
                ),
                first_choice: coerce_preference(
                    field(record, "firstChoice", "first_choice"),
                    index,
                    "firstChoice",
                ),
                second_choice: coerce_preference(
                    field(record, "secondChoice", "second_choice"),
                    index,
                    "secondChoice",
                ),
            })
        })
        .collect()
}

/// Parse a JSON roster document.
pub fn parse_roster(json: &str) -> Result<Vec<Member>, RosterError> {
    let value: Value = serde_json::from_str(json)?;
    roster_from_value(&value)
}

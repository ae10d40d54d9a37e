//! Race result entry type and integer-text parsing.

use serde::{Deserialize, Deserializer, Serialize};

/// One row of race-result data attached to a profile.
///
/// Every field is stored as free text, exactly as entered. Numeric
/// fields (`pop`, `rank`, `prize`, `fans`) keep their string form; use
/// the `*_value` accessors to read them as integers. An empty string
/// means "unspecified".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceEntry {
    /// Race date, free text (e.g. "2024/04/07").
    #[serde(default)]
    pub date: String,
    /// Course / venue, free text.
    #[serde(default)]
    pub course: String,
    /// Race name.
    #[serde(default)]
    pub name: String,
    /// Grade label, free text (e.g. "GⅠ", "L"). Classified for display
    /// only, never validated.
    #[serde(default)]
    pub grade: String,
    /// Distance, free text (no unit validation).
    #[serde(default)]
    pub distance: String,
    /// Popularity rank; positive integer text or empty.
    #[serde(default, deserialize_with = "text_or_number")]
    pub pop: String,
    /// Finishing position; positive integer text or empty.
    #[serde(default, deserialize_with = "text_or_number")]
    pub rank: String,
    /// Jockey name, relevant in fictional mode only.
    #[serde(default)]
    pub jockey: String,
    /// Carried weight, free text.
    #[serde(default)]
    pub weight: String,
    /// Win odds, free text.
    #[serde(default)]
    pub odds: String,
    /// Prize money in man-en (ten-thousands); non-negative integer text.
    /// Defaults to "0" when absent from a loaded document.
    #[serde(default = "zero_text", deserialize_with = "text_or_number")]
    pub prize: String,
    /// Fan count gained; non-negative integer text. Defaults to "0" when
    /// absent from a loaded document.
    #[serde(default = "zero_text", deserialize_with = "text_or_number")]
    pub fans: String,
}

fn zero_text() -> String {
    "0".to_string()
}

/// Accepts either a JSON string or a JSON number for a text field.
///
/// Documents written by the original tool store `prize`/`fans` as the
/// number `0` after a load round-trip, while form input produces
/// strings. Both forms normalize to the string representation here.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Int(n) => n.to_string(),
        TextOrNumber::Float(n) => n.to_string(),
    })
}

impl RaceEntry {
    /// Popularity rank as an integer, if the text has a leading integer.
    pub fn pop_value(&self) -> Option<i64> {
        parse_int_text(&self.pop)
    }

    /// Finishing position as an integer, if the text has a leading integer.
    pub fn rank_value(&self) -> Option<i64> {
        parse_int_text(&self.rank)
    }

    /// Prize money (man-en) as an integer, if parseable.
    pub fn prize_value(&self) -> Option<i64> {
        parse_int_text(&self.prize)
    }

    /// Fan count as an integer, if parseable.
    pub fn fans_value(&self) -> Option<i64> {
        parse_int_text(&self.fans)
    }
}

/// Parses the leading integer of a text field.
///
/// Matches the lenient semantics the document format inherited from its
/// origin: leading whitespace is skipped, an optional sign is honored,
/// and anything after the leading digit run is ignored (`"3着"` parses
/// as 3). Returns `None` when no leading digit exists or the digit run
/// overflows `i64`.
pub fn parse_int_text(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(rest.len(), |(i, _)| i);
        rest.get(..end)?
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_text_plain() {
        assert_eq!(parse_int_text("12"), Some(12));
        assert_eq!(parse_int_text("0"), Some(0));
        assert_eq!(parse_int_text("-3"), Some(-3));
        assert_eq!(parse_int_text("+7"), Some(7));
    }

    #[test]
    fn test_parse_int_text_leading_digits_win() {
        assert_eq!(parse_int_text("3着"), Some(3));
        assert_eq!(parse_int_text("12abc"), Some(12));
        assert_eq!(parse_int_text(" 5 "), Some(5));
    }

    #[test]
    fn test_parse_int_text_rejects_non_numeric() {
        assert_eq!(parse_int_text(""), None);
        assert_eq!(parse_int_text("abc"), None);
        assert_eq!(parse_int_text("着3"), None);
        assert_eq!(parse_int_text("-"), None);
    }

    #[test]
    fn test_default_entry_is_all_empty_except_counters() {
        let entry = RaceEntry::default();
        assert_eq!(entry.date, "");
        assert_eq!(entry.rank, "");
        assert_eq!(entry.prize, "");
        assert_eq!(entry.fans, "");
        assert_eq!(entry.rank_value(), None);
    }

    #[test]
    fn test_deserialize_defaults_prize_and_fans() {
        let entry: RaceEntry =
            serde_json::from_str(r#"{"date":"2024/04/07","rank":"1"}"#).expect("entry json");
        assert_eq!(entry.prize, "0");
        assert_eq!(entry.fans, "0");
        assert_eq!(entry.rank, "1");
    }

    #[test]
    fn test_deserialize_accepts_numbers() {
        let entry: RaceEntry =
            serde_json::from_str(r#"{"rank":1,"prize":0,"fans":12345}"#).expect("entry json");
        assert_eq!(entry.rank, "1");
        assert_eq!(entry.prize, "0");
        assert_eq!(entry.fans, "12345");
        assert_eq!(entry.fans_value(), Some(12345));
    }

    #[test]
    fn test_loaded_value_wins_over_default() {
        let entry: RaceEntry = serde_json::from_str(r#"{"prize":"800"}"#).expect("entry json");
        assert_eq!(entry.prize_value(), Some(800));
    }
}

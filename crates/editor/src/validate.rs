//! Race-entry validation.
//!
//! Validation collects every violation instead of stopping at the
//! first, so the caller can surface the full list at once. Empty fields
//! mean "unspecified" and always pass; a present value must parse to an
//! integer in the field's range.

use umacard_schemas::RaceEntry;

/// A single field-level violation in a race entry.
///
/// Variants are ordered the way violations are reported: popularity,
/// finishing position, prize, fan count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RaceEntryError {
    /// `pop` is present but not a positive integer.
    #[error("popularity must be an integer of 1 or more")]
    PopularityNotPositive,
    /// `rank` is present but not a positive integer.
    #[error("finishing position must be an integer of 1 or more")]
    RankNotPositive,
    /// `prize` is present but not a non-negative integer.
    #[error("prize money must be an integer of 0 or more")]
    PrizeNegative,
    /// `fans` is present but not a non-negative integer.
    #[error("fan count must be an integer of 0 or more")]
    FansNegative,
}

/// Checks a race entry's numeric-text fields.
///
/// Does not mutate anything and has no effect on the pending state;
/// `ProfileSession::commit` runs this before touching the race list.
///
/// # Errors
///
/// Returns the ordered list of every violated check.
pub fn validate_entry(entry: &RaceEntry) -> Result<(), Vec<RaceEntryError>> {
    let mut errors = Vec::new();

    if !entry.pop.is_empty() && !entry.pop_value().is_some_and(|v| v >= 1) {
        errors.push(RaceEntryError::PopularityNotPositive);
    }
    if !entry.rank.is_empty() && !entry.rank_value().is_some_and(|v| v >= 1) {
        errors.push(RaceEntryError::RankNotPositive);
    }
    if !entry.prize.is_empty() && !entry.prize_value().is_some_and(|v| v >= 0) {
        errors.push(RaceEntryError::PrizeNegative);
    }
    if !entry.fans.is_empty() && !entry.fans_value().is_some_and(|v| v >= 0) {
        errors.push(RaceEntryError::FansNegative);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Joins violation messages for a one-line error display.
pub(crate) fn join_messages(errors: &[RaceEntryError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pop: &str, rank: &str, prize: &str, fans: &str) -> RaceEntry {
        RaceEntry {
            pop: pop.to_string(),
            rank: rank.to_string(),
            prize: prize.to_string(),
            fans: fans.to_string(),
            ..RaceEntry::default()
        }
    }

    #[test]
    fn test_all_empty_passes() {
        assert_eq!(validate_entry(&RaceEntry::default()), Ok(()));
    }

    #[test]
    fn test_valid_values_pass() {
        assert_eq!(validate_entry(&entry("1", "3", "0", "12000")), Ok(()));
    }

    #[test]
    fn test_zero_pop_fails() {
        assert_eq!(
            validate_entry(&entry("0", "", "", "")),
            Err(vec![RaceEntryError::PopularityNotPositive])
        );
    }

    #[test]
    fn test_negative_rank_fails() {
        assert_eq!(
            validate_entry(&entry("", "-1", "", "")),
            Err(vec![RaceEntryError::RankNotPositive])
        );
    }

    #[test]
    fn test_negative_money_fails() {
        assert_eq!(
            validate_entry(&entry("", "", "-5", "")),
            Err(vec![RaceEntryError::PrizeNegative])
        );
        assert_eq!(
            validate_entry(&entry("", "", "", "-1")),
            Err(vec![RaceEntryError::FansNegative])
        );
    }

    #[test]
    fn test_non_numeric_present_fails() {
        assert_eq!(
            validate_entry(&entry("abc", "", "", "")),
            Err(vec![RaceEntryError::PopularityNotPositive])
        );
    }

    #[test]
    fn test_collects_all_violations_in_order() {
        let result = validate_entry(&entry("0", "0", "-1", "-1"));
        assert_eq!(
            result,
            Err(vec![
                RaceEntryError::PopularityNotPositive,
                RaceEntryError::RankNotPositive,
                RaceEntryError::PrizeNegative,
                RaceEntryError::FansNegative,
            ])
        );
    }

    #[test]
    fn test_leading_integer_text_passes() {
        // "3着" carries a leading integer and passes the range check.
        assert_eq!(validate_entry(&entry("", "3着", "", "")), Ok(()));
    }
}

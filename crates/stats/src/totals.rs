//! Aggregate race totals.

use serde::Serialize;
use umacard_schemas::RaceEntry;

/// Aggregates computed from a race list.
///
/// Placing counters only count entries whose finishing position parses
/// to a positive integer; every entry counts toward the race total in
/// [`RaceTotals::summary`] regardless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaceTotals {
    /// Wins (rank parsed exactly 1).
    pub first: u32,
    /// Second places.
    pub second: u32,
    /// Third places.
    pub third: u32,
    /// Finished outside the top three (any other positive rank).
    pub other: u32,
    /// Total prize money in man-en; unparseable entries count as 0.
    pub total_prize: i64,
    /// Total fan count; unparseable entries count as 0.
    pub total_fans: i64,
    /// Career summary, e.g. `"12戦4勝 [4-2-1-5]"`.
    pub summary: String,
}

/// Computes aggregate totals over a race list.
pub fn compute_totals(races: &[RaceEntry]) -> RaceTotals {
    let mut first = 0u32;
    let mut second = 0u32;
    let mut third = 0u32;
    let mut other = 0u32;
    let mut total_prize = 0i64;
    let mut total_fans = 0i64;

    for race in races {
        match race.rank_value() {
            Some(1) => first += 1,
            Some(2) => second += 1,
            Some(3) => third += 1,
            Some(rank) if rank > 0 => other += 1,
            // Non-positive or unparseable ranks place nowhere.
            _ => {}
        }
        total_prize += race.prize_value().unwrap_or(0);
        total_fans += race.fans_value().unwrap_or(0);
    }

    let summary = format!(
        "{}戦{}勝 [{}-{}-{}-{}]",
        races.len(),
        first,
        first,
        second,
        third,
        other
    );

    RaceTotals {
        first,
        second,
        third,
        other,
        total_prize,
        total_fans,
        summary,
    }
}

//! Legacy rank-relative display banding.
//!
//! Spreads clustered percentages across a batch: the top match lands in
//! 70–85, ranks 2–4 stay at or below 65, ranks 7+ at or below 30, and nothing
//! drops under 15. Values are only meaningful within the batch they were
//! computed for.

use crate::matching::scorer::MatchResult;

const MIN_TARGET: f64 = 15.0;
const MAX_TARGET: f64 = 85.0;
const TOP_FLOOR: f64 = 70.0;
const MID_TIER_CAP: f64 = 65.0;
const LOW_TIER_CAP: f64 = 30.0;
const RANK_BONUS: f64 = 0.15;

/// Rescales one percentage given its rank `index` in a batch of `len` results
/// whose highest percentage is `max_pct`.
pub fn rank_relative_percentage(pct: u32, max_pct: u32, index: usize, len: usize) -> u32 {
    if max_pct == 0 || len == 0 {
        return pct;
    }

    let relative = f64::from(pct) / f64::from(max_pct);
    let remaining = len.saturating_sub(index) as f64 / len as f64;
    let rank_bonus = remaining.max(0.0) * RANK_BONUS;

    let mut score = MIN_TARGET + (relative + rank_bonus) * (MAX_TARGET - MIN_TARGET);

    if index == 0 && pct > 0 {
        score = score.clamp(TOP_FLOOR, MAX_TARGET);
    } else if (1..=3).contains(&index) {
        score = score.min(MID_TIER_CAP);
    } else if index > 5 {
        score = score.min(LOW_TIER_CAP);
    }

    score.clamp(MIN_TARGET, MAX_TARGET).round() as u32
}

/// Rewrites `display_percentage` across an already-ranked batch.
///
/// Input percentages must be the fixed-cap values. Order is left untouched and
/// each result is capped at its predecessor's value, so percentages never rise
/// further down the list.
pub fn apply_rank_relative(results: &mut [MatchResult]) {
    let len = results.len();
    let max_pct = results
        .iter()
        .map(|r| r.display_percentage)
        .max()
        .unwrap_or(0);
    if max_pct == 0 {
        return;
    }

    let mut ceiling = u32::MAX;
    for (index, result) in results.iter_mut().enumerate() {
        let banded = rank_relative_percentage(result.display_percentage, max_pct, index, len);
        let capped = banded.min(ceiling);
        result.display_percentage = capped;
        ceiling = capped;
    }
}

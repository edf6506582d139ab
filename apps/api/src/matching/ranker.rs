//! Ranking: filter unavailable mentors, score, sort, optionally rescale.

use tracing::debug;

use crate::matching::rescale::apply_rank_relative;
use crate::matching::scorer::{
    DisplayPolicy, MatchResult, MentorCandidate, MentorScorer, StudentCriteria,
    WeightedOverlapScorer,
};

/// Ranks mentors with the default [`WeightedOverlapScorer`].
#[allow(dead_code)]
pub fn rank_mentors(
    criteria: &StudentCriteria,
    candidates: &[MentorCandidate],
    policy: DisplayPolicy,
) -> Vec<MatchResult> {
    rank_with(&WeightedOverlapScorer::default(), criteria, candidates, policy)
}

/// Ranks mentors best-first.
///
/// Mentors with `availability == Some(false)` are dropped before scoring.
/// Order: raw score desc, years of experience desc, then input order.
/// Rank-relative rescaling never reorders, so the top result is stable
/// across policies.
pub fn rank_with(
    scorer: &dyn MentorScorer,
    criteria: &StudentCriteria,
    candidates: &[MentorCandidate],
    policy: DisplayPolicy,
) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = candidates
        .iter()
        .filter(|candidate| candidate.is_available())
        .map(|candidate| scorer.score(criteria, candidate))
        .collect();

    debug_assert!(results
        .iter()
        .all(|r| r.raw_score <= criteria.max_raw_score()));

    // sort_by is stable: equal keys keep input order
    results.sort_by(|a, b| {
        b.raw_score
            .cmp(&a.raw_score)
            .then_with(|| b.candidate.years().cmp(&a.candidate.years()))
    });

    if policy == DisplayPolicy::RankRelative {
        apply_rank_relative(&mut results);
    }

    debug!(
        backend = scorer.backend(),
        %policy,
        candidates = candidates.len(),
        excluded = candidates.len() - results.len(),
        returned = results.len(),
        "Ranked mentors"
    );

    results
}

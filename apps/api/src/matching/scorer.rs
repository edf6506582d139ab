//! Mentor scoring: weighted overlap of skills, role and company.
//!
//! Default: `WeightedOverlapScorer` (pure, synchronous, deterministic).
//!
//! `AppState` holds an `Arc<dyn MentorScorer>` so the scoring backend can be
//! swapped without touching the ranker or the handlers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::company::company_matches;
use crate::matching::explain::{build_explanation, build_match_reasons};
use crate::matching::normalize::{normalize_phrase, split_tokens};
use crate::matching::roles::{role_matches, RoleGroups};
use crate::matching::skills::skill_overlap;

pub const SKILL_WEIGHT: u32 = 2;
pub const ROLE_WEIGHT: u32 = 3;
pub const COMPANY_WEIGHT: u32 = 5;

/// Raw score treated as 100%: five matched skills plus role and company.
pub const FIXED_CAP_MAX_SCORE: u32 = 5 * SKILL_WEIGHT + ROLE_WEIGHT + COMPANY_WEIGHT;

// ────────────────────────────────────────────────────────────────────────────
// Input / output data models
// ────────────────────────────────────────────────────────────────────────────

/// A student's search filters, normalized once per request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentCriteria {
    pub skills: Vec<String>,
    pub target_role: String,
    pub target_companies: Vec<String>,
}

impl StudentCriteria {
    /// Builds criteria from the raw form values (comma-separated lists).
    pub fn from_raw(skills: &str, target_role: &str, target_companies: &str) -> Self {
        Self {
            skills: split_tokens(skills),
            target_role: normalize_phrase(target_role),
            target_companies: split_tokens(target_companies),
        }
    }

    /// Upper bound on the raw score any mentor can reach for these criteria.
    pub fn max_raw_score(&self) -> u32 {
        let skills = u32::try_from(self.skills.len()).unwrap_or(u32::MAX);
        skills
            .saturating_mul(SKILL_WEIGHT)
            .saturating_add(ROLE_WEIGHT + COMPANY_WEIGHT)
    }
}

/// Read-only view of a mentor profile as supplied by the profile store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorCandidate {
    pub id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default, alias = "experience_years")]
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub availability: Option<bool>,
}

impl MentorCandidate {
    /// The position used for role matching: `title` when set, otherwise `role`.
    pub fn position(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or(self.role.as_deref())
    }

    /// Only an explicit `false` hides a mentor.
    pub fn is_available(&self) -> bool {
        self.availability != Some(false)
    }

    pub fn years(&self) -> u32 {
        self.years_of_experience.unwrap_or(0)
    }
}

/// Outcome of scoring one mentor against one set of criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub candidate: MentorCandidate,
    pub raw_score: u32,
    pub display_percentage: u32, // 0 – 100
    pub skill_matches: Vec<String>,
    pub role_matched: bool,
    pub company_matched: bool,
    pub explanation: String,
    pub match_reasons: Vec<String>,
}

/// How raw scores become the percentage shown to students.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayPolicy {
    /// `min(round(raw / 18 * 100), 100)`; comparable across calls.
    #[default]
    FixedCap,
    /// Legacy cosmetic banding relative to rank within one batch.
    RankRelative,
}

impl DisplayPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayPolicy::FixedCap => "fixed_cap",
            DisplayPolicy::RankRelative => "rank_relative",
        }
    }
}

impl fmt::Display for DisplayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed_cap" | "fixed" => Ok(DisplayPolicy::FixedCap),
            "rank_relative" | "relative" => Ok(DisplayPolicy::RankRelative),
            other => Err(format!(
                "unknown display policy '{other}' (expected fixed_cap or rank_relative)"
            )),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores a single mentor. Implement this to swap scoring backends.
///
/// Carried in `AppState` as `Arc<dyn MentorScorer>`.
pub trait MentorScorer: Send + Sync {
    fn score(&self, criteria: &StudentCriteria, candidate: &MentorCandidate) -> MatchResult;

    /// Short label for logs and responses.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedOverlapScorer — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// skill overlap ×2 + role alignment ×3 + company match ×5.
#[derive(Debug, Clone, Default)]
pub struct WeightedOverlapScorer {
    pub role_groups: RoleGroups,
}

impl WeightedOverlapScorer {
    pub fn new(role_groups: RoleGroups) -> Self {
        Self { role_groups }
    }
}

impl MentorScorer for WeightedOverlapScorer {
    fn score(&self, criteria: &StudentCriteria, candidate: &MentorCandidate) -> MatchResult {
        let skill_matches = skill_overlap(&criteria.skills, &candidate.skills);
        let role_matched = role_matches(
            &self.role_groups,
            &criteria.target_role,
            candidate.position(),
        );
        let company_matched =
            company_matches(&criteria.target_companies, candidate.company.as_deref());

        let raw_score = raw_score(skill_matches.len(), role_matched, company_matched);

        let explanation = build_explanation(
            skill_matches.len(),
            role_matched,
            company_matched,
            candidate.years_of_experience,
        );
        let match_reasons = build_match_reasons(
            &skill_matches,
            role_matched,
            candidate.position(),
            company_matched,
            candidate.company.as_deref(),
            candidate.years_of_experience,
        );

        MatchResult {
            candidate: candidate.clone(),
            raw_score,
            display_percentage: fixed_cap_percentage(raw_score),
            skill_matches,
            role_matched,
            company_matched,
            explanation,
            match_reasons,
        }
    }

    fn backend(&self) -> &'static str {
        "weighted_overlap"
    }
}

/// `2 * skills + 3 * role + 5 * company`.
pub fn raw_score(skill_match_count: usize, role_matched: bool, company_matched: bool) -> u32 {
    let skills = u32::try_from(skill_match_count).unwrap_or(u32::MAX);
    let role = if role_matched { ROLE_WEIGHT } else { 0 };
    let company = if company_matched { COMPANY_WEIGHT } else { 0 };
    skills
        .saturating_mul(SKILL_WEIGHT)
        .saturating_add(role)
        .saturating_add(company)
}

/// Linear scale against [`FIXED_CAP_MAX_SCORE`], capped at 100.
pub fn fixed_cap_percentage(raw_score: u32) -> u32 {
    let pct = (f64::from(raw_score) / f64::from(FIXED_CAP_MAX_SCORE) * 100.0).round();
    pct.min(100.0) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

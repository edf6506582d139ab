//! Axum route handlers for mentor matching.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::ranker::rank_with;
use crate::matching::scorer::{DisplayPolicy, MatchResult, MentorCandidate, StudentCriteria};
use crate::mentors::store::{fetch_mentor_candidates, fetch_mentor_titles, roles_or_default};
use crate::state::AppState;

/// Inline candidate lists beyond this size are rejected.
pub const MAX_PREVIEW_CANDIDATES: usize = 200;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Raw form values as typed by the student. Lists are comma-separated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub target_role: String,
    #[serde(default)]
    pub target_companies: String,
}

impl MatchRequest {
    pub fn criteria(&self) -> StudentCriteria {
        StudentCriteria::from_raw(&self.skills, &self.target_role, &self.target_companies)
    }
}

#[derive(Debug, Deserialize)]
pub struct PreviewMatchRequest {
    pub criteria: MatchRequest,
    #[serde(default)]
    pub candidates: Vec<MentorCandidate>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub policy: DisplayPolicy,
    pub scorer_backend: String,
    pub results: Vec<MatchResult>,
}

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matches
///
/// Loads all mentor profiles and returns them ranked against the student's filters.
pub async fn handle_find_matches(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let criteria = request.criteria();
    let candidates = fetch_mentor_candidates(&state.db).await?;

    let response = build_response(&state, &criteria, &candidates);
    info!(
        "Ranked {} of {} mentors (policy: {})",
        response.results.len(),
        candidates.len(),
        response.policy
    );
    Ok(Json(response))
}

/// POST /api/v1/matches/preview
///
/// Ranks caller-supplied candidates without touching the database.
pub async fn handle_preview_matches(
    State(state): State<AppState>,
    Json(request): Json<PreviewMatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    if request.candidates.len() > MAX_PREVIEW_CANDIDATES {
        return Err(AppError::Validation(format!(
            "at most {MAX_PREVIEW_CANDIDATES} candidates can be previewed, got {}",
            request.candidates.len()
        )));
    }

    let criteria = request.criteria.criteria();
    Ok(Json(build_response(&state, &criteria, &request.candidates)))
}

/// GET /api/v1/roles
///
/// Role options for the search form: stored mentor titles, or the default list.
pub async fn handle_list_roles(
    State(state): State<AppState>,
) -> Result<Json<RolesResponse>, AppError> {
    let titles = fetch_mentor_titles(&state.db).await?;
    Ok(Json(RolesResponse {
        roles: roles_or_default(titles),
    }))
}

fn build_response(
    state: &AppState,
    criteria: &StudentCriteria,
    candidates: &[MentorCandidate],
) -> MatchResponse {
    let policy = state.config.display_policy;
    let results = rank_with(state.scorer.as_ref(), criteria, candidates, policy);
    MatchResponse {
        policy,
        scorer_backend: state.scorer.backend().to_string(),
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_normalizes_criteria() {
        let request = MatchRequest {
            skills: " Java ,  , React".to_string(),
            target_role: "  Frontend Engineer ".to_string(),
            target_companies: "Google,".to_string(),
        };
        let criteria = request.criteria();
        assert_eq!(criteria.skills, vec!["java", "react"]);
        assert_eq!(criteria.target_role, "frontend engineer");
        assert_eq!(criteria.target_companies, vec!["google"]);
    }

    #[test]
    fn test_request_fields_default_to_empty() {
        let request: MatchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.criteria(), StudentCriteria::default());
    }
}

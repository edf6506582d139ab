use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::matching::scorer::MentorCandidate;
use crate::models::mentor::MentorProfileRow;

/// Offered in the role picker when no mentor has a title yet.
pub const DEFAULT_ROLES: &[&str] = &[
    "Software Engineer",
    "Frontend Engineer",
    "Backend Developer",
    "Full Stack Developer",
    "Data Scientist",
    "Product Manager",
];

/// Loads every mentor profile, ordered by name.
///
/// Unavailable mentors are returned as well; the ranker drops them.
pub async fn fetch_mentor_candidates(pool: &PgPool) -> sqlx::Result<Vec<MentorCandidate>> {
    let rows = sqlx::query_as::<_, MentorProfileRow>(
        r#"
        SELECT id, name, role, title, company, skills, experience_years, availability
        FROM profiles
        WHERE role = 'mentor'
        ORDER BY name ASC NULLS LAST, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    info!("Loaded {} mentor profiles", rows.len());
    Ok(rows.into_iter().map(MentorCandidate::from).collect())
}

/// Returns the mentor's availability flag, or `None` if no such mentor exists.
pub async fn fetch_mentor_availability(
    pool: &PgPool,
    mentor_id: Uuid,
) -> sqlx::Result<Option<Option<bool>>> {
    let availability: Option<Option<bool>> = sqlx::query_scalar(
        "SELECT availability FROM profiles WHERE id = $1 AND role = 'mentor'",
    )
    .bind(mentor_id)
    .fetch_optional(pool)
    .await?;
    Ok(availability)
}

/// Distinct mentor titles currently in the store.
pub async fn fetch_mentor_titles(pool: &PgPool) -> sqlx::Result<Vec<String>> {
    let titles: Vec<Option<String>> = sqlx::query_scalar(
        "SELECT DISTINCT title FROM profiles WHERE role = 'mentor' AND title IS NOT NULL ORDER BY title",
    )
    .fetch_all(pool)
    .await?;
    Ok(titles.into_iter().flatten().collect())
}

/// Trims and deduplicates stored titles, falling back to [`DEFAULT_ROLES`].
pub fn roles_or_default(titles: Vec<String>) -> Vec<String> {
    let mut roles: Vec<String> = Vec::with_capacity(titles.len());
    for title in titles {
        let trimmed = title.trim();
        if !trimmed.is_empty() && !roles.iter().any(|r| r == trimmed) {
            roles.push(trimmed.to_string());
        }
    }

    if roles.is_empty() {
        DEFAULT_ROLES.iter().map(|r| r.to_string()).collect()
    } else {
        roles
    }
}

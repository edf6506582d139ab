use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::conversation::ConversationRow;

/// Returns the conversation for this pair, creating it if needed.
///
/// Upserts on `(student_id, mentor_id)` so repeated requests never duplicate
/// a thread; an existing row only has `updated_at` refreshed.
pub async fn open_or_create_conversation(
    pool: &PgPool,
    student_id: Uuid,
    mentor_id: Uuid,
) -> sqlx::Result<ConversationRow> {
    let row = sqlx::query_as::<_, ConversationRow>(
        r#"
        INSERT INTO conversations (student_id, mentor_id, updated_at)
        VALUES ($1, $2, NOW())
        ON CONFLICT (student_id, mentor_id)
        DO UPDATE SET updated_at = EXCLUDED.updated_at
        RETURNING id, student_id, mentor_id, created_at, updated_at
        "#,
    )
    .bind(student_id)
    .bind(mentor_id)
    .fetch_one(pool)
    .await?;

    info!(
        "Opened conversation {} (student {student_id}, mentor {mentor_id})",
        row.id
    );
    Ok(row)
}

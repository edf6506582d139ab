use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::scorer::MentorCandidate;

/// Row from `profiles` restricted to the columns the matcher reads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MentorProfileRow {
    pub id: Uuid,
    pub name: Option<String>,
    pub role: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience_years: Option<i32>,
    pub availability: Option<bool>,
}

impl From<MentorProfileRow> for MentorCandidate {
    fn from(row: MentorProfileRow) -> Self {
        MentorCandidate {
            id: row.id,
            name: row.name,
            skills: row.skills.unwrap_or_default(),
            role: row.role,
            title: row.title,
            company: row.company,
            // negative values are treated as unknown
            years_of_experience: row.experience_years.and_then(|y| u32::try_from(y).ok()),
            availability: row.availability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> MentorProfileRow {
        MentorProfileRow {
            id: Uuid::new_v4(),
            name: Some("Priya Sharma".to_string()),
            role: Some("mentor".to_string()),
            title: Some("Software Engineer".to_string()),
            company: Some("Google".to_string()),
            skills: Some(vec!["JavaScript".to_string(), "React".to_string()]),
            experience_years: Some(5),
            availability: Some(true),
        }
    }

    #[test]
    fn test_row_converts_to_candidate() {
        let source = row();
        let candidate = MentorCandidate::from(source.clone());
        assert_eq!(candidate.id, source.id);
        assert_eq!(candidate.skills, vec!["JavaScript", "React"]);
        assert_eq!(candidate.position(), Some("Software Engineer"));
        assert_eq!(candidate.years_of_experience, Some(5));
    }

    #[test]
    fn test_null_columns_become_empty() {
        let candidate = MentorCandidate::from(MentorProfileRow {
            skills: None,
            experience_years: Some(-2),
            availability: None,
            ..row()
        });
        assert!(candidate.skills.is_empty());
        assert_eq!(candidate.years_of_experience, None);
        assert!(candidate.is_available());
    }
}

//! Skill overlap between a student's declared skills and a mentor's skill list.

use crate::matching::normalize::contains_either_way;

/// Returns the mentor skills (original casing) that match any student skill.
///
/// Each student skill is matched at most once: the scan stops at the first
/// mentor skill where either lowercase string contains the other. The result
/// is deduplicated by string equality, keeping first-insertion order.
///
/// `student_skills` must already be normalized. Blank mentor skills never match.
pub fn skill_overlap(student_skills: &[String], mentor_skills: &[String]) -> Vec<String> {
    let lowered: Vec<String> = mentor_skills.iter().map(|s| s.trim().to_lowercase()).collect();
    let mut matches: Vec<String> = Vec::new();

    for student_skill in student_skills {
        let hit = lowered
            .iter()
            .zip(mentor_skills)
            .find(|(lower, _)| !lower.is_empty() && contains_either_way(lower, student_skill));

        if let Some((_, original)) = hit {
            if !matches.contains(original) {
                matches.push(original.clone());
            }
        }
    }

    matches
}

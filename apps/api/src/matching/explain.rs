//! Human-readable match explanations.

/// Years of experience at which the explanation mentions seniority.
pub const EXPERIENCE_HIGHLIGHT_YEARS: u32 = 5;

const COMPANY_FACTOR: &str = "target company";
const ROLE_FACTOR: &str = "role alignment";
const SKILL_FACTOR: &str = "skill overlap";

/// Builds the one-sentence summary shown on a match card.
///
/// Factors are listed in priority order company, role, skill.
pub fn build_explanation(
    skill_match_count: usize,
    role_matched: bool,
    company_matched: bool,
    years_of_experience: Option<u32>,
) -> String {
    let mut factors: Vec<&str> = Vec::with_capacity(3);
    if company_matched {
        factors.push(COMPANY_FACTOR);
    }
    if role_matched {
        factors.push(ROLE_FACTOR);
    }
    if skill_match_count > 0 {
        factors.push(SKILL_FACTOR);
    }

    let base = match factors.as_slice() {
        [] => "Matched based on general profile relevance".to_string(),
        [only] => format!("Matched due to {only}"),
        [first, second] => format!("Matched based on {first} and {second}"),
        _ => "Strong match across skills, role, and company".to_string(),
    };

    match years_of_experience {
        Some(years) if years >= EXPERIENCE_HIGHLIGHT_YEARS => {
            format!("{base} ({years}+ years of experience)")
        }
        _ => base,
    }
}

/// Itemised reasons behind a match, in scoring order: skills, role, company, experience.
pub fn build_match_reasons(
    skill_matches: &[String],
    role_matched: bool,
    mentor_role: Option<&str>,
    company_matched: bool,
    mentor_company: Option<&str>,
    years_of_experience: Option<u32>,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if !skill_matches.is_empty() {
        let count = skill_matches.len();
        let plural = if count > 1 { "s" } else { "" };
        reasons.push(format!(
            "{count} common skill{plural}: {}",
            skill_matches.join(", ")
        ));
    }

    if role_matched {
        reasons.push(format!("Same target role: {}", mentor_role.unwrap_or_default()));
    }

    if company_matched {
        reasons.push(format!(
            "Works at target company: {}",
            mentor_company.unwrap_or_default()
        ));
    }

    if let Some(years) = years_of_experience.filter(|y| *y >= EXPERIENCE_HIGHLIGHT_YEARS) {
        reasons.push(format!("{years}+ years of experience"));
    }

    reasons
}

use crate::matching::normalize::{contains_either_way, normalize_phrase};

/// True when any target company and the mentor's company contain one another.
///
/// There is no alias table: "meta" does not match "Facebook".
pub fn company_matches(target_companies: &[String], mentor_company: Option<&str>) -> bool {
    let company = match mentor_company.map(normalize_phrase) {
        Some(c) if !c.is_empty() => c,
        _ => return false,
    };

    target_companies
        .iter()
        .filter(|target| !target.is_empty())
        .any(|target| contains_either_way(&company, target))
}

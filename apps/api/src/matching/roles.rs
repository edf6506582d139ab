//! Role alignment: direct substring containment, then semantic role groups.

use crate::matching::normalize::{contains_either_way, normalize_phrase};

const DEFAULT_ROLE_GROUPS: &[&[&str]] = &[
    &["software engineer", "sde", "developer", "full stack"],
    &["frontend", "ui", "react", "web developer"],
    &["backend", "server", "api"],
    &["data scientist", "machine learning", "ml engineer", "ai"],
    &["data analyst", "business analyst", "analytics"],
    &["product manager", "pm", "product owner"],
];

/// Lookup table of related role terms.
///
/// Two roles align when each contains at least one term from the same group.
/// Terms are matched as plain substrings, so short terms like `"ai"` also hit
/// inside longer words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGroups {
    groups: Vec<Vec<String>>,
}

impl RoleGroups {
    pub fn new(groups: Vec<Vec<String>>) -> Self {
        let groups = groups
            .into_iter()
            .map(|group| {
                group
                    .iter()
                    .map(|term| normalize_phrase(term))
                    .filter(|term| !term.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|group| !group.is_empty())
            .collect();
        Self { groups }
    }

    /// Adds a group of related terms, returning `self` for chaining.
    pub fn with_group<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let group: Vec<String> = terms
            .into_iter()
            .map(|term| normalize_phrase(term.as_ref()))
            .filter(|term| !term.is_empty())
            .collect();
        if !group.is_empty() {
            self.groups.push(group);
        }
        self
    }

    /// True when both lowercase roles contain a term from one shared group.
    fn share_group(&self, target: &str, mentor: &str) -> bool {
        self.groups.iter().any(|group| {
            group.iter().any(|term| target.contains(term.as_str()))
                && group.iter().any(|term| mentor.contains(term.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for RoleGroups {
    fn default() -> Self {
        DEFAULT_ROLE_GROUPS
            .iter()
            .fold(Self { groups: Vec::new() }, |groups, terms| {
                groups.with_group(terms.iter())
            })
    }
}

/// Checks whether a mentor's role aligns with the student's target role.
///
/// Blank roles on either side never match.
pub fn role_matches(groups: &RoleGroups, target_role: &str, mentor_role: Option<&str>) -> bool {
    let target = normalize_phrase(target_role);
    let mentor = mentor_role.map(normalize_phrase).unwrap_or_default();
    if target.is_empty() || mentor.is_empty() {
        return false;
    }

    contains_either_way(&target, &mentor) || groups.share_group(&target, &mentor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(target: &str, mentor: &str) -> bool {
        role_matches(&RoleGroups::default(), target, Some(mentor))
    }

    #[test]
    fn test_direct_substring_match() {
        assert!(check("Software Engineer", "Senior Software Engineer"));
        assert!(check("Senior Data Scientist", "data scientist"));
    }

    #[test]
    fn test_group_match_without_substring() {
        assert!(check("Frontend Engineer", "React Developer"));
        assert!(check("Software Engineer", "SDE II"));
        assert!(check("Data Scientist", "ML Engineer"));
        assert!(check("Product Manager", "Product Owner"));
    }

    #[test]
    fn test_unrelated_roles() {
        assert!(!check("Product Manager", "Data Analyst"));
        assert!(!check("Backend Developer", "Business Analyst"));
    }

    #[test]
    fn test_blank_roles_never_match() {
        let groups = RoleGroups::default();
        assert!(!role_matches(&groups, "", Some("Software Engineer")));
        assert!(!role_matches(&groups, "   ", Some("Software Engineer")));
        assert!(!role_matches(&groups, "Software Engineer", None));
        assert!(!role_matches(&groups, "Software Engineer", Some("")));
    }

    #[test]
    fn test_default_has_six_groups() {
        assert_eq!(RoleGroups::default().len(), 6);
    }

    #[test]
    fn test_custom_group_extends_lookup() {
        assert!(!check("DevOps Engineer", "Site Reliability Lead"));

        let groups = RoleGroups::default().with_group(["devops", "site reliability", "sre"]);
        assert!(role_matches(
            &groups,
            "DevOps Engineer",
            Some("Site Reliability Lead")
        ));
    }

    #[test]
    fn test_new_drops_blank_terms_and_groups() {
        let groups = RoleGroups::new(vec![
            vec!["  QA ".to_string(), "".to_string()],
            vec![" ".to_string()],
        ]);
        assert_eq!(groups.len(), 1);
        assert!(role_matches(&groups, "qa engineer", Some("QA Lead")));
    }
}

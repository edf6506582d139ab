use anyhow::{Context, Result};

use crate::matching::scorer::DisplayPolicy;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    pub display_policy: DisplayPolicy,
    /// Replacement role groups as a JSON array of arrays; `None` keeps the built-in table.
    pub role_groups: Option<Vec<Vec<String>>>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            database_max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            display_policy: parse_display_policy(std::env::var("DISPLAY_POLICY").ok().as_deref())?,
            role_groups: parse_role_groups(std::env::var("ROLE_GROUPS").ok().as_deref())?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_display_policy(raw: Option<&str>) -> Result<DisplayPolicy> {
    match raw {
        None => Ok(DisplayPolicy::default()),
        Some(value) if value.trim().is_empty() => Ok(DisplayPolicy::default()),
        Some(value) => value
            .parse::<DisplayPolicy>()
            .map_err(anyhow::Error::msg)
            .context("DISPLAY_POLICY is invalid"),
    }
}

fn parse_role_groups(raw: Option<&str>) -> Result<Option<Vec<Vec<String>>>> {
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => serde_json::from_str(value)
            .map(Some)
            .context("ROLE_GROUPS must be a JSON array of string arrays"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_policy_defaults_to_fixed_cap() {
        assert_eq!(parse_display_policy(None).unwrap(), DisplayPolicy::FixedCap);
        assert_eq!(parse_display_policy(Some("  ")).unwrap(), DisplayPolicy::FixedCap);
    }

    #[test]
    fn test_display_policy_rank_relative() {
        assert_eq!(
            parse_display_policy(Some("rank_relative")).unwrap(),
            DisplayPolicy::RankRelative
        );
    }

    #[test]
    fn test_unknown_display_policy_is_error() {
        let err = parse_display_policy(Some("cosmetic")).unwrap_err();
        assert!(format!("{err:#}").contains("cosmetic"));
    }

    #[test]
    fn test_role_groups_json() {
        let groups = parse_role_groups(Some(r#"[["devops", "sre"], ["qa"]]"#))
            .unwrap()
            .unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], vec!["devops", "sre"]);
        assert!(parse_role_groups(None).unwrap().is_none());
    }

    #[test]
    fn test_role_groups_malformed() {
        assert!(parse_role_groups(Some("devops,sre")).is_err());
    }
}

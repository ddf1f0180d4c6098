//! Gatekeeper configuration

use crate::GatekeeperError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tenderguard_interception::RouteScope;

/// Configuration for bid screening rules
///
/// Every field may be omitted from a TOML file; missing fields take their
/// default value.
///
/// ```toml
/// check_same_address = true
/// check_same_creator = true
/// check_interception = true
/// reject_unknown_persons = true
/// max_route_len = 1
/// route_scope = "descendants"
/// check_duplicate_address = true
/// check_cea = true
/// min_organization_age_days = 30
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Reject when the bidder shares the tender consumer's address
    #[serde(default = "default_true")]
    pub check_same_address: bool,

    /// Reject when the same person created both organizations
    #[serde(default = "default_true")]
    pub check_same_creator: bool,

    /// Enable conflict-of-interest route search
    #[serde(default = "default_true")]
    pub check_interception: bool,

    /// Reject when either creator is missing from the relationship graph
    #[serde(default = "default_true")]
    pub reject_unknown_persons: bool,

    /// Longest admissible route, in persons (1 = only the same person)
    #[serde(default = "default_max_route_len")]
    pub max_route_len: usize,

    /// Edges followed by the route search
    #[serde(default)]
    pub route_scope: RouteScope,

    /// Reject when another bidder on the tender has the same address
    #[serde(default = "default_true")]
    pub check_duplicate_address: bool,

    /// Reject when the bidder's CEA differs from the tender's
    #[serde(default = "default_true")]
    pub check_cea: bool,

    /// Minimum organization age in days (0 disables the check)
    #[serde(default = "default_min_organization_age_days")]
    pub min_organization_age_days: u64,
}

fn default_true() -> bool {
    true
}

fn default_max_route_len() -> usize {
    1
}

fn default_min_organization_age_days() -> u64 {
    30
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            check_same_address: true,
            check_same_creator: true,
            check_interception: true,
            reject_unknown_persons: true,
            max_route_len: 1,
            route_scope: RouteScope::Descendants,
            check_duplicate_address: true,
            check_cea: true,
            min_organization_age_days: 30,
        }
    }
}

impl ScreeningConfig {
    /// Create a permissive configuration (conflict of interest only)
    pub fn permissive() -> Self {
        Self {
            check_same_address: false,
            check_same_creator: true,
            check_interception: true,
            reject_unknown_persons: false,
            max_route_len: 1,
            route_scope: RouteScope::Descendants,
            check_duplicate_address: false,
            check_cea: false,
            min_organization_age_days: 0,
        }
    }

    /// Create a strict configuration (all rules, kinship routes)
    pub fn strict() -> Self {
        Self {
            check_same_address: true,
            check_same_creator: true,
            check_interception: true,
            reject_unknown_persons: true,
            max_route_len: 1,
            route_scope: RouteScope::Kinship,
            check_duplicate_address: true,
            check_cea: true,
            min_organization_age_days: 90,
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GatekeeperError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, GatekeeperError> {
        let config: ScreeningConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the rule values are usable
    pub fn validate(&self) -> Result<(), GatekeeperError> {
        if self.max_route_len == 0 {
            return Err(GatekeeperError::Config(
                "max_route_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ScreeningConfig::default();
        assert!(config.check_interception);
        assert!(config.reject_unknown_persons);
        assert_eq!(config.max_route_len, 1);
        assert_eq!(config.route_scope, RouteScope::Descendants);
        assert_eq!(config.min_organization_age_days, 30);
    }

    #[test]
    fn test_permissive_config() {
        let config = ScreeningConfig::permissive();
        assert!(!config.check_cea);
        assert!(!config.reject_unknown_persons);
        assert_eq!(config.min_organization_age_days, 0);
    }

    #[test]
    fn test_strict_config() {
        let config = ScreeningConfig::strict();
        assert_eq!(config.route_scope, RouteScope::Kinship);
        assert_eq!(config.min_organization_age_days, 90);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ScreeningConfig::from_toml(
            r#"
            route_scope = "kinship"
            check_cea = false
            "#,
        )
        .unwrap();

        assert_eq!(config.route_scope, RouteScope::Kinship);
        assert!(!config.check_cea);
        assert!(config.check_same_address);
        assert_eq!(config.max_route_len, 1);
        assert_eq!(config.min_organization_age_days, 30);
    }

    #[test]
    fn test_zero_route_len_rejected() {
        let result = ScreeningConfig::from_toml("max_route_len = 0");
        assert!(matches!(result, Err(GatekeeperError::Config(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let result = ScreeningConfig::from_toml(r#"route_scope = "cousins""#);
        assert!(matches!(result, Err(GatekeeperError::TomlParse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "min_organization_age_days = 7").unwrap();

        let config = ScreeningConfig::from_file(file.path()).unwrap();
        assert_eq!(config.min_organization_age_days, 7);

        let missing = ScreeningConfig::from_file("/nonexistent/screening.toml");
        assert!(matches!(missing, Err(GatekeeperError::FileRead(_))));
    }
}

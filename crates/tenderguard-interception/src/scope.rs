//! Which edges the route search may follow

use serde::{Deserialize, Serialize};

/// Edge set followed by the route search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteScope {
    /// Descendant edges only: authority passed down a family line
    #[default]
    Descendants,

    /// Descendant and ancestor edges: also catches siblings and in-laws
    /// connected through a shared parent
    Kinship,
}

impl RouteScope {
    /// Get the scope name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteScope::Descendants => "descendants",
            RouteScope::Kinship => "kinship",
        }
    }

    /// Parse a scope from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "descendants" => Some(RouteScope::Descendants),
            "kinship" => Some(RouteScope::Kinship),
            _ => None,
        }
    }

    /// Whether ancestor edges are followed
    pub fn follows_ancestors(&self) -> bool {
        matches!(self, RouteScope::Kinship)
    }
}

impl std::str::FromStr for RouteScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid route scope: {}", s))
    }
}

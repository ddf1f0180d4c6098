//! Relation module - descriptive labels carried by each person
//!
//! None of these values are consulted by traversal; they exist for reports.

use serde::{Deserialize, Serialize};

/// Role a person plays relative to whichever person lists them as a child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationLabel {
    /// Spouse (male)
    Husband,

    /// Spouse (female)
    Wife,

    /// Brother or sister
    Sibling,

    /// Son or daughter
    Children,

    /// No recorded role (root persons)
    #[default]
    #[serde(alias = "none")]
    Unspecified,
}

impl RelationLabel {
    /// Get the label name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationLabel::Husband => "husband",
            RelationLabel::Wife => "wife",
            RelationLabel::Sibling => "sibling",
            RelationLabel::Children => "children",
            RelationLabel::Unspecified => "none",
        }
    }

    /// Parse a label from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "husband" => Some(RelationLabel::Husband),
            "wife" => Some(RelationLabel::Wife),
            "sibling" => Some(RelationLabel::Sibling),
            "children" | "child" => Some(RelationLabel::Children),
            "none" | "unspecified" | "" => Some(RelationLabel::Unspecified),
            _ => None,
        }
    }
}

impl std::str::FromStr for RelationLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid relation label: {}", s))
    }
}

/// Gender of a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,

    /// Female
    Female,
}

impl Gender {
    /// Get the gender name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(format!("Invalid gender: {}", s)),
        }
    }
}

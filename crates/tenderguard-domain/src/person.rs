//! Person module - the vertices of the relationship graph

use crate::relation::{Gender, RelationLabel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest 14-digit identifier
const PINFL_MIN: u64 = 10_000_000_000_000;

/// Largest 14-digit identifier
const PINFL_MAX: u64 = 99_999_999_999_999;

/// National personal identifier (PINFL)
///
/// The sole key of a person: equality, deduplication and visited-set
/// membership all go through this value, never through record identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(u64);

impl PersonId {
    /// Create a PersonId, checking that it has exactly 14 digits
    ///
    /// # Examples
    ///
    /// ```
    /// use tenderguard_domain::PersonId;
    ///
    /// assert!(PersonId::new(12345678901234).is_ok());
    /// assert!(PersonId::new(42).is_err());
    /// ```
    pub fn new(value: u64) -> Result<Self, String> {
        if (PINFL_MIN..=PINFL_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!("PINFL must have exactly 14 digits, got {}", value))
        }
    }

    /// Create a PersonId from a raw value without validation
    ///
    /// This is primarily for fixtures and already-validated sources.
    pub fn from_value(value: u64) -> Self {
        Self(value)
    }

    /// Parse a PersonId from its decimal string form
    ///
    /// # Examples
    ///
    /// ```
    /// use tenderguard_domain::PersonId;
    ///
    /// let id = PersonId::parse("77665544332211").unwrap();
    /// assert_eq!(id.value(), 77665544332211);
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("Invalid PINFL '{}': {}", s, e))?;
        Self::new(value)
    }

    /// Get the raw value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PersonId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A person in the relationship graph
///
/// Edges are stored as identifier lists, not references. `descendants` and
/// `ancestors` are populated independently, so a descendant edge does not
/// imply a matching ancestor edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// National identifier
    pub id: PersonId,

    /// Role this person plays relative to whoever lists them as a child
    pub relation: RelationLabel,

    /// Gender
    pub gender: Gender,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Outgoing edges toward children, in recorded order
    pub descendants: Vec<PersonId>,

    /// Outgoing edges toward parents, in recorded order
    pub ancestors: Vec<PersonId>,
}

impl Person {
    /// Create a person with no edges
    pub fn new(
        id: PersonId,
        relation: RelationLabel,
        gender: Gender,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            relation,
            gender,
            first_name: first_name.into(),
            last_name: last_name.into(),
            descendants: Vec::new(),
            ancestors: Vec::new(),
        }
    }

    /// "First Last", as shown in reports
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }

    /// Whether two records describe the same person in the same way
    ///
    /// Edges are ignored; they are merged, not compared.
    pub fn same_description(&self, other: &Person) -> bool {
        self.id == other.id
            && self.gender == other.gender
            && self.first_name == other.first_name
            && self.last_name == other.last_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_id_bounds() {
        assert!(PersonId::new(10_000_000_000_000).is_ok());
        assert!(PersonId::new(99_999_999_999_999).is_ok());
        assert!(PersonId::new(9_999_999_999_999).is_err());
        assert!(PersonId::new(100_000_000_000_000).is_err());
        assert!(PersonId::new(0).is_err());
    }

    #[test]
    fn test_person_id_parse() {
        let id: PersonId = "12345678901234".parse().unwrap();
        assert_eq!(id, PersonId::from_value(12345678901234));
        assert_eq!(id.to_string(), "12345678901234");

        assert!(PersonId::parse("not-a-number").is_err());
        assert!(PersonId::parse("").is_err());
        assert!(PersonId::parse("123").is_err());
    }

    #[test]
    fn test_person_id_serde_is_transparent() {
        let id = PersonId::from_value(77665544332211);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "77665544332211");
    }

    #[test]
    fn test_full_name() {
        let person = Person::new(
            PersonId::from_value(12345678901234),
            RelationLabel::Unspecified,
            Gender::Male,
            "Aziz",
            "Nurmuhammedov",
        );
        assert_eq!(person.full_name(), "Aziz Nurmuhammedov");

        let nameless = Person::new(PersonId::from_value(1), RelationLabel::Unspecified, Gender::Female, "", "");
        assert_eq!(nameless.full_name(), "");
    }

    #[test]
    fn test_same_description_ignores_edges_and_relation() {
        let id = PersonId::from_value(77665544332211);
        let a = Person::new(id, RelationLabel::Sibling, Gender::Male, "Jasur", "Hasanov");
        let mut b = Person::new(id, RelationLabel::Children, Gender::Male, "Jasur", "Hasanov");
        b.descendants.push(PersonId::from_value(34567890123456));

        assert!(a.same_description(&b));

        b.last_name = "Hasanova".to_string();
        assert!(!a.same_description(&b));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every 14-digit value is accepted and survives Display/parse
        #[test]
        fn test_pinfl_string_roundtrip(value in PINFL_MIN..=PINFL_MAX) {
            let id = PersonId::new(value).unwrap();
            prop_assert_eq!(PersonId::parse(&id.to_string()), Ok(id));
        }

        /// Property: PersonId ordering matches u64 ordering
        #[test]
        fn test_pinfl_ordering_property(a: u64, b: u64) {
            let id_a = PersonId::from_value(a);
            let id_b = PersonId::from_value(b);

            prop_assert_eq!(id_a < id_b, a < b);
            prop_assert_eq!(id_a == id_b, a == b);
        }
    }
}

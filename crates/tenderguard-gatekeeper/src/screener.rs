//! Bid screening logic

use crate::{GatekeeperError, ScreeningConfig};
use std::fmt;
use tenderguard_domain::{Organization, PersonDirectory, PersonId, Tender, TenderPosition};
use tenderguard_interception::{InterceptionError, InterceptionRouter};
use tracing::{info, warn};

/// Result of screening a bid
#[derive(Debug, Clone)]
pub struct ScreeningResult {
    /// Whether the bid may be recorded
    pub status: ScreeningStatus,

    /// Rejection reasons (if any)
    pub reasons: Vec<RejectionReason>,

    /// Route between the two creators, empty when none was found or the
    /// check did not run
    pub route: Vec<PersonId>,
}

impl ScreeningResult {
    /// Whether the bid was accepted
    pub fn is_accepted(&self) -> bool {
        self.status == ScreeningStatus::Accepted
    }
}

/// Screening status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreeningStatus {
    /// Bid accepted
    Accepted,

    /// Bid rejected
    Rejected,
}

impl ScreeningStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreeningStatus::Accepted => "accepted",
            ScreeningStatus::Rejected => "rejected",
        }
    }
}

/// Which side of a bid an organization creator belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatorSide {
    /// Creator of the tender consumer organization
    Tender,
    /// Creator of the bidding organization
    Organization,
}

impl CreatorSide {
    /// Human-readable label used in rejection messages
    pub fn as_str(&self) -> &'static str {
        match self {
            CreatorSide::Tender => "Tender organization creator",
            CreatorSide::Organization => "Participating organization creator",
        }
    }
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Bidder registered at the tender consumer's address
    SameAddress {
        /// Shared address
        address: String,
    },

    /// The same person created both organizations
    SameCreator {
        /// Creator identifier
        pinfl: PersonId,
    },

    /// The creators are related
    Interception {
        /// Persons linking tender creator to bidder creator
        route: Vec<PersonId>,
    },

    /// A creator is missing from the relationship graph
    UnknownPerson {
        /// Which organization's creator is missing
        side: CreatorSide,
        /// The unresolved identifier
        pinfl: PersonId,
    },

    /// Another bidder on this tender has the same address
    DuplicateAddress {
        /// Shared address
        address: String,
    },

    /// Economic activity codes differ
    CeaMismatch {
        /// Tender CEA
        tender: u32,
        /// Organization CEA
        organization: u32,
    },

    /// Organization registered too recently
    OrganizationTooYoung {
        /// Age at screening time
        age_days: u64,
        /// Minimum age required
        required_days: u64,
    },
}

impl RejectionReason {
    /// Short machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::SameAddress { .. } => "same_address",
            RejectionReason::SameCreator { .. } => "same_creator",
            RejectionReason::Interception { .. } => "interception",
            RejectionReason::UnknownPerson { .. } => "unknown_person",
            RejectionReason::DuplicateAddress { .. } => "duplicate_address",
            RejectionReason::CeaMismatch { .. } => "cea_mismatch",
            RejectionReason::OrganizationTooYoung { .. } => "organization_too_young",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::SameAddress { address } => write!(
                f,
                "Tender organization address cannot be equal to participating organization address ({})",
                address
            ),
            RejectionReason::SameCreator { pinfl } => {
                write!(f, "Tender and participating organization were created by the same person ({})", pinfl)
            }
            RejectionReason::Interception { route } => {
                let chain: Vec<String> = route.iter().map(|id| id.to_string()).collect();
                write!(
                    f,
                    "Tender organization intercepts with participating organization via {}",
                    chain.join(" -> ")
                )
            }
            RejectionReason::UnknownPerson { side, pinfl } => {
                write!(f, "{} {} is not in the relationship graph", side.as_str(), pinfl)
            }
            RejectionReason::DuplicateAddress { address } => {
                write!(f, "Organization with the same address cannot participate ({})", address)
            }
            RejectionReason::CeaMismatch { tender, organization } => write!(
                f,
                "Tender CEA {} does not match organization CEA {}",
                tender, organization
            ),
            RejectionReason::OrganizationTooYoung { age_days, required_days } => write!(
                f,
                "Tender participant organization is {} days old, at least {} required",
                age_days, required_days
            ),
        }
    }
}

/// The Gatekeeper screens bids before they are recorded
pub struct Gatekeeper {
    config: ScreeningConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ScreeningConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ScreeningConfig::default())
    }

    /// Screen a bid against the configured rules
    ///
    /// # Arguments
    ///
    /// * `tender` - The tender being bid on
    /// * `organization` - The bidding organization
    /// * `positions` - Bids already recorded for this tender
    /// * `directory` - The relationship graph
    /// * `now` - Screening time, milliseconds since Unix epoch
    ///
    /// # Returns
    ///
    /// Every failed rule, not just the first
    pub fn screen<D: PersonDirectory>(
        &self,
        tender: &Tender,
        organization: &Organization,
        positions: &[TenderPosition],
        directory: &D,
        now: u64,
    ) -> Result<ScreeningResult, GatekeeperError> {
        self.config.validate()?;

        let mut reasons = Vec::new();
        let mut route = Vec::new();

        // 1. Shared address with the consumer
        if self.config.check_same_address && tender.consumer.address == organization.address {
            reasons.push(RejectionReason::SameAddress {
                address: organization.address.clone(),
            });
        }

        // 2. Same creator on both sides
        let source = tender.creator();
        let target = organization.creator.pinfl;
        if self.config.check_same_creator && source == target {
            reasons.push(RejectionReason::SameCreator { pinfl: source });
        }

        // 3. Conflict of interest
        if self.config.check_interception {
            if let Some(reason) = self.check_interception(source, target, directory, &mut route) {
                reasons.push(reason);
            }
        }

        // 4. Another bidder at the same address
        if self.config.check_duplicate_address
            && positions
                .iter()
                .any(|position| position.organization.address == organization.address)
        {
            reasons.push(RejectionReason::DuplicateAddress {
                address: organization.address.clone(),
            });
        }

        // 5. Classifier match
        if self.config.check_cea && tender.cea != organization.cea {
            reasons.push(RejectionReason::CeaMismatch {
                tender: tender.cea,
                organization: organization.cea,
            });
        }

        // 6. Organization age
        if self.config.min_organization_age_days > 0 {
            let age_days = organization.age_days(now);
            if age_days < self.config.min_organization_age_days {
                reasons.push(RejectionReason::OrganizationTooYoung {
                    age_days,
                    required_days: self.config.min_organization_age_days,
                });
            }
        }

        let status = if reasons.is_empty() {
            ScreeningStatus::Accepted
        } else {
            ScreeningStatus::Rejected
        };

        for reason in &reasons {
            warn!(lot = tender.lot_number, tin = organization.tin, code = reason.code(), "{}", reason);
        }
        info!(
            lot = tender.lot_number,
            tin = organization.tin,
            status = status.as_str(),
            reasons = reasons.len(),
            "Bid screened"
        );

        Ok(ScreeningResult {
            status,
            reasons,
            route,
        })
    }

    /// Run the route search between the two creators
    fn check_interception<D: PersonDirectory>(
        &self,
        source: PersonId,
        target: PersonId,
        directory: &D,
        found: &mut Vec<PersonId>,
    ) -> Option<RejectionReason> {
        let router = InterceptionRouter::new(directory).with_scope(self.config.route_scope);

        match router.find_interception_route(source, target) {
            Ok(route) => {
                *found = route.ids();
                if route.exceeds(self.config.max_route_len) {
                    Some(RejectionReason::Interception { route: route.ids() })
                } else {
                    None
                }
            }
            Err(InterceptionError::PersonNotFound(missing)) => {
                if self.config.reject_unknown_persons {
                    // The source is resolved first, so it is reported when both are missing
                    let side = if missing == source {
                        CreatorSide::Tender
                    } else {
                        CreatorSide::Organization
                    };
                    Some(RejectionReason::UnknownPerson { side, pinfl: missing })
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenderguard_domain::tender::MILLIS_PER_DAY;
    use tenderguard_domain::{Creator, Gender, Person, RelationLabel};
    use tenderguard_graph::RelationshipGraph;

    const NOW: u64 = 1_000 * MILLIS_PER_DAY;

    fn id(value: u64) -> PersonId {
        PersonId::from_value(value)
    }

    /// Aziz(1) -> Jasur(2); Barno(3) unrelated
    fn graph() -> RelationshipGraph {
        let mut builder = RelationshipGraph::builder();
        builder
            .add_root(Person::new(id(1), RelationLabel::Unspecified, Gender::Male, "Aziz", "N"))
            .unwrap();
        builder
            .add_descendant(id(1), Person::new(id(2), RelationLabel::Children, Gender::Male, "Jasur", "H"))
            .unwrap();
        builder
            .add_root(Person::new(id(3), RelationLabel::Unspecified, Gender::Female, "Barno", "T"))
            .unwrap();
        builder.build().unwrap()
    }

    fn organization(creator: u64, address: &str, cea: u32, registered_at: u64) -> Organization {
        Organization {
            tin: 100 + creator,
            name: format!("Org {}", creator),
            creator: Creator {
                name: format!("Creator {}", creator),
                pinfl: id(creator),
            },
            address: address.to_string(),
            cea,
            registered_at,
        }
    }

    fn tender() -> Tender {
        Tender {
            lot_number: 59382741,
            consumer: organization(1, "Muminov Street 4A", 10320, 0),
            start_date: NOW,
            end_date: NOW + 7 * MILLIS_PER_DAY,
            start_price: 100_000_000,
            cea: 10320,
            items: Vec::new(),
        }
    }

    fn unrelated_bidder() -> Organization {
        organization(3, "Navoi Street 12", 10320, NOW - 365 * MILLIS_PER_DAY)
    }

    #[test]
    fn test_valid_bid() {
        let gatekeeper = Gatekeeper::default_config();
        let result = gatekeeper
            .screen(&tender(), &unrelated_bidder(), &[], &graph(), NOW)
            .unwrap();

        assert_eq!(result.status, ScreeningStatus::Accepted);
        assert!(result.is_accepted());
        assert!(result.reasons.is_empty());
        assert!(result.route.is_empty());
    }

    #[test]
    fn test_related_creator_rejected() {
        let gatekeeper = Gatekeeper::default_config();
        let mut bidder = unrelated_bidder();
        bidder.creator.pinfl = id(2);

        let result = gatekeeper.screen(&tender(), &bidder, &[], &graph(), NOW).unwrap();

        assert_eq!(result.status, ScreeningStatus::Rejected);
        assert_eq!(result.reasons.len(), 1);
        assert_eq!(result.route, vec![id(1), id(2)]);
        match &result.reasons[0] {
            RejectionReason::Interception { route } => assert_eq!(route, &vec![id(1), id(2)]),
            other => panic!("Expected Interception, got {:?}", other),
        }
    }

    #[test]
    fn test_same_creator_rejected_once() {
        let gatekeeper = Gatekeeper::default_config();
        let mut bidder = unrelated_bidder();
        bidder.creator.pinfl = id(1);

        let result = gatekeeper.screen(&tender(), &bidder, &[], &graph(), NOW).unwrap();

        // The self route has length 1, which is within the threshold.
        assert_eq!(result.reasons, vec![RejectionReason::SameCreator { pinfl: id(1) }]);
        assert_eq!(result.route, vec![id(1)]);
    }

    #[test]
    fn test_unknown_creator() {
        let mut bidder = unrelated_bidder();
        bidder.creator.pinfl = id(77);

        let strict = Gatekeeper::default_config()
            .screen(&tender(), &bidder, &[], &graph(), NOW)
            .unwrap();
        assert_eq!(
            strict.reasons,
            vec![RejectionReason::UnknownPerson {
                side: CreatorSide::Organization,
                pinfl: id(77)
            }]
        );

        let mut config = ScreeningConfig::default();
        config.reject_unknown_persons = false;
        let lenient = Gatekeeper::new(config)
            .screen(&tender(), &bidder, &[], &graph(), NOW)
            .unwrap();
        assert!(lenient.is_accepted());
    }

    #[test]
    fn test_unknown_tender_creator_is_blamed_on_tender() {
        let mut tender = tender();
        tender.consumer.creator.pinfl = id(66);

        let result = Gatekeeper::default_config()
            .screen(&tender, &unrelated_bidder(), &[], &graph(), NOW)
            .unwrap();
        assert_eq!(
            result.reasons,
            vec![RejectionReason::UnknownPerson {
                side: CreatorSide::Tender,
                pinfl: id(66)
            }]
        );
        assert_eq!(
            result.reasons[0].to_string(),
            "Tender organization creator 66 is not in the relationship graph"
        );
    }

    #[test]
    fn test_same_address_rejected() {
        let gatekeeper = Gatekeeper::default_config();
        let mut bidder = unrelated_bidder();
        bidder.address = "Muminov Street 4A".to_string();

        let result = gatekeeper.screen(&tender(), &bidder, &[], &graph(), NOW).unwrap();
        assert_eq!(result.reasons.len(), 1);
        assert_eq!(result.reasons[0].code(), "same_address");
    }

    #[test]
    fn test_duplicate_address_among_positions() {
        let gatekeeper = Gatekeeper::default_config();
        let positions = vec![TenderPosition {
            organization: organization(9, "Navoi Street 12", 10320, 0),
            price: 90_000_000,
        }];

        let result = gatekeeper
            .screen(&tender(), &unrelated_bidder(), &positions, &graph(), NOW)
            .unwrap();
        assert_eq!(
            result.reasons,
            vec![RejectionReason::DuplicateAddress {
                address: "Navoi Street 12".to_string()
            }]
        );
    }

    #[test]
    fn test_cea_mismatch() {
        let gatekeeper = Gatekeeper::default_config();
        let mut bidder = unrelated_bidder();
        bidder.cea = 12345;

        let result = gatekeeper.screen(&tender(), &bidder, &[], &graph(), NOW).unwrap();
        assert_eq!(
            result.reasons,
            vec![RejectionReason::CeaMismatch {
                tender: 10320,
                organization: 12345
            }]
        );
    }

    #[test]
    fn test_young_organization() {
        let gatekeeper = Gatekeeper::default_config();
        let mut bidder = unrelated_bidder();
        bidder.registered_at = NOW - 29 * MILLIS_PER_DAY;

        let result = gatekeeper.screen(&tender(), &bidder, &[], &graph(), NOW).unwrap();
        assert_eq!(
            result.reasons,
            vec![RejectionReason::OrganizationTooYoung {
                age_days: 29,
                required_days: 30
            }]
        );

        bidder.registered_at = NOW - 30 * MILLIS_PER_DAY;
        let result = gatekeeper.screen(&tender(), &bidder, &[], &graph(), NOW).unwrap();
        assert!(result.is_accepted());
    }

    #[test]
    fn test_multiple_reasons() {
        let gatekeeper = Gatekeeper::default_config();
        let mut bidder = unrelated_bidder();
        bidder.creator.pinfl = id(2);
        bidder.cea = 1;
        bidder.registered_at = NOW;

        let result = gatekeeper.screen(&tender(), &bidder, &[], &graph(), NOW).unwrap();
        let codes: Vec<&str> = result.reasons.iter().map(|r| r.code()).collect();
        assert_eq!(codes, vec!["interception", "cea_mismatch", "organization_too_young"]);
    }

    #[test]
    fn test_permissive_config() {
        let gatekeeper = Gatekeeper::new(ScreeningConfig::permissive());
        let mut bidder = unrelated_bidder();
        bidder.address = "Muminov Street 4A".to_string();
        bidder.cea = 1;
        bidder.registered_at = NOW;

        let result = gatekeeper.screen(&tender(), &bidder, &[], &graph(), NOW).unwrap();
        assert!(result.is_accepted());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let mut config = ScreeningConfig::default();
        config.max_route_len = 0;
        let result = Gatekeeper::new(config).screen(&tender(), &unrelated_bidder(), &[], &graph(), NOW);
        assert!(matches!(result, Err(GatekeeperError::Config(_))));
    }

    #[test]
    fn test_reason_messages() {
        let reason = RejectionReason::Interception {
            route: vec![id(12345678901234), id(77665544332211)],
        };
        assert_eq!(
            reason.to_string(),
            "Tender organization intercepts with participating organization via 12345678901234 -> 77665544332211"
        );
    }
}

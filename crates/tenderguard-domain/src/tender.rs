//! Procurement records screened against the relationship graph
//!
//! Field names follow the JSON the ledger handlers exchange, so these types
//! deserialize directly from request payloads.

use crate::PersonId;
use serde::{Deserialize, Serialize};

/// Milliseconds in one day
pub const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// The person who registered an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    /// Display name
    pub name: String,

    /// National identifier
    pub pinfl: PersonId,
}

/// A registered organization, either a tender consumer or a bidder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Taxpayer identification number
    pub tin: u64,

    /// Organization name
    #[serde(default)]
    pub name: String,

    /// Person who registered the organization
    pub creator: Creator,

    /// Registered address
    pub address: String,

    /// Economic activity classifier code (CEA)
    pub cea: u32,

    /// Registration time, milliseconds since Unix epoch
    #[serde(rename = "date")]
    pub registered_at: u64,
}

impl Organization {
    /// Age of the organization at `now` (milliseconds), in whole days
    ///
    /// Registration dates in the future count as zero days.
    pub fn age_days(&self, now: u64) -> u64 {
        now.saturating_sub(self.registered_at) / MILLIS_PER_DAY
    }
}

/// One line of a tender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenderItem {
    /// Number of units requested
    pub quantity: u64,

    /// Unit of measure
    pub unit: String,

    /// Item categories
    #[serde(default)]
    pub categories: Vec<String>,

    /// Unit price
    pub price: u64,
}

/// A procurement request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tender {
    /// Lot number, unique per tender
    pub lot_number: u64,

    /// Organization requesting the goods
    pub consumer: Organization,

    /// Opening time, milliseconds since Unix epoch
    pub start_date: u64,

    /// Closing time, milliseconds since Unix epoch
    pub end_date: u64,

    /// Starting price
    pub start_price: u64,

    /// Economic activity classifier code (CEA)
    pub cea: u32,

    /// Requested items
    #[serde(default)]
    pub items: Vec<TenderItem>,
}

impl Tender {
    /// Identifier of the person who created the consumer organization
    pub fn creator(&self) -> PersonId {
        self.consumer.creator.pinfl
    }
}

/// A bid placed on a tender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenderPosition {
    /// Bidding organization
    pub organization: Organization,

    /// Offered price
    pub price: u64,
}

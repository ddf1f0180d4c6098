//! Tenderguard Gatekeeper
//!
//! Decides whether an organization may bid on a tender.
//!
//! The Gatekeeper provides:
//! - Conflict-of-interest screening through the interception router
//! - Address, creator and classifier (CEA) checks
//! - Minimum organization age
//! - Configurable rule sets loaded from TOML
//!
//! # Examples
//!
//! ```no_run
//! use tenderguard_gatekeeper::{Gatekeeper, ScreeningConfig};
//!
//! let config = ScreeningConfig::default();
//! let gatekeeper = Gatekeeper::new(config);
//!
//! // Screen a bid before recording it
//! // let result = gatekeeper.screen(&tender, &organization, &positions, &graph, now)?;
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod screener;

pub use config::ScreeningConfig;
pub use error::GatekeeperError;
pub use screener::{CreatorSide, Gatekeeper, RejectionReason, ScreeningResult, ScreeningStatus};

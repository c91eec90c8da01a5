//! arcade-core
//!
//! Business logic and services for the JR Arcade tenant management system.
//! Depends on arcade-domain. No CLI, no terminal I/O, no direct storage
//! interactions beyond the [`storage::BuildingStorage`] abstraction.

pub mod adjustment;
pub mod codec;
pub mod error;
pub mod ledger;
pub mod messaging;
pub mod offices;
pub mod payments;
pub mod scanner;
pub mod storage;
pub mod tenants;
pub mod time;
pub mod totals;

pub use adjustment::*;
pub use error::CoreError;
pub use ledger::*;
pub use offices::*;
pub use payments::*;
pub use scanner::*;
pub use tenants::*;
pub use time::{Clock, SystemClock};
pub use totals::*;

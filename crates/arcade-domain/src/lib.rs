//! arcade-domain
//!
//! Pure domain models for the JR Arcade tenant management system
//! (offices, tenants, payments, ledger entries, notifications, users).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod building;
pub mod common;
pub mod entry;
pub mod notification;
pub mod office;
pub mod payment;
pub mod tenant;
pub mod user;

pub use building::*;
pub use common::*;
pub use entry::*;
pub use notification::*;
pub use office::*;
pub use payment::*;
pub use tenant::*;
pub use user::*;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Office not found: {0}")]
    OfficeNotFound(u32),
    #[error("Tenant not found: {0}")]
    TenantNotFound(Uuid),
    #[error("Payment record not found: {0}")]
    PaymentNotFound(Uuid),
    #[error("Ledger entry not found: {0}")]
    EntryNotFound(Uuid),
    #[error("User account not found: {0}")]
    UserNotFound(Uuid),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

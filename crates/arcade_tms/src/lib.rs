//! arcade_tms
//!
//! Application layer for the JR Arcade tenant management system: unified
//! errors, ledger exports, snapshot seeding, and the CLI surface over the
//! arcade-core services.

pub mod cli;
pub mod errors;
pub mod export;
pub mod seed;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("arcade_tms=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("JR Arcade TMS tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}

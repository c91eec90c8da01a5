use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Stores user-configurable preferences and path overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Currency label shown in listings and exports.
    #[serde(default = "Config::default_currency_label")]
    pub currency_label: String,
    /// Country code used when normalizing phone numbers for WhatsApp links.
    #[serde(default = "Config::default_country_code")]
    pub country_code: String,
    /// Snapshot name loaded by default.
    #[serde(default = "Config::default_building_name")]
    pub building_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for snapshots and backups.
    /// Defaults to `~/Documents/JR TMS/data`.
    pub data_root: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for ledger exports.
    /// Defaults to `~/Documents/JR TMS`.
    pub export_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_label: Self::default_currency_label(),
            country_code: Self::default_country_code(),
            building_name: Self::default_building_name(),
            data_root: None,
            export_root: None,
        }
    }
}

impl Config {
    pub fn default_currency_label() -> String {
        "Rs.".into()
    }

    pub fn default_country_code() -> String {
        "92".into()
    }

    pub fn default_building_name() -> String {
        "jr-arcade".into()
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }
        documents_base().join("JR TMS").join("data")
    }

    pub fn resolve_export_root(&self) -> PathBuf {
        if let Some(path) = &self.export_root {
            return path.clone();
        }
        documents_base().join("JR TMS")
    }
}

fn documents_base() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

//! Non-interactive command-line front end. Every command follows the same
//! shape: load the snapshot, run a service, save the snapshot back.

pub mod commands;

use std::path::PathBuf;

use tracing::warn;

use arcade_config::{Config, ConfigManager};
use arcade_core::storage::{building_warnings, BuildingStorage};
use arcade_domain::Building;
use arcade_storage_json::JsonBuildingStorage;

use crate::errors::CliError;

pub struct AppContext {
    pub config: Config,
    pub storage: JsonBuildingStorage,
}

impl AppContext {
    /// Loads config from `~/Documents/JR TMS` and opens storage under the
    /// configured data root.
    pub fn bootstrap() -> Result<Self, CliError> {
        let manager = ConfigManager::with_base_dir(default_base_dir())?;
        let config = manager.load()?;
        let data_root = config.resolve_data_root();
        let storage =
            JsonBuildingStorage::new(data_root.join("snapshots"), data_root.join("backups"))?;
        Ok(Self { config, storage })
    }

    pub fn load_building(&self) -> Result<Building, CliError> {
        let building = self.storage.load_building(&self.config.building_name)?;
        for warning in building_warnings(&building) {
            warn!(%warning, "snapshot integrity");
        }
        Ok(building)
    }

    pub fn save_building(&self, building: &Building) -> Result<(), CliError> {
        self.storage
            .save_building(&self.config.building_name, building)?;
        Ok(())
    }
}

fn default_base_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("JR TMS")
}

pub fn run_cli() -> Result<(), CliError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    dispatch(&args)
}

pub fn dispatch(args: &[String]) -> Result<(), CliError> {
    let Some(command) = args.first() else {
        print_help();
        return Ok(());
    };
    let rest = &args[1..];
    match command.as_str() {
        "init" => commands::init(rest),
        "offices" => commands::offices(),
        "tenant" => commands::tenant(rest),
        "payment" => commands::payment(rest),
        "ledger" => commands::ledger(rest),
        "entry" => commands::entry(rest),
        "scan" => commands::scan(),
        "remind" => commands::remind(),
        "cron" => commands::cron(),
        "export" => commands::export(rest),
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}

fn print_help() {
    println!("JR Arcade TMS");
    println!();
    println!("Usage: arcade_tms_cli <command> [args]");
    println!();
    println!("Commands:");
    println!("  init [--demo]                                  create or refresh the building snapshot");
    println!("  offices                                        list the office directory");
    println!("  tenant list                                    list tenants with their offices");
    println!("  tenant add <username> <name> <phone> <offices> <rent> <deposit> <lease-start> <lease-end>");
    println!("  tenant remove <username>                       delete a tenant and free their offices");
    println!("  payment add <username> <rent|security|water> <amount> <due-date>");
    println!("  payment set-status <payment-id> <paid|unpaid>  transition a payment, logging the ledger entry");
    println!("  ledger [YYYY-MM]                               show ledger entries and totals");
    println!("  entry add <income|expense> <amount> <description>");
    println!("  scan                                           rent compliance report for the current month");
    println!("  remind                                         WhatsApp reminder links for unpaid tenants");
    println!("  cron                                           run monthly reminders and anniversary increases");
    println!("  export <csv|xlsx> <month> [year]               write the monthly ledger report");
}

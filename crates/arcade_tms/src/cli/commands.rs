//! Command handlers. Parsing stays here; all business rules live in
//! arcade-core services.

use chrono::{Datelike, NaiveDate};
use colored::Colorize;
use uuid::Uuid;

use arcade_core::{
    codec, ledger::parse_month, messaging, AdjustmentJob, Clock, LedgerService, NewTenant,
    OfficeService, PaymentService, RentComplianceScanner, SystemClock, TenantService,
};
use arcade_domain::{Building, EntryKind, PaymentKind, PaymentStatus, TenantProfile};

use crate::cli::AppContext;
use crate::errors::{CliError, TmsError};
use crate::export::{csv::export_month_csv, excel::export_month_xlsx};
use crate::seed;

pub fn init(args: &[String]) -> Result<(), CliError> {
    let with_demo = match args {
        [] => false,
        [flag] if flag == "--demo" => true,
        _ => return Err(CliError::Usage("init [--demo]".into())),
    };

    let ctx = AppContext::bootstrap()?;
    let mut building = if ctx.storage.snapshot_path(&ctx.config.building_name).exists() {
        ctx.load_building()?
    } else {
        Building::new(&ctx.config.building_name)
    };

    let summary = seed::seed(&mut building);
    if with_demo && seed::seed_demo_tenant(&mut building)? {
        println!("Demo tenant johndoe seeded into office 1.");
    }
    ctx.save_building(&building)?;
    println!(
        "Snapshot `{}` ready ({} offices created, admin {}).",
        ctx.config.building_name,
        summary.offices_created,
        if summary.admin_created { "created" } else { "present" }
    );
    Ok(())
}

pub fn offices() -> Result<(), CliError> {
    let ctx = AppContext::bootstrap()?;
    let building = ctx.load_building()?;

    println!("{:<8} {:<7} {:<10} Tenant", "Office", "Floor", "Status");
    for office in OfficeService::list(&building) {
        let status = if office.is_occupied {
            "OCCUPIED".red()
        } else {
            "VACANT".green()
        };
        let tenant_name = office
            .tenant_id
            .and_then(|id| building.tenant(id))
            .map(|t| t.name.clone())
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<8} {:<7} {:<10} {}",
            office.number, office.floor, status, tenant_name
        );
    }
    Ok(())
}

pub fn tenant(args: &[String]) -> Result<(), CliError> {
    match args {
        [sub] if sub == "list" => tenant_list(),
        [sub, username, name, phone, offices, rent, deposit, start, end] if sub == "add" => {
            tenant_add(username, name, phone, offices, rent, deposit, start, end)
        }
        [sub, username] if sub == "remove" => tenant_remove(username),
        _ => Err(CliError::Usage(
            "tenant list | tenant add <username> <name> <phone> <offices> <rent> <deposit> <lease-start> <lease-end> | tenant remove <username>".into(),
        )),
    }
}

fn tenant_list() -> Result<(), CliError> {
    let ctx = AppContext::bootstrap()?;
    let building = ctx.load_building()?;

    if building.tenants.is_empty() {
        println!("No tenants.");
        return Ok(());
    }
    for tenant in &building.tenants {
        let offices: Vec<String> = building
            .offices_of_tenant(tenant.id)
            .iter()
            .map(|o| o.number.to_string())
            .collect();
        let username = building
            .user(tenant.user_id)
            .map(|u| u.username.clone())
            .unwrap_or_else(|| "?".into());
        println!(
            "{} ({}) — offices {} — rent {} {:.2} — lease {} to {}",
            tenant.name.bold(),
            username,
            offices.join(", "),
            ctx.config.currency_label,
            tenant.monthly_rent,
            tenant.lease_start,
            tenant.lease_end
        );
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn tenant_add(
    username: &str,
    name: &str,
    phone: &str,
    offices: &str,
    rent: &str,
    deposit: &str,
    start: &str,
    end: &str,
) -> Result<(), CliError> {
    let ctx = AppContext::bootstrap()?;
    let mut building = ctx.load_building()?;

    let new = NewTenant {
        username: username.into(),
        // Credential is provisioned by the auth layer afterwards.
        password_hash: "!".into(),
        name: name.into(),
        phone: phone.into(),
        office_numbers: parse_offices(offices)?,
        lease_start: parse_date(start)?,
        lease_end: parse_date(end)?,
        monthly_rent: parse_amount(rent)?,
        security_deposit: parse_amount(deposit)?,
    };
    let id = TenantService::create(&mut building, new)?;
    ctx.save_building(&building)?;
    println!("Tenant {} created ({}).", name.bold(), id);
    Ok(())
}

fn tenant_remove(username: &str) -> Result<(), CliError> {
    let ctx = AppContext::bootstrap()?;
    let mut building = ctx.load_building()?;

    let tenant_id = tenant_by_username(&building, username)?.id;
    TenantService::remove(&mut building, tenant_id)?;
    ctx.save_building(&building)?;
    println!("Tenant {username} removed.");
    Ok(())
}

pub fn payment(args: &[String]) -> Result<(), CliError> {
    match args {
        [sub, username, kind, amount, due] if sub == "add" => {
            payment_add(username, kind, amount, due)
        }
        [sub, id, status] if sub == "set-status" => payment_set_status(id, status),
        _ => Err(CliError::Usage(
            "payment add <username> <rent|security|water> <amount> <due-date> | payment set-status <payment-id> <paid|unpaid>".into(),
        )),
    }
}

fn payment_add(username: &str, kind: &str, amount: &str, due: &str) -> Result<(), CliError> {
    let ctx = AppContext::bootstrap()?;
    let mut building = ctx.load_building()?;

    let tenant_id = tenant_by_username(&building, username)?.id;
    let id = PaymentService::create(
        &mut building,
        tenant_id,
        parse_payment_kind(kind)?,
        parse_amount(amount)?,
        parse_date(due)?,
    )?;
    ctx.save_building(&building)?;
    println!("Payment {id} recorded for {username}.");
    Ok(())
}

fn payment_set_status(id: &str, status: &str) -> Result<(), CliError> {
    let ctx = AppContext::bootstrap()?;
    let mut building = ctx.load_building()?;

    let payment_id: Uuid = id
        .parse()
        .map_err(|_| TmsError::InvalidInput(format!("invalid payment id `{id}`")))?;
    PaymentService::set_status(&mut building, payment_id, parse_status(status)?, SystemClock.now())?;
    ctx.save_building(&building)?;
    println!("Payment {payment_id} marked {}.", status.to_uppercase());
    Ok(())
}

pub fn ledger(args: &[String]) -> Result<(), CliError> {
    let month = match args {
        [] => None,
        [filter] => Some(parse_month(filter)?),
        _ => return Err(CliError::Usage("ledger [YYYY-MM]".into())),
    };

    let ctx = AppContext::bootstrap()?;
    let building = ctx.load_building()?;
    let (entries, summary) = LedgerService::listing(&building, month);

    for entry in &entries {
        let (category, details) = codec::export_columns(&entry.detail);
        let kind = match entry.kind {
            EntryKind::Income => entry.kind.to_string().green(),
            EntryKind::Expense => entry.kind.to_string().red(),
        };
        println!(
            "{}  {:<7}  {:<20}  {:<40}  {} {:.2}",
            entry.date.format("%Y-%m-%d %H:%M"),
            kind,
            category,
            details,
            ctx.config.currency_label,
            entry.amount
        );
    }
    println!();
    println!(
        "Income: {} {:.2}   Expenses: {} {:.2}   Net: {} {:.2}",
        ctx.config.currency_label,
        summary.income,
        ctx.config.currency_label,
        summary.expenses,
        ctx.config.currency_label,
        summary.net_profit_loss
    );
    Ok(())
}

pub fn entry(args: &[String]) -> Result<(), CliError> {
    match args {
        [sub, kind, amount, description @ ..] if sub == "add" && !description.is_empty() => {
            let ctx = AppContext::bootstrap()?;
            let mut building = ctx.load_building()?;

            let detail = codec::decode(&description.join(" "));
            let id = LedgerService::add_entry(
                &mut building,
                parse_entry_kind(kind)?,
                detail,
                parse_amount(amount)?,
                SystemClock.now(),
            )?;
            ctx.save_building(&building)?;
            println!("Entry {id} recorded.");
            Ok(())
        }
        _ => Err(CliError::Usage(
            "entry add <income|expense> <amount> <description>".into(),
        )),
    }
}

pub fn scan() -> Result<(), CliError> {
    let ctx = AppContext::bootstrap()?;
    let building = ctx.load_building()?;
    let report = RentComplianceScanner::scan(&building, SystemClock.today());

    println!("Rent compliance for {}", report.month.bold());
    if report.unpaid_tenants.is_empty() {
        println!("{}", "All tenants have paid rent this month.".green());
        return Ok(());
    }
    for group in &report.unpaid_tenants {
        let offices: Vec<String> = group.unpaid_offices.iter().map(u32::to_string).collect();
        println!(
            "{} ({}) — office(s) {}",
            group.tenant_name.red(),
            group.phone,
            offices.join(", ")
        );
    }
    if report.is_alert_day {
        println!(
            "{}",
            format!(
                "ALERT: {} tenant group(s) still unpaid past the grace period.",
                report.total_unpaid_groups
            )
            .red()
            .bold()
        );
    }
    Ok(())
}

pub fn remind() -> Result<(), CliError> {
    let ctx = AppContext::bootstrap()?;
    let building = ctx.load_building()?;
    let report = RentComplianceScanner::scan(&building, SystemClock.today());

    if report.unpaid_tenants.is_empty() {
        println!("Nothing to remind: all rent is paid for {}.", report.month);
        return Ok(());
    }
    for group in &report.unpaid_tenants {
        let link = messaging::reminder_link(group, &report.month, &ctx.config.country_code);
        println!("{}: {}", group.tenant_name.bold(), link);
    }
    Ok(())
}

pub fn cron() -> Result<(), CliError> {
    let ctx = AppContext::bootstrap()?;
    let mut building = ctx.load_building()?;

    let outcome = AdjustmentJob::run(&mut building, SystemClock.now());
    ctx.save_building(&building)?;
    println!(
        "Adjustment run complete: {} reminder(s) sent, {} rent increase(s) applied.",
        outcome.notifications_sent, outcome.rent_increases
    );
    Ok(())
}

pub fn export(args: &[String]) -> Result<(), CliError> {
    let (format, month_name, year) = match args {
        [format, month] => (format.as_str(), month.as_str(), SystemClock.today().year()),
        [format, month, year] => (
            format.as_str(),
            month.as_str(),
            year.parse()
                .map_err(|_| TmsError::InvalidInput(format!("invalid year `{year}`")))?,
        ),
        _ => return Err(CliError::Usage("export <csv|xlsx> <month> [year]".into())),
    };

    let ctx = AppContext::bootstrap()?;
    let building = ctx.load_building()?;
    let export_root = ctx.config.resolve_export_root();

    let path = match format {
        "csv" => export_month_csv(&building, month_name, year, &export_root)?,
        "xlsx" => export_month_xlsx(&building, month_name, year, &export_root)?,
        other => {
            return Err(CliError::Usage(format!(
                "unknown export format `{other}`, expected csv or xlsx"
            )))
        }
    };
    println!("Ledger report written to {}.", path.display());
    Ok(())
}

fn tenant_by_username<'a>(
    building: &'a Building,
    username: &str,
) -> Result<&'a TenantProfile, CliError> {
    let user = building
        .user_by_username(username)
        .ok_or_else(|| TmsError::InvalidInput(format!("no user named `{username}`")))?;
    building
        .tenants
        .iter()
        .find(|t| t.user_id == user.id)
        .ok_or_else(|| TmsError::InvalidInput(format!("`{username}` has no tenant profile")).into())
}

fn parse_offices(value: &str) -> Result<Vec<u32>, CliError> {
    value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| TmsError::InvalidInput(format!("invalid office number `{part}`")).into())
        })
        .collect()
}

fn parse_date(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| TmsError::InvalidInput(format!("invalid date `{value}`, expected YYYY-MM-DD")).into())
}

fn parse_amount(value: &str) -> Result<f64, CliError> {
    value
        .parse::<f64>()
        .map_err(|_| TmsError::InvalidInput(format!("invalid amount `{value}`")).into())
}

fn parse_payment_kind(value: &str) -> Result<PaymentKind, CliError> {
    match value.to_ascii_lowercase().as_str() {
        "rent" => Ok(PaymentKind::Rent),
        "security" => Ok(PaymentKind::Security),
        "water" => Ok(PaymentKind::Water),
        other => Err(TmsError::InvalidInput(format!("unknown payment kind `{other}`")).into()),
    }
}

fn parse_entry_kind(value: &str) -> Result<EntryKind, CliError> {
    match value.to_ascii_lowercase().as_str() {
        "income" => Ok(EntryKind::Income),
        "expense" => Ok(EntryKind::Expense),
        other => Err(TmsError::InvalidInput(format!("unknown entry kind `{other}`")).into()),
    }
}

fn parse_status(value: &str) -> Result<PaymentStatus, CliError> {
    match value.to_ascii_lowercase().as_str() {
        "paid" => Ok(PaymentStatus::Paid),
        "unpaid" => Ok(PaymentStatus::Unpaid),
        other => Err(TmsError::InvalidInput(format!("unknown payment status `{other}`")).into()),
    }
}

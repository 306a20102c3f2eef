//! Command handlers

use std::path::PathBuf;

use crate::cli::{
    Cli, Commands, CustomerAction, InvoiceAction, MemoAction, OutputFormat, SheetAction, SheetName,
};
use crate::output::{
    output_catalogue, output_customers, output_invoice, output_invoice_list, output_memo,
    output_memo_list, output_rows,
};
use tripmemo_app::config::Config;
use tripmemo_app::constants::LOCATION_CATEGORIES;
use tripmemo_app::export::export_memo_register;
use tripmemo_app::repository::{
    open_areas_sheet, open_customer_repo, open_invoice_repo, open_lookup_sheet, open_memo_repo,
    open_rates_sheet,
};
use tripmemo_app::service::{
    build_catalogue, find_service, invoice_service, memo_service, table_service, ServiceEntry,
};
use tripmemo_domain::model::{Customer, SheetRow, TripMemo};
use tripmemo_domain::repository::{
    CustomerRepository, InvoiceRepository, MemoRepository, SheetRepository,
};
use tripmemo_infra::persistence::FileSheetRepository;
use tripmemo_infra::sheet_csv::{read_sheet_csv, write_sheet_csv};
use tripmemo_types::{MemoStatus, Result};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.store_dir.is_some() {
        config.store_dir = cli.store_dir.clone();
    }
    let format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Memo { action } => cmd_memo(&config, format, action),

        Commands::Invoice { action } => cmd_invoice(&config, format, action),

        Commands::Customer { action } => cmd_customer(&config, format, action),

        Commands::Sheet { name, action } => cmd_sheet(&config, format, *name, action),

        Commands::Catalogue { key } => cmd_catalogue(&config, format, key.as_deref()),

        Commands::Export { output } => cmd_export(&config, output.clone()),

        Commands::Config {
            show,
            set_store_dir,
            set_output,
            set_memo_prefix,
            set_invoice_prefix,
            reset,
        } => cmd_config(
            *show,
            set_store_dir.clone(),
            *set_output,
            set_memo_prefix.clone(),
            set_invoice_prefix.clone(),
            *reset,
        ),
    }
}

fn load_catalogue(config: &Config) -> Result<Vec<ServiceEntry>> {
    let areas = open_areas_sheet(config)?.list()?;
    let rates = open_rates_sheet(config)?.list()?;
    Ok(build_catalogue(&areas, &rates))
}

fn cmd_memo(config: &Config, format: OutputFormat, action: &MemoAction) -> Result<()> {
    let memos = open_memo_repo(config)?;

    match action {
        MemoAction::New {
            customer,
            service,
            service2,
        } => {
            let mut memo = memo_service::new_memo(&memos, &config.memo_prefix)?;

            if let Some(name) = customer {
                let customers = open_customer_repo(config)?;
                memo_service::apply_customer(&customers, &mut memo, name)?;
            }

            if service.is_some() || service2.is_some() {
                let catalogue = load_catalogue(config)?;
                if let Some(key) = service {
                    memo_service::apply_service_primary(&mut memo, &catalogue, key);
                }
                if let Some(key) = service2 {
                    memo_service::apply_service_secondary(&mut memo, &catalogue, key);
                }
            }

            let stored = memo_service::save_memo(&memos, &memo)?;
            println!("Memo {} created", stored.memo_no);
            output_memo(format, &stored)
        }

        MemoAction::Save { file } => {
            let content = std::fs::read_to_string(file)?;
            let memo: TripMemo = serde_json::from_str(&content)?;
            let stored = memo_service::save_memo(&memos, &memo)?;
            println!("Memo {} saved", stored.memo_no);
            output_memo(format, &stored)
        }

        MemoAction::Show { memo_no } => {
            let memo = memo_service::load_memo(&memos, memo_no)?;
            output_memo(format, &memo)
        }

        MemoAction::List { pending, customer } => {
            let list = match customer {
                Some(name) => memos.find_pending_by_customer(name)?,
                None => {
                    let all = memos.find_all()?;
                    if *pending {
                        all.into_iter()
                            .filter(|m| m.status == MemoStatus::Pending)
                            .collect()
                    } else {
                        all
                    }
                }
            };
            output_memo_list(format, &list)
        }

        MemoAction::Delete { memo_no } => {
            memo_service::delete_memo(&memos, memo_no)?;
            println!("Memo {} deleted", memo_no);
            Ok(())
        }
    }
}

fn cmd_invoice(config: &Config, format: OutputFormat, action: &InvoiceAction) -> Result<()> {
    let memos = open_memo_repo(config)?;
    let invoices = open_invoice_repo(config)?;

    match action {
        InvoiceAction::Create { memo_nos } => {
            let draft =
                invoice_service::build_invoice(&memos, &invoices, memo_nos, &config.invoice_prefix)?;
            let stored = invoice_service::save_invoice(&memos, &invoices, &draft)?;
            println!(
                "Invoice {} saved over {} memo(s)",
                stored.invoice_no,
                stored.memos.len()
            );
            output_invoice(format, &stored)
        }

        InvoiceAction::Preview { memo_nos } => {
            let draft =
                invoice_service::build_invoice(&memos, &invoices, memo_nos, &config.invoice_prefix)?;
            output_invoice(format, &draft)
        }

        InvoiceAction::Show { id } => {
            let invoice = invoice_service::load_invoice(&invoices, *id)?;
            output_invoice(format, &invoice)
        }

        InvoiceAction::List => {
            let list = invoices.find_all()?;
            output_invoice_list(format, &list)
        }

        InvoiceAction::Delete { id } => {
            invoice_service::delete_invoice(&invoices, *id)?;
            println!("Invoice {} deleted", id);
            Ok(())
        }
    }
}

fn cmd_customer(config: &Config, format: OutputFormat, action: &CustomerAction) -> Result<()> {
    let customers = open_customer_repo(config)?;

    match action {
        CustomerAction::List => {
            let list = customers.find_all()?;
            output_customers(format, &list)
        }

        CustomerAction::Search { term } => {
            let hits = customers.search_by_name(term)?;
            output_customers(format, &hits)
        }

        CustomerAction::Add {
            name,
            address1,
            address2,
        } => {
            customers.insert(&Customer {
                name: name.clone(),
                address1: address1.clone(),
                address2: address2.clone(),
            })?;
            println!("Customer {} added", name);
            Ok(())
        }

        CustomerAction::Update {
            index,
            name,
            address1,
            address2,
        } => {
            customers.update_at(
                *index,
                &Customer {
                    name: name.clone(),
                    address1: address1.clone(),
                    address2: address2.clone(),
                },
            )?;
            println!("Customer {} updated", index);
            Ok(())
        }

        CustomerAction::Delete { index } => {
            customers.delete_at(*index)?;
            println!("Customer {} deleted", index);
            Ok(())
        }
    }
}

fn open_named_sheet(config: &Config, name: SheetName) -> Result<FileSheetRepository> {
    match name {
        SheetName::Areas => open_areas_sheet(config),
        SheetName::Rates => open_rates_sheet(config),
        SheetName::Lookup => open_lookup_sheet(config),
    }
}

/// Comma-separated cells, trimmed
fn parse_row(arg: &str) -> SheetRow {
    arg.split(',').map(|cell| cell.trim().to_string()).collect()
}

fn cmd_sheet(
    config: &Config,
    format: OutputFormat,
    name: SheetName,
    action: &SheetAction,
) -> Result<()> {
    let sheet = open_named_sheet(config, name)?;

    match action {
        SheetAction::List => {
            let header = sheet.header()?;
            let rows = sheet.list()?;
            output_rows(format, header.as_ref(), &rows)
        }

        SheetAction::Search { term } => {
            let header = sheet.header()?;
            let hits = table_service::search_rows(&sheet, term)?;
            output_rows(format, header.as_ref(), &hits)
        }

        SheetAction::Add { row } => {
            let row = parse_row(row);
            if name == SheetName::Areas {
                if let Some(category) = row.get(1) {
                    if !LOCATION_CATEGORIES.contains(&category.as_str()) {
                        eprintln!(
                            "Warning: unknown category '{}' (known: {})",
                            category,
                            LOCATION_CATEGORIES.join(", ")
                        );
                    }
                }
            }
            sheet.insert(&row)?;
            println!("Row added");
            Ok(())
        }

        SheetAction::Update { row, with } => {
            let index = table_service::update_row(&sheet, &parse_row(row), &parse_row(with))?;
            println!("Row {} updated", index);
            Ok(())
        }

        SheetAction::Delete { row } => {
            let index = table_service::delete_row(&sheet, &parse_row(row))?;
            println!("Row {} deleted", index);
            Ok(())
        }

        SheetAction::Export { output } => {
            let header = sheet.header()?;
            let rows = sheet.list()?;
            write_sheet_csv(output, header.as_ref(), &rows)?;
            println!("Exported {} row(s) to {}", rows.len(), output.display());
            Ok(())
        }

        SheetAction::Import { input } => {
            let has_header = name != SheetName::Areas;
            // The sheet keeps its own header; only body rows are imported
            let (_, rows) = read_sheet_csv(input, has_header)?;
            let existing = sheet.list()?.len();
            for _ in 0..existing {
                sheet.delete_at(0)?;
            }
            for row in &rows {
                sheet.insert(row)?;
            }
            println!("Imported {} row(s) from {}", rows.len(), input.display());
            Ok(())
        }
    }
}

fn cmd_catalogue(config: &Config, format: OutputFormat, key: Option<&str>) -> Result<()> {
    let catalogue = load_catalogue(config)?;

    match key {
        Some(key) => {
            let entries: Vec<ServiceEntry> =
                find_service(&catalogue, key).cloned().into_iter().collect();
            output_catalogue(format, &entries)
        }
        None => output_catalogue(format, &catalogue),
    }
}

fn cmd_export(config: &Config, output: PathBuf) -> Result<()> {
    let memos = open_memo_repo(config)?.find_all()?;
    export_memo_register(&memos, &output)?;
    println!("Exported {} memo(s) to {}", memos.len(), output.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_store_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_memo_prefix: Option<String>,
    set_invoice_prefix: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::reset()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(dir) = set_store_dir {
        config.store_dir = Some(dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(prefix) = set_memo_prefix {
        config.memo_prefix = prefix;
        modified = true;
    }

    if let Some(prefix) = set_invoice_prefix {
        config.invoice_prefix = prefix;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

//! Output formatting module

use serde::Serialize;

use tripmemo_app::service::ServiceEntry;
use tripmemo_domain::model::{Customer, Invoice, SheetRow, TripMemo};
use tripmemo_types::{OutputFormat, Result};

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

pub fn output_memo(format: OutputFormat, memo: &TripMemo) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(memo);
    }

    println!("\nTrip Memo {}", memo.memo_no);
    println!("================");
    println!("Date:            {}", memo.operated_date);
    println!("Customer:        {}", memo.customer_name);
    if !memo.customer_address1.is_empty() {
        println!("                 {}", memo.customer_address1);
    }
    if !memo.customer_address2.is_empty() {
        println!("                 {}", memo.customer_address2);
    }
    println!("Vehicle:         {} ({})", memo.vehicle_no, memo.vehicle_type);
    println!("Status:          {}", memo.status);

    println!("\n--- Trip ---");
    println!(
        "Shift 1:         {} - {}  ({} - {} km)",
        memo.starting_time1, memo.closing_time1, memo.starting_km1, memo.closing_km1
    );
    if !memo.starting_time2.is_empty() || !memo.starting_km2.is_empty() {
        println!(
            "Shift 2:         {} - {}  ({} - {} km)",
            memo.starting_time2, memo.closing_time2, memo.starting_km2, memo.closing_km2
        );
    }
    println!("Total hours:     {}", memo.total_hours);
    println!("Total km:        {}", memo.total_km);

    println!("\n--- Charges ---");
    println!("Minimum 1:       {}  ({} hrs)", memo.minimum_charges1, memo.minimum_hours1);
    if !memo.service_item2.is_empty() {
        println!("Minimum 2:       {}  ({} hrs)", memo.minimum_charges2, memo.minimum_hours2);
    }
    println!(
        "Extra hours:     {} @ {} = {}",
        memo.extra_hours, memo.additional_hour_rate, memo.extra_hour_amount
    );
    println!("KM amount:       {}", memo.km_amount);
    println!(
        "Driver bata:     {} x {} = {}",
        memo.driver_bata_qty, memo.driver_bata_rate, memo.driver_bata_amount
    );
    println!("Discount:        {}", memo.discount_amount);
    println!("Total:           {}", memo.total_amount);
    println!("Less advance:    {}", memo.less_advance);
    println!("Balance:         {}", memo.balance);
    println!("In words:        {}", memo.total_in_words);

    Ok(())
}

pub fn output_memo_list(format: OutputFormat, memos: &[TripMemo]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&memos);
    }

    println!(
        "{:<10} {:<12} {:<24} {:<14} {:>12} {:<10}",
        "Memo No", "Date", "Customer", "Vehicle", "Total", "Status"
    );
    for memo in memos {
        println!(
            "{:<10} {:<12} {:<24} {:<14} {:>12} {:<10}",
            memo.memo_no,
            memo.operated_date,
            memo.customer_name,
            memo.vehicle_no,
            memo.total_amount,
            memo.status
        );
    }
    println!("\n{} memo(s)", memos.len());
    Ok(())
}

pub fn output_invoice(format: OutputFormat, invoice: &Invoice) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(invoice);
    }

    println!("\nInvoice {}", invoice.invoice_no);
    println!("================");
    if let Some(id) = invoice.id {
        println!("Id:              {}", id);
    }
    println!("Date:            {}", invoice.invoice_date);
    println!("Customer:        {}", invoice.customer_name);
    if !invoice.customer_address1.is_empty() {
        println!("                 {}", invoice.customer_address1);
    }
    if !invoice.customer_address2.is_empty() {
        println!("                 {}", invoice.customer_address2);
    }

    println!("\n{:<4} {:<10} {:<12} {:<14} {:>12}", "#", "Memo No", "Date", "Vehicle", "Amount");
    for (i, line) in invoice.memos.iter().enumerate() {
        println!(
            "{:<4} {:<10} {:<12} {:<14} {:>12}",
            i + 1,
            line.memo_no,
            line.operated_date,
            line.vehicle_no,
            line.total_amount
        );
    }

    println!("\nTotal:           {}", invoice.total_amount);
    println!("Less advance:    {}", invoice.less_advance);
    println!("Balance:         {}", invoice.balance);
    println!("In words:        {}", invoice.total_in_words);
    Ok(())
}

pub fn output_invoice_list(format: OutputFormat, invoices: &[Invoice]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&invoices);
    }

    println!(
        "{:<6} {:<10} {:<12} {:<24} {:>6} {:>12}",
        "Id", "Number", "Date", "Customer", "Memos", "Total"
    );
    for invoice in invoices {
        let id = invoice.id.map(|i| i.to_string()).unwrap_or_default();
        println!(
            "{:<6} {:<10} {:<12} {:<24} {:>6} {:>12}",
            id,
            invoice.invoice_no,
            invoice.invoice_date,
            invoice.customer_name,
            invoice.memos.len(),
            invoice.total_amount
        );
    }
    println!("\n{} invoice(s)", invoices.len());
    Ok(())
}

pub fn output_customers(format: OutputFormat, customers: &[Customer]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&customers);
    }

    for (i, customer) in customers.iter().enumerate() {
        println!("[{}] {} | {} | {}", i, customer.name, customer.address1, customer.address2);
    }
    println!("\n{} customer(s)", customers.len());
    Ok(())
}

pub fn output_rows(format: OutputFormat, header: Option<&SheetRow>, rows: &[SheetRow]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&rows);
    }

    if let Some(header) = header {
        println!("    {}", header.join(" | "));
    }
    for (i, row) in rows.iter().enumerate() {
        println!("[{}] {}", i, row.join(" | "));
    }
    println!("\n{} row(s)", rows.len());
    Ok(())
}

pub fn output_catalogue(format: OutputFormat, entries: &[ServiceEntry]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&entries);
    }

    println!(
        "{:<36} {:<34} {:>8} {:>10} {:>8} {:>6}",
        "Key", "Service", "Min hrs", "Min chg", "Addl/hr", "Bata"
    );
    for entry in entries {
        println!(
            "{:<36} {:<34} {:>8} {:>10} {:>8} {:>6}",
            entry.key,
            entry.label(),
            entry.minimum_hours,
            entry.minimum_charges,
            entry.additional_hour_rate,
            entry.driver_bata
        );
    }
    println!("\n{} service(s)", entries.len());
    Ok(())
}

//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub use tripmemo_types::OutputFormat;

/// Trip memo and invoice management for a transport back office
#[derive(Parser, Debug)]
#[command(name = "tripmemo", version, about)]
pub struct Cli {
    /// Output format (overrides the configured default)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Store directory (overrides the configured default)
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Trip memo operations
    Memo {
        #[command(subcommand)]
        action: MemoAction,
    },

    /// Invoice operations
    Invoice {
        #[command(subcommand)]
        action: InvoiceAction,
    },

    /// Customer directory operations
    Customer {
        #[command(subcommand)]
        action: CustomerAction,
    },

    /// Flat reference-sheet operations (areas, rate table, lookup)
    Sheet {
        /// Which sheet to operate on
        #[arg(value_enum)]
        name: SheetName,

        #[command(subcommand)]
        action: SheetAction,
    },

    /// List the generated service catalogue
    Catalogue {
        /// Show only the entry with this service key
        #[arg(long)]
        key: Option<String>,
    },

    /// Export the memo register to an Excel file
    Export {
        /// Output .xlsx path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show or modify configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set the default output format
        #[arg(long, value_enum)]
        set_output: Option<OutputFormat>,

        /// Set the memo number prefix
        #[arg(long)]
        set_memo_prefix: Option<String>,

        /// Set the invoice number prefix
        #[arg(long)]
        set_invoice_prefix: Option<String>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MemoAction {
    /// Issue a new memo (numbered, dated today) and save it
    New {
        /// Customer name; fills the address lines from the directory
        #[arg(long)]
        customer: Option<String>,

        /// Service key for slot 1 (fills vehicle type and rates)
        #[arg(long)]
        service: Option<String>,

        /// Service key for slot 2 (fills minimum hours/charges 2)
        #[arg(long)]
        service2: Option<String>,
    },

    /// Save a memo from a JSON file (recomputed before storing)
    Save {
        /// JSON file with the memo's raw fields
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show one memo
    Show { memo_no: String },

    /// List memos
    List {
        /// Only memos not yet invoiced
        #[arg(long)]
        pending: bool,

        /// Restrict to one customer (implies --pending when set)
        #[arg(long)]
        customer: Option<String>,
    },

    /// Delete a memo
    Delete { memo_no: String },
}

#[derive(Subcommand, Debug)]
pub enum InvoiceAction {
    /// Build and save an invoice over the given memo numbers
    Create {
        /// Memo numbers to include, in print order
        #[arg(required = true)]
        memo_nos: Vec<String>,
    },

    /// Build an invoice draft without saving it
    Preview {
        #[arg(required = true)]
        memo_nos: Vec<String>,
    },

    /// Show one invoice
    Show { id: u64 },

    /// List invoices
    List,

    /// Delete an invoice (its memos stay completed)
    Delete { id: u64 },
}

#[derive(Subcommand, Debug)]
pub enum CustomerAction {
    /// List customers
    List,

    /// Search customers by name (case-insensitive substring)
    Search { term: String },

    /// Add a customer
    Add {
        name: String,
        #[arg(default_value = "")]
        address1: String,
        #[arg(default_value = "")]
        address2: String,
    },

    /// Update the customer at an index
    Update {
        index: usize,
        name: String,
        #[arg(default_value = "")]
        address1: String,
        #[arg(default_value = "")]
        address2: String,
    },

    /// Delete the customer at an index
    Delete { index: usize },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SheetName {
    Areas,
    Rates,
    Lookup,
}

#[derive(Subcommand, Debug)]
pub enum SheetAction {
    /// List the sheet's body rows
    List,

    /// Search rows (case-insensitive substring over any cell)
    Search { term: String },

    /// Append a row (cells comma-separated)
    Add { row: String },

    /// Replace a row, located by its current values
    Update {
        /// The row as it reads now (cells comma-separated)
        #[arg(long)]
        row: String,

        /// The replacement row (cells comma-separated)
        #[arg(long)]
        with: String,
    },

    /// Delete a row, located by its current values
    Delete {
        /// The row as it reads now (cells comma-separated)
        #[arg(long)]
        row: String,
    },

    /// Export the sheet to a CSV file
    Export {
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Import a CSV file, replacing the sheet's body rows
    Import {
        #[arg(short, long)]
        input: PathBuf,
    },
}

//! Transaction CLI commands
//!
//! Implements CLI commands for adding, listing, editing and deleting ledger
//! entries.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{TransactionId, TransactionKind};
use crate::services::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
};
use crate::storage::Storage;

use super::{date_or_today, parse_amount, parse_category, parse_date};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record income or an expense
    Add {
        /// income (pemasukan) or expense (pengeluaran)
        kind: TransactionKind,
        /// Amount in rupiah, e.g. "15000" or "15.000"
        amount: String,
        /// Category ("Es Krim & Mainan" or "Gas"); defaults to the configured one
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Note
        #[arg(short = 'm', long)]
        memo: Option<String>,
    },
    /// List transactions
    List {
        /// Only income or only expenses
        #[arg(long)]
        kind: Option<TransactionKind>,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Show only the most recent N transactions
        #[arg(short, long)]
        limit: Option<usize>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Edit a transaction; its type can't change
    Edit {
        /// Transaction ID
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New note
        #[arg(short = 'm', long)]
        memo: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
    /// Delete every transaction
    Clear {
        /// Confirm deleting all data
        #[arg(long)]
        yes: bool,
    },
}

fn parse_id(id: &str) -> LedgerResult<TransactionId> {
    id.trim()
        .parse()
        .map_err(|_| LedgerError::Validation(format!("Invalid transaction ID: '{}'", id)))
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let mut service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
            memo,
        } => {
            let category = match category {
                Some(name) => parse_category(&name)?,
                None => settings.default_category,
            };

            let input = CreateTransactionInput {
                kind,
                amount: Some(parse_amount(&amount)?),
                category,
                date: date_or_today(date.as_deref())?,
                description: memo,
            };

            let txn = service.create(input)?;

            println!("{} berhasil ditambahkan:", txn.kind.label());
            print!("{}", format_transaction_details(&txn));
        }

        TransactionCommands::List {
            kind,
            category,
            limit,
            from,
            to,
        } => {
            let mut filter = TransactionFilter::new();
            if let Some(kind) = kind {
                filter = filter.kind(kind);
            }
            if let Some(name) = category {
                filter = filter.category(parse_category(&name)?);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }
            if from.is_some() || to.is_some() {
                let start = from.as_deref().map(parse_date).transpose()?;
                let end = to.as_deref().map(parse_date).transpose()?;
                filter = filter.date_range(
                    start.unwrap_or(NaiveDate::MIN),
                    end.unwrap_or(NaiveDate::MAX),
                );
            }

            print!("{}", format_transaction_table(&service.list(&filter)));
        }

        TransactionCommands::Show { id } => {
            let txn = service.get(parse_id(&id)?)?;
            print!("{}", format_transaction_details(&txn));
        }

        TransactionCommands::Edit {
            id,
            amount,
            category,
            date,
            memo,
        } => {
            let input = UpdateTransactionInput {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category: category.as_deref().map(parse_category).transpose()?,
                date: date.as_deref().map(parse_date).transpose()?,
                description: memo,
            };

            let txn = service.update(parse_id(&id)?, input)?;

            println!("Transaksi berhasil diperbarui:");
            print!("{}", format_transaction_details(&txn));
        }

        TransactionCommands::Delete { id } => {
            let txn = service.delete(parse_id(&id)?)?;
            println!("Transaksi {} dihapus: {}", txn.id, txn);
        }

        TransactionCommands::Clear { yes } => {
            if !yes {
                return Err(LedgerError::Validation(
                    "Refusing to delete all transactions without --yes".into(),
                ));
            }
            let removed = service.clear();
            println!("{} transaksi dihapus.", removed);
        }
    }

    Ok(())
}

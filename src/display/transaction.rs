//! Transaction display formatting
//!
//! Table and detail views for transactions in the terminal.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Tanggal")]
    date: String,
    #[tabled(rename = "Jenis")]
    kind: &'static str,
    #[tabled(rename = "Kategori")]
    category: &'static str,
    #[tabled(rename = "Jumlah")]
    amount: String,
    #[tabled(rename = "Keterangan")]
    description: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id.to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: txn.kind.label(),
            category: txn.category.label(),
            amount: txn.amount.to_string(),
            description: truncate(&txn.description, 30),
        }
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_table(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "Belum ada transaksi.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions.iter().map(TransactionRow::from).collect();
    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));

    format!("{}\n{} transaksi\n", table, transactions.len())
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaksi:   {}\n", txn.id));
    output.push_str(&format!("Tanggal:     {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Jenis:       {}\n", txn.kind.label()));
    output.push_str(&format!("Kategori:    {}\n", txn.category));
    output.push_str(&format!("Jumlah:      {}\n", txn.amount));

    if !txn.description.is_empty() {
        output.push_str(&format!("Keterangan:  {}\n", txn.description));
    }

    output
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

//! CLI commands for data export
//!
//! Writes the text report file and full data backups.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{csv, export_report_file, json, yaml};
use crate::storage::Storage;

use super::date_or_today;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
    /// CSV format (transactions only)
    Csv,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Write the financial report as a text file
    Report {
        /// Output directory, defaults to the current directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Back up all transactions
    Data {
        /// Output file; defaults to a timestamped file in the backup directory
        output: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
    },
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> LedgerResult<()> {
    match cmd {
        ExportCommands::Report { output, date } => {
            let today = date_or_today(date.as_deref())?;
            let dir = output.unwrap_or_else(|| PathBuf::from("."));
            let path = export_report_file(
                storage.transactions.all(),
                today,
                settings.report_policy,
                &settings.store_name,
                &dir,
            )?;
            println!("Laporan berhasil diunduh: {}", path.display());
            Ok(())
        }
        ExportCommands::Data { output, format } => {
            let output = match output {
                Some(path) => path,
                None => storage.paths().backup_dir().join(format!(
                    "toko-ledger-backup-{}.{}",
                    Local::now().format("%Y%m%d-%H%M%S"),
                    format.extension()
                )),
            };
            handle_export_data(storage, settings, &output, format)
        }
    }
}

fn handle_export_data(
    storage: &Storage,
    settings: &Settings,
    output: &Path,
    format: ExportFormat,
) -> LedgerResult<()> {
    let file = File::create(output).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => {
            json::export_full_json(storage, &settings.store_name, &mut writer, true)?
        }
        ExportFormat::Yaml => yaml::export_full_yaml(storage, &settings.store_name, &mut writer)?,
        ExportFormat::Csv => csv::export_transactions_csv(storage, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Export(format!("Failed to write {}: {}", output.display(), e)))?;

    tracing::info!(path = %output.display(), ?format, "Data exported");
    println!(
        "{} transaksi diekspor ke: {}",
        storage.transactions.len(),
        output.display()
    );

    Ok(())
}

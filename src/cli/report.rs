//! CLI commands for reports
//!
//! Terminal views of the reporting engine. Every view takes the configured
//! report policy, so what is shown here matches the exported report.

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::display::{format_category_reports, format_dashboard, format_period_reports};
use crate::error::LedgerResult;
use crate::reports::{category_reports, generate_report_text, LedgerSummary};
use crate::storage::Storage;

use super::date_or_today;

/// Which report to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportView {
    /// Overall totals (ringkasan)
    Summary,
    /// Weekly buckets
    Weekly,
    /// Monthly buckets
    Monthly,
    /// Per-category totals
    Category,
    /// The complete text report, as exported
    Full,
}

/// Arguments of `toko report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Report to show
    #[arg(value_enum, default_value = "summary")]
    pub view: ReportView,

    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Handle `toko summary`
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    date: Option<String>,
) -> LedgerResult<()> {
    let today = date_or_today(date.as_deref())?;
    let summary = LedgerSummary::compute(storage.transactions.all());
    print!("{}", format_dashboard(&settings.store_name, today, &summary));
    Ok(())
}

/// Handle `toko report`
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    args: ReportArgs,
) -> LedgerResult<()> {
    let today = date_or_today(args.date.as_deref())?;
    let transactions = storage.transactions.all();
    let policy = settings.report_policy;

    tracing::debug!(view = ?args.view, %policy, %today, "Rendering report");

    let output = match args.view {
        ReportView::Summary => format_dashboard(
            &settings.store_name,
            today,
            &LedgerSummary::compute(transactions),
        ),
        ReportView::Weekly => {
            format_period_reports(policy.weekly_title(), &policy.weekly(transactions, today))
        }
        ReportView::Monthly => {
            format_period_reports(policy.monthly_title(), &policy.monthly(transactions, today))
        }
        ReportView::Category => format_category_reports(&category_reports(transactions)),
        ReportView::Full => generate_report_text(transactions, today, policy, &settings.store_name),
    };

    print!("{}", output);
    Ok(())
}

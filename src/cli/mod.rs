use std::path::PathBuf;

use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::services::{aggregator, bucketizer, loader, pager, PeriodReport, Reporter};
use crate::types::{Order, PeriodKind};

/// Day/week/month sales reporting for retail order snapshots
#[derive(Parser)]
#[command(name = "salescope")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON array of orders
    #[arg(short, long, global = true, default_value = "orders.json")]
    orders: PathBuf,

    /// Reference instant (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS); defaults to now
    #[arg(long, global = true, value_parser = parse_reference)]
    at: Option<NaiveDateTime>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PageArgs {
    /// Page of the order table to show (1-based)
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Orders per page
    #[arg(long)]
    per_page: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report today's orders
    Day {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Report the current week's orders, broken down by weekday
    Week {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Report the current month's orders, broken down by week
    Month {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List all orders, most recent first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        page: PageArgs,
    },
}

/// Per-view page sizes carried over from the dashboard's tables
fn default_per_page(kind: Option<PeriodKind>) -> usize {
    match kind {
        Some(PeriodKind::Day) => 7,
        Some(PeriodKind::Week) => 9,
        Some(PeriodKind::Month) => 12,
        None => 10,
    }
}

fn parse_reference(s: &str) -> Result<NaiveDateTime, String> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_hms_opt(0, 0, 0).unwrap());
    }
    Err(format!(
        "invalid reference instant '{s}' (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)"
    ))
}

#[derive(Serialize)]
struct ListOutput<'a> {
    count: usize,
    total: u64,
    orders: &'a [Order],
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let at = self.at.unwrap_or_else(|| Local::now().naive_local());
        let orders = loader::load_orders(&self.orders)?;

        match self.command {
            Commands::Day { json, page } => report_command(&orders, at, PeriodKind::Day, json, page),
            Commands::Week { json, page } => {
                report_command(&orders, at, PeriodKind::Week, json, page)
            }
            Commands::Month { json, page } => {
                report_command(&orders, at, PeriodKind::Month, json, page)
            }
            Commands::List { json, page } => list_command(&orders, json, page),
        }
    }
}

fn report_command(
    orders: &[Order],
    at: NaiveDateTime,
    kind: PeriodKind,
    json: bool,
    page: PageArgs,
) -> anyhow::Result<()> {
    let report = Reporter::period_report(orders, at, kind);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let per_page = page.per_page.unwrap_or_else(|| default_per_page(Some(kind)));
    render_report(&report, page.page, per_page);
    Ok(())
}

fn list_command(orders: &[Order], json: bool, page: PageArgs) -> anyhow::Result<()> {
    let sorted = bucketizer::sort_by_date_descending(orders);
    let total = aggregator::total(&sorted);

    if json {
        let output = ListOutput {
            count: sorted.len(),
            total,
            orders: &sorted,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("All orders");
    println!("  orders: {}    revenue: {}", sorted.len(), total);
    println!();
    let per_page = page.per_page.unwrap_or_else(|| default_per_page(None));
    render_order_table(&sorted, page.page, per_page);
    Ok(())
}

fn render_report(report: &PeriodReport, page: u32, per_page: usize) {
    match report.week_number {
        Some(n) => println!("{} (week {n})", report.label),
        None => println!("{}", report.label),
    }
    println!(
        "  orders: {}    total: {}    daily average: {:.1}",
        report.count, report.total, report.daily_average
    );
    if report.skipped > 0 {
        println!("  skipped (unparsable date): {}", report.skipped);
    }

    if !report.sub_buckets.is_empty() {
        println!();
        for bucket in &report.sub_buckets {
            println!(
                "  {:<18} {:>8}  ({:>5.1}%)  {} orders",
                bucket.label, bucket.total, bucket.percentage, bucket.count
            );
        }
        if let Some(best) = &report.best_sub_bucket {
            println!("  best: {} with {}", best.label, best.total);
        }
    }

    println!();
    render_order_table(&report.orders, page, per_page);
}

fn render_order_table(orders: &[Order], page: u32, per_page: usize) {
    if orders.is_empty() {
        println!("  (no orders)");
        return;
    }

    for order in pager::page_slice(orders, page, per_page) {
        let date = order
            .parsed_date()
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| order.date.clone());
        println!(
            "  {:<16}  {:<24}  {:>8}",
            date, order.customer_name, order.total
        );
    }

    let total_pages = pager::total_pages(orders.len(), per_page);
    if total_pages > 1 {
        let strip: Vec<String> = pager::page_numbers(page, total_pages)
            .into_iter()
            .map(|item| match item {
                pager::PageItem::Page(n) if n == page => format!("[{n}]"),
                pager::PageItem::Page(n) => n.to_string(),
                pager::PageItem::Ellipsis => "…".to_string(),
            })
            .collect();
        println!("  page {page}/{total_pages}: {}", strip.join(" "));
    }
}

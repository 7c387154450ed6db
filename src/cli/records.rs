use chrono::Local;
use colored::Colorize;
use comfy_table::{Cell, Table};

use super::{open_db, RecordsArgs};
use crate::error::Result;
use crate::filter::{AccountStatusFilter, FilterSpec, RiskFilter, Search, SearchMode, SetFilter, SignupRange};
use crate::fmt::{date_text, days_left, short_date, DASH};
use crate::models::Status;
use crate::settings::load_settings;
use crate::store::{load_records, Store};
use crate::view::{build, RowView};

pub fn filter_spec(args: &RecordsArgs) -> FilterSpec {
    let mode = if args.contains {
        SearchMode::Substring
    } else {
        SearchMode::Prefix
    };

    let mut signup_range = args
        .signup
        .as_deref()
        .map(SignupRange::from_label)
        .unwrap_or_default();
    let custom_requested = matches!(signup_range, SignupRange::Custom { .. });
    if custom_requested || args.from_date.is_some() || args.to_date.is_some() {
        signup_range = SignupRange::custom(
            args.from_date.as_deref().unwrap_or(""),
            args.to_date.as_deref().unwrap_or(""),
        );
    }

    let statuses: SetFilter<Status> = if args.statuses.is_empty() {
        SetFilter::Unrestricted
    } else {
        args.statuses
            .iter()
            .filter_map(|s| match s.parse::<Status>() {
                Ok(status) => Some(status),
                Err(e) => {
                    log::warn!("ignoring status filter: {e}");
                    None
                }
            })
            .collect()
    };

    FilterSpec {
        search: Search::new(args.search.clone().unwrap_or_default(), mode),
        account_status: args
            .account_status
            .as_deref()
            .map(AccountStatusFilter::from_label)
            .unwrap_or_default(),
        risk: args
            .risk
            .as_deref()
            .map(RiskFilter::from_label)
            .unwrap_or_default(),
        signup_range,
        categories: to_set(&args.categories),
        assignees: to_set(&args.assignees),
        statuses,
    }
}

fn to_set(values: &[String]) -> SetFilter<String> {
    if values.is_empty() {
        SetFilter::Unrestricted
    } else {
        values.iter().cloned().collect()
    }
}

fn status_cell(status: Status) -> Cell {
    match status {
        Status::Flagged => Cell::new(status.label().red().bold()),
        Status::Active => Cell::new(status.label().green()),
        Status::Closed => Cell::new(status.label().dimmed()),
        Status::Unset => Cell::new(status.label()),
    }
}

fn due_cells(row: &RowView) -> (Cell, Cell) {
    match row.due {
        Some(due) => {
            let left = days_left(due.days_left);
            let left = if due.days_left <= 3 {
                left.yellow().to_string()
            } else {
                left
            };
            (Cell::new(short_date(due.due)), Cell::new(left))
        }
        None => (Cell::new(DASH), Cell::new("")),
    }
}

pub fn run(args: &RecordsArgs) -> Result<()> {
    let settings = load_settings();
    let conn = open_db()?;
    let store = Store::new(&conn);
    let records = load_records(&store);

    let spec = filter_spec(args);
    let page_size = args.page_size.unwrap_or(settings.page_size);
    let view = build(&records, &spec, args.page, page_size, Local::now().naive_local());

    let desc = spec.describe();
    if desc.is_empty() {
        println!("Records (all)");
    } else {
        println!("Records ({desc})");
    }

    if view.rows.is_empty() {
        println!("No records match your filters.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Business Name",
        "Transaction Date",
        "Category",
        "Assigned To",
        "Signup Date",
        "Status",
        "Next Payment",
        "Days Left",
    ]);
    for row in &view.rows {
        let r = &row.record;
        let (due, left) = due_cells(row);
        table.add_row(vec![
            Cell::new(&r.business),
            Cell::new(date_text(&r.transaction_date)),
            Cell::new(&r.category),
            Cell::new(&r.assignee),
            Cell::new(date_text(&r.signup_date)),
            status_cell(r.status),
            due,
            left,
        ]);
    }
    println!("{table}");

    let (first, last) = view.showing;
    println!(
        "Showing {first}-{last} of {} records ({} total), page {}/{}",
        view.matching, view.total, view.page, view.total_pages
    );
    Ok(())
}

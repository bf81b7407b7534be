use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::months::{self, RecentMonths};
use crate::types::{ColumnSpec, DisplayRow, RosterMember, UtilisationTable};
use crate::util;

pub fn column_schema(months: &RecentMonths) -> Vec<ColumnSpec> {
    let col = |key: &'static str, header: &str, width: u16| ColumnSpec {
        key,
        header: header.to_string(),
        width,
    };
    vec![
        col("person", "Person", 220),
        col("past12Months", "Past 12 months", 130),
        col("y2d", "Y2D", 80),
        col("may", months.first, 100),
        col("june", months.second, 100),
        col("july", months.third, 100),
        col("netEarningsPrevMonth", "Net earnings prev. month", 160),
    ]
}

pub fn build_rows(
    roster: &[RosterMember],
    months: &RecentMonths,
    prev_month: &str,
) -> Vec<DisplayRow> {
    roster
        .iter()
        .filter(|m| m.record().is_active())
        .map(|m| build_row(m, months, prev_month))
        .collect()
}

fn build_row(member: &RosterMember, months: &RecentMonths, prev_month: &str) -> DisplayRow {
    let record = member.record();
    let utilisation = record.workforce_utilisation.as_ref();
    DisplayRow {
        person: record.display_name(),
        past12_months: util::format_percent(
            utilisation
                .and_then(|u| u.utilisation_rate_last_twelve_months.as_ref())
                .and_then(|v| v.as_f64()),
        ),
        y2d: util::format_percent(
            utilisation
                .and_then(|u| u.utilisation_rate_year_to_date.as_ref())
                .and_then(|v| v.as_f64()),
        ),
        may: month_rate(member, months.first),
        june: month_rate(member, months.second),
        july: month_rate(member, months.third),
        net_earnings_prev_month: net_earnings(member, prev_month),
    }
}

fn month_rate(member: &RosterMember, month: &str) -> String {
    let rate = member
        .record()
        .monthly_breakdown()
        .iter()
        .find(|entry| {
            entry
                .month
                .as_deref()
                .map_or(false, |m| m.trim().eq_ignore_ascii_case(month))
        })
        .and_then(|entry| entry.utilisation_rate.as_ref())
        .and_then(|v| v.as_f64());
    util::format_percent(rate)
}

fn net_earnings(member: &RosterMember, prev_month: &str) -> String {
    let line = member.monthly_cost_lines().iter().find(|line| {
        line.month
            .as_deref()
            .map_or(false, |m| m.trim() == prev_month)
    });
    match line {
        // No line for the month means nothing was earned or spent.
        None => util::format_currency(Some(0.0)),
        Some(line) => util::format_currency(
            line.costs
                .as_ref()
                .and_then(|c| c.as_f64())
                .map(|v| member.net_amount(v)),
        ),
    }
}

pub fn generate_table(roster: &[RosterMember], today: NaiveDate) -> UtilisationTable {
    let months = months::resolve_months(roster, today);
    let prev_month = util::previous_month_key(today);
    UtilisationTable {
        months,
        columns: column_schema(&months),
        rows: build_rows(roster, &months, &prev_month),
    }
}

// One-slot cache keyed by dataset identity and evaluation date, so repeated
// renders of the same roster reuse the derived table.
type CacheKey = (usize, usize, NaiveDate);

static TABLE_CACHE: Lazy<Mutex<Option<(CacheKey, Arc<UtilisationTable>)>>> =
    Lazy::new(|| Mutex::new(None));

pub fn cached_table(roster: &[RosterMember], today: NaiveDate) -> Arc<UtilisationTable> {
    let key: CacheKey = (roster.as_ptr() as usize, roster.len(), today);
    let mut slot = TABLE_CACHE.lock().unwrap();
    if let Some((cached_key, table)) = slot.as_ref() {
        if *cached_key == key {
            return Arc::clone(table);
        }
    }
    let table = Arc::new(generate_table(roster, today));
    *slot = Some((key, Arc::clone(&table)));
    table
}

// Resolution of the three report months.
//
// The roster carries per-person monthly utilisation breakdowns keyed by
// English month names. The report prefers months found in the data itself
// and only falls back to the system clock when no breakdown is complete
// enough to be trusted.
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::types::RosterMember;

/// Canonical English month names in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The three months the report columns cover, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecentMonths {
    pub first: &'static str,
    pub second: &'static str,
    pub third: &'static str,
}

fn month_index(name: &str) -> Option<usize> {
    let name = name.trim();
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
}

/// Pick the three report months from the roster.
///
/// Scans members in source order and stops at the first monthly breakdown
/// that names at least three distinct canonical months. Names are
/// deduplicated case-insensitively and ordered January to December; the
/// latest three win. Names that are not canonical months do not count.
/// Without a qualifying breakdown the result is [`fallback_months`].
pub fn resolve_months(roster: &[RosterMember], today: NaiveDate) -> RecentMonths {
    for member in roster {
        let breakdown = member.record().monthly_breakdown();
        if breakdown.len() < 3 {
            continue;
        }
        let mut seen = [false; 12];
        for entry in breakdown {
            if let Some(idx) = entry.month.as_deref().and_then(month_index) {
                seen[idx] = true;
            }
        }
        let distinct: Vec<usize> = (0..12).filter(|i| seen[*i]).collect();
        if distinct.len() < 3 {
            continue;
        }
        let tail = &distinct[distinct.len() - 3..];
        return RecentMonths {
            first: MONTH_NAMES[tail[0]],
            second: MONTH_NAMES[tail[1]],
            third: MONTH_NAMES[tail[2]],
        };
    }
    fallback_months(today)
}

/// The three calendar months before `today`'s month, oldest first.
pub fn fallback_months(today: NaiveDate) -> RecentMonths {
    let m0 = today.month0() as usize;
    let back = |n: usize| MONTH_NAMES[(m0 + 12 - n) % 12];
    RecentMonths {
        first: back(3),
        second: back(2),
        third: back(1),
    }
}

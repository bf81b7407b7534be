use serde::{Deserialize, Serialize};

use crate::months::RecentMonths;
use crate::util;

#[derive(Debug, Deserialize)]
pub struct RawEntry {
    pub employee: Option<PersonRecord>,
    pub external: Option<PersonRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonRecord {
    pub status: Option<String>,
    pub name: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    #[serde(rename = "workforceUtilisation")]
    pub workforce_utilisation: Option<WorkforceUtilisation>,
    #[serde(rename = "costsByMonth")]
    pub costs_by_month: Option<CostsByMonth>,
}

impl PersonRecord {
    pub fn is_active(&self) -> bool {
        self.status
            .as_deref()
            .map_or(false, |s| s.eq_ignore_ascii_case("active"))
    }

    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref() {
            let name = name.trim();
            if !name.is_empty() {
                return name.to_string();
            }
        }
        format!(
            "{} {}",
            self.firstname.as_deref().unwrap_or(""),
            self.lastname.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }

    pub fn monthly_breakdown(&self) -> &[MonthlyRate] {
        self.workforce_utilisation
            .as_ref()
            .map(|u| u.last_three_months_individually.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkforceUtilisation {
    #[serde(rename = "utilisationRateLastTwelveMonths")]
    pub utilisation_rate_last_twelve_months: Option<RawNumber>,
    #[serde(rename = "utilisationRateYearToDate")]
    pub utilisation_rate_year_to_date: Option<RawNumber>,
    #[serde(rename = "lastThreeMonthsIndividually", default)]
    pub last_three_months_individually: Vec<MonthlyRate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyRate {
    pub month: Option<String>,
    #[serde(rename = "utilisationRate")]
    pub utilisation_rate: Option<RawNumber>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostsByMonth {
    #[serde(rename = "potentialEarningsByMonth", default)]
    pub potential_earnings_by_month: Vec<CostLine>,
    #[serde(rename = "costsByMonth", default)]
    pub costs_by_month: Vec<CostLine>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CostLine {
    pub month: Option<String>,
    pub costs: Option<RawNumber>,
}

// Numeric fields arrive either as JSON numbers or as quoted strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawNumber::Number(n) if n.is_finite() => Some(*n),
            RawNumber::Number(_) => None,
            RawNumber::Text(s) => util::parse_f64_safe(s),
        }
    }
}

#[derive(Debug, Clone)]
pub enum RosterMember {
    Employee(PersonRecord),
    External(PersonRecord),
}

impl RosterMember {
    pub fn record(&self) -> &PersonRecord {
        match self {
            RosterMember::Employee(r) => r,
            RosterMember::External(r) => r,
        }
    }

    pub fn monthly_cost_lines(&self) -> &[CostLine] {
        match self {
            RosterMember::Employee(r) => r
                .costs_by_month
                .as_ref()
                .map(|c| c.potential_earnings_by_month.as_slice())
                .unwrap_or(&[]),
            RosterMember::External(r) => r
                .costs_by_month
                .as_ref()
                .map(|c| c.costs_by_month.as_slice())
                .unwrap_or(&[]),
        }
    }

    pub fn net_amount(&self, costs: f64) -> f64 {
        match self {
            RosterMember::Employee(_) => costs,
            RosterMember::External(_) => -costs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    pub person: String,
    #[serde(rename = "past12Months")]
    pub past12_months: String,
    pub y2d: String,
    pub may: String,
    pub june: String,
    pub july: String,
    #[serde(rename = "netEarningsPrevMonth")]
    pub net_earnings_prev_month: String,
}

impl DisplayRow {
    pub fn cells(&self) -> [&str; 7] {
        [
            self.person.as_str(),
            self.past12_months.as_str(),
            self.y2d.as_str(),
            self.may.as_str(),
            self.june.as_str(),
            self.july.as_str(),
            self.net_earnings_prev_month.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub header: String,
    pub width: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct UtilisationTable {
    pub months: RecentMonths,
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<DisplayRow>,
}

use crate::types::{RawEntry, RosterMember};
use once_cell::sync::Lazy;

#[derive(Debug, Clone, Default)]
pub struct RosterReport {
    pub total_entries: usize,
    pub employees: usize,
    pub externals: usize,
    pub invalid_entries: usize,
}

/// Roster bundled with the binary, parsed once on first access.
pub static ROSTER: Lazy<(Vec<RosterMember>, RosterReport)> = Lazy::new(|| {
    parse_roster(include_str!("../data/workforce.json")).unwrap_or_else(|e| {
        eprintln!("Failed to parse bundled roster: {}", e);
        (Vec::new(), RosterReport::default())
    })
});

/// Parse a roster JSON document into typed members.
///
/// Every entry wraps its payload under an `employee` or `external` key; the
/// wrapper decides the member kind. An entry carrying both keys counts as an
/// employee, an entry carrying neither is dropped and tallied in the report.
pub fn parse_roster(json: &str) -> Result<(Vec<RosterMember>, RosterReport), serde_json::Error> {
    let entries: Vec<RawEntry> = serde_json::from_str(json)?;
    let mut report = RosterReport {
        total_entries: entries.len(),
        ..RosterReport::default()
    };
    let mut members = Vec::with_capacity(entries.len());
    for entry in entries {
        match (entry.employee, entry.external) {
            (Some(record), _) => {
                report.employees += 1;
                members.push(RosterMember::Employee(record));
            }
            (None, Some(record)) => {
                report.externals += 1;
                members.push(RosterMember::External(record));
            }
            (None, None) => report.invalid_entries += 1,
        }
    }
    Ok((members, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_without_a_payload_are_dropped() {
        let json = r#"[
            { "employee": { "name": "A", "status": "active" } },
            {},
            { "external": { "name": "B", "status": "active" } },
            { "comment": "stray entry" }
        ]"#;
        let (members, report) = parse_roster(json).unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(report.total_entries, 4);
        assert_eq!(report.employees, 1);
        assert_eq!(report.externals, 1);
        assert_eq!(report.invalid_entries, 2);
    }

    #[test]
    fn an_entry_with_both_payloads_counts_as_employee() {
        let json = r#"[
            {
                "employee": { "name": "Twice Listed", "status": "active" },
                "external": { "name": "Twice Listed", "status": "active" }
            }
        ]"#;
        let (members, report) = parse_roster(json).unwrap();
        assert!(matches!(members[0], RosterMember::Employee(_)));
        assert_eq!(report.employees, 1);
        assert_eq!(report.externals, 0);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"[
            {
                "employee": {
                    "id": 7,
                    "team": "Platform",
                    "name": "D",
                    "status": "active"
                }
            }
        ]"#;
        let (members, report) = parse_roster(json).unwrap();
        assert_eq!(report.employees, 1);
        assert_eq!(members[0].record().display_name(), "D");
    }

    #[test]
    fn the_bundled_roster_parses() {
        let (members, report) = &*ROSTER;
        assert!(!members.is_empty());
        assert_eq!(
            report.employees + report.externals + report.invalid_entries,
            report.total_entries
        );
    }
}

// Entry point and high-level flow.
//
// The binary derives the workforce utilisation overview from the bundled
// roster in a single pass:
// - parse the roster once, printing load diagnostics,
// - resolve the three report months and build the display rows,
// - print a markdown preview and export the table as CSV and JSON.
mod loader;
mod months;
mod output;
mod reports;
mod types;
mod util;

use chrono::Local;

fn main() {
    let (roster, report) = &*loader::ROSTER;

    println!(
        "Processing roster... ({} entries loaded, {} workforce records)",
        util::format_int(report.total_entries as i64),
        util::format_int((report.employees + report.externals) as i64)
    );
    if report.invalid_entries > 0 {
        println!(
            "Note: {} entries skipped (neither employee nor external payload).",
            util::format_int(report.invalid_entries as i64)
        );
    }
    println!(
        "Info: {} employees, {} external hires.",
        util::format_int(report.employees as i64),
        util::format_int(report.externals as i64)
    );
    println!("");

    let today = Local::now().date_naive();
    let table = reports::cached_table(roster, today);

    println!("Workforce Utilisation Overview");
    println!(
        "(Utilisation {} to {}, net earnings for {})\n",
        table.months.first,
        table.months.third,
        util::previous_month_key(today)
    );
    output::preview_table(&table);
    println!(
        "{} of {} records active and listed.",
        util::format_int(table.rows.len() as i64),
        util::format_int(roster.len() as i64)
    );

    let csv_file = "workforce_utilisation.csv";
    if let Err(e) = output::write_csv(csv_file, &table.rows) {
        eprintln!("Write error: {}", e);
    }
    let json_file = "workforce_utilisation.json";
    if let Err(e) = output::write_json(json_file, table.as_ref()) {
        eprintln!("Write error: {}", e);
    }
    println!("(Full table exported to {} and {})", csv_file, json_file);
}

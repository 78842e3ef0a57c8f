//! Empirical trait frequencies printed after a run

use crate::sampling::frequency::FrequencyTables;

/// Format every category's observed frequencies over `total` items
///
/// Each category is a blank line, its name, then one `value: share` line per
/// value in catalog order.
pub fn format_report(tables: &FrequencyTables, total: usize) -> String {
    let mut report = String::new();
    for table in tables.tables() {
        report.push_str(&format!("\n{}\n", table.category()));
        for (value, share) in table.frequencies(total) {
            report.push_str(&format!("{value}: {share}\n"));
        }
    }
    report
}

/// Print the frequency report to stdout
// Allow print: the report is the command's output
#[allow(clippy::print_stdout)]
pub fn print_report(tables: &FrequencyTables, total: usize) {
    print!("{}", format_report(tables, total));
}

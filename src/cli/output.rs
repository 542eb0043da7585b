//! Output formatting utilities

use crate::domain::Report;

/// Format a report for display.
///
/// Two summary lines, then one `<tag> <count>` line per entry in the
/// report's current order.
pub fn format_report(report: &Report) -> String {
    let mut output = String::new();
    output.push_str(&format!("userChats length: {}\n", report.record_count()));
    output.push_str(&format!("unique tags: {}\n", report.unique_tag_count()));
    for (tag, count) in report.entries() {
        output.push_str(&format!("{} {}\n", tag, count));
    }
    output
}

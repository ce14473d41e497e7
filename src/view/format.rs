use chrono::{Datelike, NaiveDate};

/// Week label for listings, e.g. "3 - 7 February, 2025". The month is named
/// once when both dates share it.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    let start_month = start.format("%B");
    let end_month = end.format("%B");
    if start.month() == end.month() && start.year() == end.year() {
        format!("{} - {} {}, {}", start.day(), end.day(), end_month, end.year())
    } else {
        format!(
            "{} {} - {} {}, {}",
            start.day(),
            start_month,
            end.day(),
            end_month,
            end.year()
        )
    }
}

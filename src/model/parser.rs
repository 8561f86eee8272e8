// File: ./src/model/parser.rs
// Date handling for sort order
use crate::model::item::Entry;
use chrono::NaiveDate;

impl Entry {
    /// Sort key for newest-first ordering. An entry without a parseable
    /// `YYYY-MM-DD` date gets the minimum date so it lands after every
    /// dated entry. Never fails.
    pub fn sort_date(&self) -> NaiveDate {
        self.date
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
            .unwrap_or(NaiveDate::MIN)
    }
}

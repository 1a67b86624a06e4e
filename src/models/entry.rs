use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One recorded (date, minutes-studied) observation.
/// Rows are insertion-ordered in the study log; duplicate dates are allowed
/// and never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "Date")]
    pub date: NaiveDate, // ⇔ study_log.csv "Date" (TEXT "YYYY-MM-DD")
    #[serde(rename = "Minutes")]
    pub minutes: u32, // ⇔ study_log.csv "Minutes" (INT)
}

impl Entry {
    pub fn new(date: NaiveDate, minutes: u32) -> Self {
        Self { date, minutes }
    }

    /// Entry stamped with today's local date.
    pub fn today(minutes: u32) -> Self {
        Self::new(Local::now().date_naive(), minutes)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

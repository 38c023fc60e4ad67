use chrono::NaiveDate;
use thiserror::Error;

/// Date format used by the archive in file names (e.g., "2020-01-01").
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("show name must not be empty")]
    EmptyShow,

    #[error("date must not be empty")]
    EmptyDate,
}

/// What the operator asked for: one show on one date.
///
/// The show name doubles as a case-insensitive regex pattern when the
/// schedule page is searched. The date is passed through to the archive
/// untouched; it is only checked loosely so a typo can be flagged in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowRequest {
    pub show: String,
    pub date: String,
}

impl ShowRequest {
    pub fn new(show: impl Into<String>, date: impl Into<String>) -> Result<Self, RequestError> {
        let show = show.into();
        let date = date.into();
        if show.trim().is_empty() {
            return Err(RequestError::EmptyShow);
        }
        if date.trim().is_empty() {
            return Err(RequestError::EmptyDate);
        }
        Ok(Self {
            show: show.trim().to_string(),
            date: date.trim().to_string(),
        })
    }

    /// The date as a calendar date, if it is in `YYYY-MM-DD` form.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Local file name for the downloaded show: `<lowerCamelShow>_<date>.mp3`.
    pub fn output_filename(&self) -> String {
        format!("{}_{}.mp3", crate::naming::to_lower_camel_case(&self.show), self.date)
    }
}

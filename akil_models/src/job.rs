use chrono::{DateTime, Utc};
use url::Url;

use crate::{macros::nutype_string, SearchTerm};

nutype_string!(JobId(validate(len_char_min = 1, len_char_max = 256)));
nutype_string!(JobTitle(validate(len_char_max = 512)));

/// A job posting as returned by the opportunity list endpoint. Immutable once
/// fetched for a given page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub title: JobTitle,
    pub description: String,
    pub org_name: String,
    /// Set-like, order irrelevant.
    pub categories: Vec<String>,
    pub op_type: String,
    /// Ordered segments, comma-joined for display.
    pub location: Vec<String>,
    pub logo_url: Option<Url>,
}

impl Job {
    pub fn location_display(&self) -> String {
        self.location.join(", ")
    }

    /// Case-insensitive substring match on the title.
    pub fn title_matches(&self, query: &SearchTerm) -> bool {
        self.title
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// The extended posting returned by the single-opportunity endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetail {
    pub job: Job,
    /// Newline-separated list in the remote representation.
    pub responsibilities: String,
    pub ideal_candidate: String,
    pub when_and_where: String,
    pub required_skills: Vec<String>,
    pub date_posted: Option<DateTime<Utc>>,
    pub deadline: Option<DateTime<Utc>>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

use chrono::{NaiveDate, NaiveDateTime, TimeZone};
use std::fmt;

use super::aggregator::Analysis;
use crate::config::Labels;
use crate::error::AnalysisError;

/// Console summary of an analysis, with dates in a chosen time zone
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub subject: String,
    pub chat: String,
    pub marker_name: String,
    pub total_count: usize,
    pub total_occurrences: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    /// Calendar days between first and last date
    pub span_days: i64,
    /// None when everything happened on one calendar day
    pub daily_average: Option<f64>,
    pub peak_count: usize,
    pub peak_at: NaiveDateTime,
}

impl Report {
    pub fn build<Tz: TimeZone>(
        analysis: &Analysis,
        labels: &Labels,
        tz: &Tz,
    ) -> Result<Self, AnalysisError> {
        let no_occurrences = || AnalysisError::NoOccurrences {
            subject: labels.subject.clone(),
        };

        let (first, last) = analysis.time_range().ok_or_else(no_occurrences)?;
        let peak = analysis.max_count_timestamp.ok_or_else(no_occurrences)?;

        let first_date = first.with_timezone(tz).date_naive();
        let last_date = last.with_timezone(tz).date_naive();
        let span_days = last_date.signed_duration_since(first_date).num_days();

        let daily_average = if span_days > 0 {
            Some(analysis.total_count as f64 / span_days as f64)
        } else {
            None
        };

        Ok(Self {
            subject: labels.subject.clone(),
            chat: labels.chat.clone(),
            marker_name: labels.marker_name.clone(),
            total_count: analysis.total_count,
            total_occurrences: analysis.total_occurrences(),
            first_date,
            last_date,
            span_days,
            daily_average,
            peak_count: analysis.max_count,
            peak_at: peak.with_timezone(tz).naive_local(),
        })
    }

    /// "2024-01-02 to 2024-05-01"
    pub fn date_range(&self) -> String {
        format!("{} to {}", self.first_date, self.last_date)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} has used the {} {} times in the {} chat from {}",
            self.subject,
            self.marker_name,
            self.total_count,
            self.chat,
            self.date_range()
        )?;

        match self.daily_average {
            Some(avg) => writeln!(f, "That's an average of {:.2} times a day!", avg)?,
            None => writeln!(
                f,
                "All of them were on {}, so there is no daily average.",
                self.first_date
            )?,
        }

        write!(
            f,
            "The maximum number of {}s in a single message is: {} on: {}",
            self.marker_name,
            self.peak_count,
            self.peak_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

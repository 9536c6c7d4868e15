use chrono::{DateTime, Utc};

use super::matcher::Matcher;
use crate::error::AnalysisError;
use crate::export::Message;

/// Aggregates over every qualifying message, computed in one pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    /// Qualifying messages (not raw occurrences)
    pub total_count: usize,
    /// Highest occurrence count in a single message
    pub max_count: usize,
    /// First message to reach `max_count`
    pub max_count_timestamp: Option<DateTime<Utc>>,
    pub first_timestamp: Option<DateTime<Utc>>,
    pub last_timestamp: Option<DateTime<Utc>>,
    /// One entry per occurrence, so a message with N markers appears N times
    pub occurrence_timestamps: Vec<DateTime<Utc>>,
    /// One entry per qualifying message
    pub per_message_counts: Vec<usize>,
}

impl Analysis {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    pub fn total_occurrences(&self) -> usize {
        self.occurrence_timestamps.len()
    }

    /// First and last qualifying timestamps, if any message qualified
    pub fn time_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.first_timestamp?, self.last_timestamp?))
    }

    fn record(mut self, sent_at: DateTime<Utc>, occurrences: usize) -> Self {
        self.first_timestamp = Some(self.first_timestamp.map_or(sent_at, |t| t.min(sent_at)));
        self.last_timestamp = Some(self.last_timestamp.map_or(sent_at, |t| t.max(sent_at)));

        self.total_count += 1;

        if occurrences > self.max_count {
            self.max_count = occurrences;
            self.max_count_timestamp = Some(sent_at);
        }

        self.occurrence_timestamps
            .extend(std::iter::repeat(sent_at).take(occurrences));
        self.per_message_counts.push(occurrences);

        self
    }
}

/// Fold the messages into an Analysis
pub fn analyze<'a, I>(messages: I, matcher: &Matcher) -> Result<Analysis, AnalysisError>
where
    I: IntoIterator<Item = &'a Message>,
{
    let analysis = messages
        .into_iter()
        .try_fold(
            Analysis::default(),
            |acc, message| -> Result<Analysis, AnalysisError> {
                match matcher.occurrences(message) {
                    Some(n) if n > 0 => Ok(acc.record(message.sent_at()?, n)),
                    _ => Ok(acc),
                }
            },
        )?;

    tracing::info!(
        sender = matcher.sender(),
        messages = analysis.total_count,
        occurrences = analysis.total_occurrences(),
        "analysis complete"
    );

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::matcher::{Marker, SOB_MARKER};

    const DEVAN: &str = "Devan  :)";

    fn sobs(n: usize) -> String {
        format!("omg {}", SOB_MARKER.repeat(n))
    }

    fn matcher() -> Matcher {
        Matcher::new(DEVAN, Marker::default())
    }

    fn ts(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn test_two_sources_scenario() {
        let t1 = 1_700_000_000_000;
        let t2 = 1_700_100_000_000;
        let first = vec![Message::new(DEVAN, Some(&sobs(2)), t1)];
        let second = vec![Message::new(DEVAN, Some(&sobs(3)), t2)];
        let messages: Vec<Message> = first.into_iter().chain(second).collect();

        let analysis = analyze(&messages, &matcher()).unwrap();

        assert_eq!(analysis.total_count, 2);
        assert_eq!(analysis.max_count, 3);
        assert_eq!(analysis.max_count_timestamp, Some(ts(t2)));
        assert_eq!(
            analysis.occurrence_timestamps,
            vec![ts(t1), ts(t1), ts(t2), ts(t2), ts(t2)]
        );
        assert_eq!(analysis.per_message_counts, vec![2, 3]);
        assert_eq!(analysis.time_range(), Some((ts(t1), ts(t2))));
    }

    #[test]
    fn test_invariants_hold() {
        let messages = vec![
            Message::new(DEVAN, Some(&sobs(1)), 5_000),
            Message::new("Yunfei", Some(&sobs(9)), 1_000),
            Message::new(DEVAN, None, 2_000),
            Message::new(DEVAN, Some("no tears"), 3_000),
            Message::new(DEVAN, Some(&sobs(4)), 9_000),
            Message::new(DEVAN, Some(&sobs(2)), 4_000),
        ];

        let a = analyze(&messages, &matcher()).unwrap();

        assert_eq!(a.per_message_counts.len(), a.total_count);
        assert_eq!(a.per_message_counts.iter().sum::<usize>(), a.total_occurrences());
        assert_eq!(a.total_occurrences(), 7);
        assert_eq!(Some(&a.max_count), a.per_message_counts.iter().max());
        assert_eq!(a.max_count_timestamp, Some(ts(9_000)));
        assert!(a.first_timestamp <= a.last_timestamp);
        assert_eq!(a.first_timestamp, Some(ts(4_000)));
        assert_eq!(a.last_timestamp, Some(ts(9_000)));
    }

    #[test]
    fn test_ties_keep_earlier_message() {
        let messages = vec![
            Message::new(DEVAN, Some(&sobs(3)), 2_000),
            Message::new(DEVAN, Some(&sobs(3)), 1_000),
        ];
        let a = analyze(&messages, &matcher()).unwrap();
        assert_eq!(a.max_count_timestamp, Some(ts(2_000)));
    }

    #[test]
    fn test_other_senders_never_count() {
        let messages = vec![
            Message::new("Yunfei", Some(&sobs(5)), 1_000),
            Message::new("devan  :)", Some(&sobs(5)), 2_000),
        ];
        let a = analyze(&messages, &matcher()).unwrap();
        assert_eq!(a, Analysis::default());
        assert!(a.is_empty());
        assert_eq!(a.time_range(), None);
    }

    #[test]
    fn test_invalid_timestamp_only_checked_when_qualifying() {
        let skipped = vec![Message::new("Yunfei", Some(&sobs(1)), i64::MAX)];
        assert!(analyze(&skipped, &matcher()).is_ok());

        let bad = vec![Message::new(DEVAN, Some(&sobs(1)), i64::MAX)];
        assert_eq!(
            analyze(&bad, &matcher()),
            Err(AnalysisError::InvalidTimestamp(i64::MAX))
        );
    }
}

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Utc, Weekday};

const DAY_SECS: f64 = 86_400.0;

/// One equal-width bin, bounds in unix seconds
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Occurrence timestamps binned over their full range
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bin timestamps into `bins` equal-width bins between the earliest and
    /// latest one. The last bin is closed on the right. A single distinct
    /// instant gets a one-day window centred on it.
    pub fn from_timestamps(timestamps: &[DateTime<Utc>], bins: usize) -> Self {
        let (Some(min), Some(max)) = (timestamps.iter().min(), timestamps.iter().max()) else {
            return Self::default();
        };
        if bins == 0 {
            return Self::default();
        }

        let (min, max) = (unix_secs(min), unix_secs(max));
        let (lo, hi) = if max > min {
            (min, max)
        } else {
            (min - DAY_SECS / 2.0, max + DAY_SECS / 2.0)
        };
        let width = (hi - lo) / bins as f64;

        let mut counts = vec![0usize; bins];
        for ts in timestamps {
            let idx = ((unix_secs(ts) - lo) / width) as usize;
            counts[idx.min(bins - 1)] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                start: lo + i as f64 * width,
                end: if i + 1 == bins { hi } else { lo + (i + 1) as f64 * width },
                count,
            })
            .collect();

        Self { bins }
    }

    /// Covered range in unix seconds
    pub fn range(&self) -> Option<(f64, f64)> {
        Some((self.bins.first()?.start, self.bins.last()?.end))
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

fn unix_secs(ts: &DateTime<Utc>) -> f64 {
    ts.timestamp_millis() as f64 / 1000.0
}

/// An x-axis date tick, positioned at local midnight
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub at: f64,
    pub date: NaiveDate,
}

impl Tick {
    pub fn label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Every `interval_weeks`-th `weekday` from the first one on or after `start`
pub fn weekday_ticks(
    start: NaiveDate,
    end: NaiveDate,
    weekday: Weekday,
    interval_weeks: u32,
) -> Vec<NaiveDate> {
    if interval_weeks == 0 || start > end {
        return Vec::new();
    }

    let offset = (7 + weekday.num_days_from_monday() - start.weekday().num_days_from_monday()) % 7;
    let step = Days::new(7 * u64::from(interval_weeks));

    std::iter::successors(start.checked_add_days(Days::new(u64::from(offset))), |d| {
        d.checked_add_days(step)
    })
    .take_while(|d| *d <= end)
    .collect()
}

/// Weekday ticks that fall inside the histogram's range, in `tz`
pub fn date_ticks<Tz: TimeZone>(
    histogram: &Histogram,
    weekday: Weekday,
    interval_weeks: u32,
    tz: &Tz,
) -> Vec<Tick> {
    let Some((lo, hi)) = histogram.range() else {
        return Vec::new();
    };

    let local_date = |secs: f64| {
        DateTime::from_timestamp(secs.floor() as i64, 0).map(|dt| dt.with_timezone(tz).date_naive())
    };
    let (Some(start), Some(end)) = (local_date(lo), local_date(hi)) else {
        return Vec::new();
    };

    weekday_ticks(start, end, weekday, interval_weeks)
        .into_iter()
        .filter_map(|date| {
            let midnight = tz
                .from_local_datetime(&date.and_hms_opt(0, 0, 0)?)
                .earliest()?;
            let at = midnight.timestamp() as f64;
            (lo..=hi).contains(&at).then_some(Tick { at, date })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bins_cover_range_and_count_everything() {
        let stamps: Vec<_> = [0, 10, 10, 55, 99, 100].into_iter().map(ts).collect();
        let hist = Histogram::from_timestamps(&stamps, 10);

        assert_eq!(hist.bins.len(), 10);
        assert_eq!(hist.range(), Some((0.0, 100.0)));
        assert_eq!(hist.total(), 6);
        assert_eq!(hist.bins[0].count, 1);
        assert_eq!(hist.bins[1].count, 2);
        assert_eq!(hist.bins[5].count, 1);
        // 99 and the maximum both land in the closed last bin
        assert_eq!(hist.bins[9].count, 2);
        assert_eq!(hist.max_count(), 2);
    }

    #[test]
    fn test_single_instant_gets_a_day_window() {
        let stamps = vec![ts(1_000_000); 3];
        let hist = Histogram::from_timestamps(&stamps, 50);

        let (lo, hi) = hist.range().unwrap();
        assert_eq!(hi - lo, DAY_SECS);
        assert_eq!(hist.total(), 3);
        assert_eq!(hist.max_count(), 3);
    }

    #[test]
    fn test_empty_histogram() {
        let hist = Histogram::from_timestamps(&[], 50);
        assert!(hist.bins.is_empty());
        assert_eq!(hist.range(), None);
        assert_eq!(hist.max_count(), 0);
    }

    #[test]
    fn test_every_second_tuesday() {
        // 2024-05-01 is a Wednesday
        let ticks = weekday_ticks(date(2024, 5, 1), date(2024, 6, 30), Weekday::Tue, 2);
        assert_eq!(
            ticks,
            vec![date(2024, 5, 7), date(2024, 5, 21), date(2024, 6, 4), date(2024, 6, 18)]
        );
    }

    #[test]
    fn test_ticks_start_on_matching_day() {
        let ticks = weekday_ticks(date(2024, 5, 7), date(2024, 5, 7), Weekday::Tue, 1);
        assert_eq!(ticks, vec![date(2024, 5, 7)]);
        assert!(weekday_ticks(date(2024, 5, 8), date(2024, 5, 7), Weekday::Tue, 1).is_empty());
    }

    #[test]
    fn test_date_ticks_inside_histogram() {
        // 2024-05-01T12:00Z .. 2024-05-31T12:00Z
        let stamps = vec![ts(1_714_564_800), ts(1_717_156_800)];
        let hist = Histogram::from_timestamps(&stamps, 50);

        let ticks = date_ticks(&hist, Weekday::Tue, 2, &Utc);
        let labels: Vec<String> = ticks.iter().map(Tick::label).collect();
        assert_eq!(labels, vec!["2024-05-07", "2024-05-21"]);
        assert_eq!(ticks[0].at, 1_715_040_000.0);
    }
}

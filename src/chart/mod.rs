pub mod distribution;
pub mod histogram;

pub use distribution::{slice_at, FrequencyTable, PieSlice};
pub use histogram::{date_ticks, weekday_ticks, Histogram, HistogramBin, Tick};

use chrono::TimeZone;

use crate::analysis::Analysis;
use crate::config::ChartSettings;

/// Everything the chart view draws, computed up front
#[derive(Debug, Clone, Default)]
pub struct ChartData {
    pub histogram: Histogram,
    pub ticks: Vec<Tick>,
    pub distribution: FrequencyTable,
    pub slices: Vec<PieSlice>,
}

impl ChartData {
    pub fn build<Tz: TimeZone>(analysis: &Analysis, settings: &ChartSettings, tz: &Tz) -> Self {
        let histogram = Histogram::from_timestamps(&analysis.occurrence_timestamps, settings.bins);
        let ticks = date_ticks(
            &histogram,
            settings.tick_weekday,
            settings.tick_interval_weeks,
            tz,
        );
        let distribution = FrequencyTable::from_counts(&analysis.per_message_counts);
        let slices = distribution.pie_slices();

        Self {
            histogram,
            ticks,
            distribution,
            slices,
        }
    }
}

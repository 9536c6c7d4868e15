use std::f64::consts::TAU;

/// How many messages carried each per-message occurrence count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    /// (occurrences in a message, number of such messages), ascending,
    /// values no message had are left out
    entries: Vec<(usize, usize)>,
}

impl FrequencyTable {
    pub fn from_counts(per_message_counts: &[usize]) -> Self {
        let max = per_message_counts.iter().copied().max().unwrap_or(0);

        let mut frequency = vec![0usize; max + 1];
        for &count in per_message_counts {
            frequency[count] += 1;
        }

        let entries = frequency
            .into_iter()
            .enumerate()
            .skip(1)
            .filter(|(_, messages)| *messages > 0)
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, usize)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_messages(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Slices laid out counter-clockwise from 3 o'clock
    pub fn pie_slices(&self) -> Vec<PieSlice> {
        let total = self.total_messages();
        if total == 0 {
            return Vec::new();
        }

        let mut start = 0.0;
        let last = self.entries.len() - 1;

        self.entries
            .iter()
            .enumerate()
            .map(|(i, &(occurrences, messages))| {
                let fraction = messages as f64 / total as f64;
                let end = if i == last { TAU } else { start + fraction * TAU };
                let slice = PieSlice {
                    occurrences,
                    messages,
                    fraction,
                    start_angle: start,
                    end_angle: end,
                };
                start = end;
                slice
            })
            .collect()
    }
}

/// A pie slice; angles in radians
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Slice label: occurrences per message
    pub occurrences: usize,
    pub messages: usize,
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Index of the slice covering `angle` (any real angle, wrapped to one turn)
pub fn slice_at(slices: &[PieSlice], angle: f64) -> Option<usize> {
    let angle = angle.rem_euclid(TAU);
    slices
        .iter()
        .position(|s| angle >= s.start_angle && angle < s.end_angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_frequency_skips_missing_values() {
        let table = FrequencyTable::from_counts(&[1, 1, 3, 1, 5, 3]);
        assert_eq!(table.entries(), &[(1, 3), (3, 2), (5, 1)]);
        assert_eq!(table.total_messages(), 6);
    }

    #[test]
    fn test_empty_counts() {
        let table = FrequencyTable::from_counts(&[]);
        assert!(table.is_empty());
        assert!(table.pie_slices().is_empty());
    }

    #[test]
    fn test_slices_cover_full_turn() {
        let slices = FrequencyTable::from_counts(&[1, 1, 2, 4]).pie_slices();

        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].occurrences, 1);
        assert_eq!(slices[0].fraction, 0.5);
        assert_eq!(slices[0].start_angle, 0.0);
        assert!((slices[0].end_angle - PI).abs() < 1e-12);
        assert_eq!(slices[1].start_angle, slices[0].end_angle);
        assert_eq!(slices[2].end_angle, TAU);
        assert!((slices[2].mid_angle() - 1.75 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_slice_at() {
        let slices = FrequencyTable::from_counts(&[1, 2]).pie_slices();
        assert_eq!(slice_at(&slices, 0.1), Some(0));
        assert_eq!(slice_at(&slices, PI + 0.1), Some(1));
        assert_eq!(slice_at(&slices, -0.1), Some(1));
        assert_eq!(slice_at(&slices, TAU + 0.1), Some(0));
        assert_eq!(slice_at(&[], 1.0), None);
    }
}

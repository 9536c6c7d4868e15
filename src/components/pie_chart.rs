use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph,
    },
};

use crate::chart::{slice_at, PieSlice};
use crate::ui::{border_style, pie_layout, slice_color, title_style, Theme};

/// Half the canvas height in data units; the pie has radius 1
const Y_HALF: f64 = 1.35;
const LABEL_RADIUS: f64 = 1.18;

/// Per-message distribution as a pie with a legend
pub struct PieChart;

impl PieChart {
    pub fn render(frame: &mut Frame, area: Rect, slices: &[PieSlice], title: &str) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(false))
            .title(Span::styled(format!(" {} ", title), title_style(true)));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if slices.is_empty() {
            let msg = Paragraph::new("Nothing to plot").style(Style::default().fg(Theme::FG_DARK));
            frame.render_widget(msg, inner);
            return;
        }

        let (pie_area, legend_area) = pie_layout(inner);

        // Terminal cells are about twice as tall as wide
        let x_half = Y_HALF * f64::from(pie_area.width) / (2.0 * f64::from(pie_area.height.max(1)));
        let buckets = slice_points(slices, pie_area.width, pie_area.height, x_half);

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-x_half, x_half])
            .y_bounds([-Y_HALF, Y_HALF])
            .paint(|ctx| {
                for (i, coords) in buckets.iter().enumerate() {
                    ctx.draw(&Points {
                        coords: coords.as_slice(),
                        color: slice_color(i),
                    });
                }

                ctx.layer();

                for slice in slices {
                    let angle = slice.mid_angle();
                    ctx.print(
                        LABEL_RADIUS * angle.cos(),
                        LABEL_RADIUS * angle.sin(),
                        Span::styled(
                            slice.occurrences.to_string(),
                            Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            });
        frame.render_widget(canvas, pie_area);

        frame.render_widget(Paragraph::new(legend_lines(slices)), legend_area);
    }
}

/// Sample the unit disc at braille resolution, one bucket of points per slice
fn slice_points(slices: &[PieSlice], width: u16, height: u16, x_half: f64) -> Vec<Vec<(f64, f64)>> {
    let cols = usize::from(width) * 2;
    let rows = usize::from(height) * 4;
    let mut buckets = vec![Vec::new(); slices.len()];

    for c in 0..cols {
        let x = -x_half + (c as f64 + 0.5) / cols as f64 * 2.0 * x_half;
        for r in 0..rows {
            let y = -Y_HALF + (r as f64 + 0.5) / rows as f64 * 2.0 * Y_HALF;
            if x * x + y * y > 1.0 {
                continue;
            }
            if let Some(i) = slice_at(slices, y.atan2(x)) {
                buckets[i].push((x, y));
            }
        }
    }

    buckets
}

fn legend_lines(slices: &[PieSlice]) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(" per msg   messages", Style::default().fg(Theme::FG_DARK)),
        Line::raw(""),
    ];

    lines.extend(slices.iter().enumerate().map(|(i, slice)| {
        Line::from(vec![
            Span::styled(" ■ ", Style::default().fg(slice_color(i))),
            Span::styled(format!("{:>3}", slice.occurrences), Style::default().fg(Theme::FG)),
            Span::styled(
                format!("  {:>5} ({:>4.1}%)", slice.messages, slice.fraction * 100.0),
                Style::default().fg(Theme::FG_DARK),
            ),
        ])
    }));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::FrequencyTable;

    #[test]
    fn test_slice_points_split_by_share() {
        let slices = FrequencyTable::from_counts(&[1, 1, 1, 2]).pie_slices();
        let buckets = slice_points(&slices, 40, 20, Y_HALF);

        assert_eq!(buckets.len(), 2);
        let (big, small) = (buckets[0].len() as f64, buckets[1].len() as f64);
        let share = big / (big + small);
        assert!((share - 0.75).abs() < 0.05, "share was {share}");
        assert!(buckets.iter().flatten().all(|(x, y)| x * x + y * y <= 1.0));
    }

    #[test]
    fn test_legend_has_a_line_per_slice() {
        let slices = FrequencyTable::from_counts(&[1, 3]).pie_slices();
        let lines = legend_lines(&slices);
        assert_eq!(lines.len(), 4);
        assert!(lines[2].to_string().contains("50.0%"));
    }
}

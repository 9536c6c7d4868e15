use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
};

use crate::chart::{Histogram, Tick};
use crate::ui::{border_style, title_style, Theme};

/// Width of a "YYYY-MM-DD" label plus a gap, in cells
const TICK_LABEL_CELLS: f64 = 12.0;

/// Occurrences over time, drawn on a braille canvas
pub struct HistogramChart;

impl HistogramChart {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        histogram: &Histogram,
        ticks: &[Tick],
        title: &str,
        y_label: &str,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(true))
            .title(Span::styled(format!(" {} ", title), title_style(true)))
            .title_bottom(Line::from(" Date ").alignment(Alignment::Right));

        let Some((lo, hi)) = histogram.range() else {
            let msg = Paragraph::new("Nothing to plot")
                .style(Style::default().fg(Theme::FG_DARK))
                .block(block);
            frame.render_widget(msg, area);
            return;
        };

        let inner = block.inner(area);
        let cells = f64::from(inner.width.max(1));

        let peak = histogram.max_count().max(1) as f64;
        let top = peak * 1.15;
        let floor = -peak * 0.15;

        // Braille packs two dot columns into each cell
        let step = (hi - lo) / (cells * 2.0);
        let label_gap = (hi - lo) / cells * TICK_LABEL_CELLS;

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([lo, hi])
            .y_bounds([floor, top])
            .paint(|ctx| {
                for bin in histogram.bins.iter().filter(|b| b.count > 0) {
                    let height = bin.count as f64;
                    let mut x = bin.start;
                    while x < bin.end {
                        ctx.draw(&CanvasLine::new(x, 0.0, x, height, Theme::BAR));
                        x += step;
                    }
                }

                ctx.layer();

                // Axis and date ticks
                ctx.draw(&CanvasLine::new(lo, 0.0, hi, 0.0, Theme::AXIS));

                let mut last_label = f64::NEG_INFINITY;
                for tick in ticks {
                    ctx.draw(&CanvasLine::new(tick.at, 0.0, tick.at, floor * 0.3, Theme::AXIS));
                    if tick.at - last_label >= label_gap && tick.at + label_gap * 0.8 <= hi {
                        ctx.print(
                            tick.at,
                            floor * 0.8,
                            Span::styled(tick.label(), Style::default().fg(Theme::FG_DARK)),
                        );
                        last_label = tick.at;
                    }
                }

                ctx.print(
                    lo,
                    top,
                    Span::styled(
                        format!("{} (max {})", y_label, histogram.max_count()),
                        Style::default().fg(Theme::FG_DARK),
                    ),
                );
            });

        frame.render_widget(canvas, area);
    }
}

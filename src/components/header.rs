use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::analysis::Report;
use crate::ui::Theme;

/// Header component with title and summary stats
pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, report: &Report, marker: &str, marker_title: &str) {
        use crate::ui::layout::header_layout;

        let (title_area, stats_area) = header_layout(area);

        // Title
        let title = Paragraph::new(format!(" {} {} Tally ", marker, marker_title))
            .style(Style::default().fg(Theme::BLUE).add_modifier(Modifier::BOLD));
        frame.render_widget(title, title_area);

        let average = match report.daily_average {
            Some(avg) => format!("{:.2}/day", avg),
            None => "one day".to_string(),
        };

        let spans = vec![
            Span::styled("MSGS ", Style::default().fg(Theme::FG_DARK)),
            Span::styled(report.total_count.to_string(), Style::default().fg(Theme::GREEN)),
            Span::styled(" │ ", Style::default().fg(Theme::BORDER)),
            Span::styled(format!("{}S ", marker_title.to_uppercase()), Style::default().fg(Theme::FG_DARK)),
            Span::styled(report.total_occurrences.to_string(), Style::default().fg(Theme::GREEN)),
            Span::styled(" │ ", Style::default().fg(Theme::BORDER)),
            Span::styled("RANGE ", Style::default().fg(Theme::FG_DARK)),
            Span::styled(
                format!("{} → {}", report.first_date, report.last_date),
                Style::default().fg(Theme::FG),
            ),
            Span::styled(" │ ", Style::default().fg(Theme::BORDER)),
            Span::styled("AVG ", Style::default().fg(Theme::FG_DARK)),
            Span::styled(average, Style::default().fg(Theme::YELLOW)),
            Span::styled(" │ ", Style::default().fg(Theme::BORDER)),
            Span::styled("PEAK ", Style::default().fg(Theme::FG_DARK)),
            Span::styled(
                format!("{} @ {}", report.peak_count, report.peak_at.format("%Y-%m-%d %H:%M")),
                Style::default().fg(Theme::PEACH),
            ),
        ];

        let stats_widget = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
        frame.render_widget(stats_widget, stats_area);
    }
}

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::{centered_modal, Theme};

/// Help modal component
pub struct HelpModal;

impl HelpModal {
    pub fn render(frame: &mut Frame, area: Rect, sender: &str, marker: &str) {
        let modal_area = centered_modal(area, 50, 13);

        // Clear the background
        frame.render_widget(Clear, modal_area);

        let help_text = vec![
            Line::styled("Keyboard Shortcuts", Style::default().bold().fg(Color::Cyan)),
            Line::raw(""),
            Line::from(vec![
                Span::styled("  v      ", Style::default().fg(Color::Yellow)),
                Span::raw("Side by side / stacked charts"),
            ]),
            Line::from(vec![
                Span::styled("  ?      ", Style::default().fg(Color::Yellow)),
                Span::raw("Toggle this help"),
            ]),
            Line::from(vec![
                Span::styled("  Esc    ", Style::default().fg(Color::Yellow)),
                Span::raw("Close help / quit"),
            ]),
            Line::from(vec![
                Span::styled("  q      ", Style::default().fg(Color::Yellow)),
                Span::raw("Quit"),
            ]),
            Line::raw(""),
            Line::from(vec![
                Span::styled("  Counting ", Style::default().fg(Theme::FG_DARK)),
                Span::styled(marker.to_string(), Style::default().fg(Theme::FG)),
                Span::styled(" from ", Style::default().fg(Theme::FG_DARK)),
                Span::styled(sender.to_string(), Style::default().fg(Theme::FG)),
            ]),
            Line::raw(""),
            Line::styled("Press Esc to close", Style::default().fg(Color::DarkGray)),
        ];

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::MODAL_BORDER))
            .style(Style::default().bg(Theme::MODAL_BG));

        let paragraph = Paragraph::new(help_text).block(block);

        frame.render_widget(paragraph, modal_area);
    }
}

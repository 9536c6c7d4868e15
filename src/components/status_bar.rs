use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::ui::{key_span, key_desc_span, ChartLayout, Theme};

/// Keybinding definition
pub struct KeyBinding {
    pub key: &'static str,
    pub desc: &'static str,
}

/// Status bar component (bottom of screen) - keybindings only
pub struct StatusBar;

impl StatusBar {
    pub fn keybindings(layout: ChartLayout) -> Vec<KeyBinding> {
        let layout_desc = match layout {
            ChartLayout::SideBySide => "stack",
            ChartLayout::Stacked => "side by side",
        };

        vec![
            KeyBinding { key: "v", desc: layout_desc },
            KeyBinding { key: "?", desc: "help" },
            KeyBinding { key: "q", desc: "quit" },
        ]
    }

    pub fn render(frame: &mut Frame, area: Rect, layout: ChartLayout) {
        let mut spans: Vec<Span> = Vec::new();
        for kb in Self::keybindings(layout) {
            spans.push(key_span(kb.key));
            spans.push(key_desc_span(kb.desc));
        }

        let keys_widget = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Theme::BG_DARK))
            .alignment(Alignment::Center);
        frame.render_widget(keys_widget, area);
    }
}

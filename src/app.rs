use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{prelude::*, widgets::Block, Frame};

use crate::action::Action;
use crate::analysis::{Matcher, Report};
use crate::chart::ChartData;
use crate::components::{Header, HelpModal, HistogramChart, PieChart, StatusBar};
use crate::config::Labels;
use crate::effects::EffectManager;
use crate::ui::{chart_panes, main_layout, ChartLayout, Theme};

/// Active modal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    None,
    Help,
}

/// Chart view state
pub struct App {
    pub report: Report,
    pub charts: ChartData,
    labels: Labels,
    sender: String,
    marker: String,

    pub layout: ChartLayout,
    pub modal: ModalState,
    pub should_quit: bool,

    // Visual effects
    pub effects: EffectManager,
}

impl App {
    pub fn new(report: Report, charts: ChartData, labels: Labels, matcher: &Matcher) -> Self {
        Self {
            report,
            charts,
            labels,
            sender: matcher.sender().to_string(),
            marker: matcher.marker().display(),
            layout: ChartLayout::default(),
            modal: ModalState::None,
            should_quit: false,
            effects: EffectManager::new(),
        }
    }

    /// Convert key events to actions based on current state
    pub fn action_for_key(&self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match (key.code, self.modal) {
            (KeyCode::Esc, ModalState::Help) | (KeyCode::Char('?'), ModalState::Help) => {
                Action::CloseModal
            }
            (KeyCode::Esc, ModalState::None) | (KeyCode::Char('q'), _) => Action::Quit,
            (KeyCode::Char('?'), ModalState::None) => Action::ShowHelp,
            (KeyCode::Char('v'), _) => Action::ToggleLayout,
            _ => Action::None,
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::ToggleLayout => {
                self.layout = self.layout.toggle();
                self.effects.trigger_layout_change();
            }
            Action::ShowHelp => self.modal = ModalState::Help,
            Action::CloseModal => self.modal = ModalState::None,
            Action::Quit => self.should_quit = true,
            Action::Tick | Action::None => {}
        }
    }

    pub fn histogram_title(&self) -> String {
        format!(
            "{} {} Analysis from {}",
            self.labels.subject,
            self.labels.marker_title(),
            self.report.date_range()
        )
    }

    pub fn pie_title(&self) -> String {
        let marker = self.labels.marker_title();
        format!(
            "{} {} Analysis: # of {}s in a Single Message",
            self.labels.subject, marker, marker
        )
    }

    pub fn render(&mut self, frame: &mut Frame) {
        // Set background color
        let bg_block = Block::default().style(Style::default().bg(Theme::BG));
        frame.render_widget(bg_block, frame.area());

        let (header_area, body, footer) = main_layout(frame.area());

        Header::render(frame, header_area, &self.report, &self.marker, &self.labels.marker_title());

        let (histogram_area, pie_area) = chart_panes(body, self.layout);
        HistogramChart::render(
            frame,
            histogram_area,
            &self.charts.histogram,
            &self.charts.ticks,
            &self.histogram_title(),
            &format!("{} Quantity", self.labels.marker_title()),
        );
        PieChart::render(frame, pie_area, &self.charts.slices, &self.pie_title());

        StatusBar::render(frame, footer, self.layout);

        // Modals (rendered last, on top)
        if self.modal == ModalState::Help {
            HelpModal::render(frame, frame.area(), &self.sender, &self.marker);
        }
    }

    /// Render with visual effects
    pub fn render_with_effects(&mut self, frame: &mut Frame, elapsed: Duration) {
        self.render(frame);

        let area = frame.area();
        self.effects.process(elapsed, frame.buffer_mut(), area);

        let (_, body, _) = main_layout(area);
        self.effects.process_layout(elapsed, frame.buffer_mut(), body);
    }
}

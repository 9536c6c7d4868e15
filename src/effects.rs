use std::time::Duration;
use ratatui::prelude::*;
use tachyonfx::{fx, Effect, EffectTimer, Interpolation};

/// Manages visual effects for the chart view
pub struct EffectManager {
    /// Startup fade-in effect
    startup_fx: Option<Effect>,
    /// Flash over the body when the chart layout changes
    layout_fx: Option<Effect>,
}

impl Default for EffectManager {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectManager {
    pub fn new() -> Self {
        Self {
            startup_fx: Some(Self::create_startup_effect()),
            layout_fx: None,
        }
    }

    /// Create the initial fade-in effect for app startup
    fn create_startup_effect() -> Effect {
        fx::fade_from(
            (0, 0, 0),  // fg color as tuple
            (0, 0, 0),  // bg color as tuple
            EffectTimer::from_ms(800, Interpolation::QuadOut),
        )
    }

    fn create_layout_effect() -> Effect {
        fx::fade_from(
            (120, 80, 180),
            (0, 0, 0),
            EffectTimer::from_ms(300, Interpolation::QuadOut),
        )
    }

    /// Trigger the layout change effect
    pub fn trigger_layout_change(&mut self) {
        self.layout_fx = Some(Self::create_layout_effect());
    }

    /// Process the startup effect over the whole screen
    pub fn process(&mut self, elapsed: Duration, buf: &mut Buffer, area: Rect) {
        if let Some(ref mut fx) = self.startup_fx {
            fx.process(elapsed.into(), buf, area);
            if fx.done() {
                self.startup_fx = None;
            }
        }
    }

    /// Process the layout change effect over the chart body
    pub fn process_layout(&mut self, elapsed: Duration, buf: &mut Buffer, area: Rect) {
        if let Some(ref mut fx) = self.layout_fx {
            fx.process(elapsed.into(), buf, area);
            if fx.done() {
                self.layout_fx = None;
            }
        }
    }

    /// Whether any effect still needs frames
    pub fn is_animating(&self) -> bool {
        self.startup_fx.is_some() || self.layout_fx.is_some()
    }
}

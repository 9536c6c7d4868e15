pub mod action;
pub mod analysis;
pub mod app;
pub mod chart;
pub mod components;
pub mod config;
pub mod effects;
pub mod error;
pub mod export;
pub mod tui;
pub mod ui;

pub use error::{AnalysisError, ExportError};

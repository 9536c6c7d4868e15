use anyhow::{bail, Context, Result};
use chrono::Weekday;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::{Marker, Matcher};
use crate::export::discover_exports;

/// How `marker.text` is turned into the searched text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerEncoding {
    /// A real emoji, re-encoded to the form exports store
    #[default]
    Emoji,
    /// Already in exported form, matched verbatim
    Exported,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarkerConfig {
    #[serde(default = "default_marker_text")]
    pub text: String,
    #[serde(default)]
    pub encoding: MarkerEncoding,
}

fn default_marker_text() -> String {
    "😭".to_string()
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            text: default_marker_text(),
            encoding: MarkerEncoding::default(),
        }
    }
}

impl MarkerConfig {
    pub fn marker(&self) -> Marker {
        match self.encoding {
            MarkerEncoding::Emoji => Marker::from_emoji(&self.text),
            MarkerEncoding::Exported => Marker::exact(self.text.as_str()),
        }
    }
}

/// Names used in the console report and chart titles
#[derive(Debug, Clone, Deserialize)]
pub struct Labels {
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_chat")]
    pub chat: String,
    #[serde(default = "default_marker_name")]
    pub marker_name: String,
}

fn default_subject() -> String {
    "Devan".to_string()
}

fn default_chat() -> String {
    "Svengers".to_string()
}

fn default_marker_name() -> String {
    "sob".to_string()
}

impl Labels {
    /// "sob" -> "Sob"
    pub fn marker_title(&self) -> String {
        let mut chars = self.marker_name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            subject: default_subject(),
            chat: default_chat(),
            marker_name: default_marker_name(),
        }
    }
}

/// Histogram binning and x-axis tick cadence
#[derive(Debug, Clone, Deserialize)]
pub struct ChartSettings {
    #[serde(default = "default_bins")]
    pub bins: usize,
    #[serde(default = "default_tick_weekday")]
    pub tick_weekday: Weekday,
    #[serde(default = "default_tick_interval")]
    pub tick_interval_weeks: u32,
}

fn default_bins() -> usize {
    50
}

fn default_tick_weekday() -> Weekday {
    Weekday::Tue
}

fn default_tick_interval() -> u32 {
    2
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            bins: default_bins(),
            tick_weekday: default_tick_weekday(),
            tick_interval_weeks: default_tick_interval(),
        }
    }
}

/// Analysis configuration from config.yaml
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_inputs")]
    pub inputs: Vec<PathBuf>,
    /// Directory holding message_<n>.json files; replaces `inputs` when set
    #[serde(default)]
    pub input_dir: Option<PathBuf>,
    #[serde(default = "default_sender")]
    pub sender: String,
    #[serde(default)]
    pub marker: MarkerConfig,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub chart: ChartSettings,
}

fn default_inputs() -> Vec<PathBuf> {
    vec![
        PathBuf::from("svengers/message_1.json"),
        PathBuf::from("svengers/message_2.json"),
    ]
}

fn default_sender() -> String {
    "Devan  :)".to_string()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            inputs: default_inputs(),
            input_dir: None,
            sender: default_sender(),
            marker: MarkerConfig::default(),
            labels: Labels::default(),
            chart: ChartSettings::default(),
        }
    }
}

impl AnalysisConfig {
    /// Default location: <config dir>/sob-tally/config.yaml
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sob-tally").join("config.yaml"))
    }

    /// Load from an explicit path, else the default location, else built-in defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                tracing::info!("no config file found, using built-in defaults");
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Load a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .context(format!("Failed to read config: {:?}", path.as_ref()))?;
        Self::from_yaml(&content).context(format!("Invalid config: {:?}", path.as_ref()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: AnalysisConfig =
            serde_yaml::from_str(content).context("Failed to parse config YAML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sender.is_empty() {
            bail!("sender must not be empty");
        }
        if self.marker.text.is_empty() {
            bail!("marker.text must not be empty");
        }
        if self.chart.bins == 0 {
            bail!("chart.bins must be at least 1");
        }
        if self.chart.tick_interval_weeks == 0 {
            bail!("chart.tick_interval_weeks must be at least 1");
        }
        if self.input_dir.is_none() && self.inputs.is_empty() {
            bail!("no inputs configured");
        }
        Ok(())
    }

    pub fn matcher(&self) -> Matcher {
        Matcher::new(self.sender.as_str(), self.marker.marker())
    }

    /// Export files to load, in order
    pub fn input_paths(&self) -> Result<Vec<PathBuf>> {
        match &self.input_dir {
            Some(dir) => Ok(discover_exports(dir)?),
            None => Ok(self.inputs.clone()),
        }
    }
}

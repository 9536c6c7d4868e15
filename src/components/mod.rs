pub mod header;
pub mod help_modal;
pub mod histogram_chart;
pub mod pie_chart;
pub mod status_bar;

pub use header::Header;
pub use help_modal::HelpModal;
pub use histogram_chart::HistogramChart;
pub use pie_chart::PieChart;
pub use status_bar::StatusBar;

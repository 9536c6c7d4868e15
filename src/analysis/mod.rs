pub mod aggregator;
pub mod matcher;
pub mod report;

pub use aggregator::{analyze, Analysis};
pub use matcher::{decode_mojibake, Marker, Matcher, SOB_MARKER};
pub use report::Report;

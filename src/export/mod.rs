pub mod models;
pub mod reader;

pub use models::{ChatExport, Message, Participant};
pub use reader::{discover_exports, load_export, load_messages};

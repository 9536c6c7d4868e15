use glob::{glob, Pattern};
use std::fs;
use std::path::{Path, PathBuf};

use super::models::{ChatExport, Message};
use crate::error::ExportError;

/// Find the split export files in a directory, ordered by part number
/// e.g. "inbox/svengers/message_2.json" sorts after ".../message_1.json"
pub fn discover_exports(dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    let escaped = Pattern::escape(&dir.to_string_lossy());
    let pattern_str = Path::new(&escaped)
        .join("message_*.json")
        .to_string_lossy()
        .into_owned();

    let paths = glob(&pattern_str).map_err(|source| ExportError::Pattern {
        pattern: pattern_str.clone(),
        source,
    })?;

    let mut parts: Vec<(u32, PathBuf)> = paths
        .flatten()
        .filter_map(|path| match part_number(&path) {
            Some(n) => Some((n, path)),
            None => {
                tracing::debug!(path = %path.display(), "skipping file without a part number");
                None
            }
        })
        .collect();

    if parts.is_empty() {
        return Err(ExportError::NoExports(dir.to_path_buf()));
    }

    parts.sort_by_key(|(n, _)| *n);
    Ok(parts.into_iter().map(|(_, path)| path).collect())
}

/// "message_12.json" -> 12
fn part_number(path: &Path) -> Option<u32> {
    let stem = path.file_stem()?.to_str()?;
    stem.strip_prefix("message_")?.parse().ok()
}

/// Read and parse a single export file
pub fn load_export(path: &Path) -> Result<ChatExport, ExportError> {
    let content = fs::read_to_string(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ExportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every export in order and concatenate their messages
pub fn load_messages<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Message>, ExportError> {
    let mut messages = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let export = load_export(path)?;
        tracing::debug!(path = %path.display(), count = export.messages.len(), "loaded export");
        messages.extend(export.messages);
    }

    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_number() {
        assert_eq!(part_number(Path::new("/a/message_1.json")), Some(1));
        assert_eq!(part_number(Path::new("message_10.json")), Some(10));
        assert_eq!(part_number(Path::new("message_old.json")), None);
        assert_eq!(part_number(Path::new("messages.json")), None);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_messages(&["/definitely/not/here/message_1.json"]).unwrap_err();
        assert!(matches!(err, ExportError::Read { .. }));
    }
}

use crate::export::Message;

/// 😭 as it appears in exports: each UTF-8 byte stored as its own Latin-1 char
pub const SOB_MARKER: &str = "\u{f0}\u{9f}\u{98}\u{ad}";

/// Text searched for in message bodies, compared byte for byte
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker(String);

impl Marker {
    /// Use the text verbatim
    pub fn exact(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Encode an emoji the way the export stores it
    pub fn from_emoji(emoji: &str) -> Self {
        Self(emoji.bytes().map(char::from).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of non-overlapping occurrences in `body`
    pub fn count_in(&self, body: &str) -> usize {
        if self.0.is_empty() {
            return 0;
        }
        body.matches(self.0.as_str()).count()
    }

    /// Human readable form, e.g. for chart titles
    pub fn display(&self) -> String {
        decode_mojibake(&self.0).unwrap_or_else(|| self.0.clone())
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::exact(SOB_MARKER)
    }
}

/// Undo the Latin-1 re-encoding exports apply to non-ASCII text.
/// Returns None when the text was not re-encoded that way.
pub fn decode_mojibake(text: &str) -> Option<String> {
    let bytes: Vec<u8> = text
        .chars()
        .map(|c| u8::try_from(u32::from(c)).ok())
        .collect::<Option<_>>()?;
    String::from_utf8(bytes).ok()
}

/// Decides which messages count and how many markers they hold
#[derive(Debug, Clone)]
pub struct Matcher {
    sender: String,
    marker: Marker,
}

impl Matcher {
    pub fn new(sender: impl Into<String>, marker: Marker) -> Self {
        Self {
            sender: sender.into(),
            marker,
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// None for other senders, otherwise the marker count (0 without a body)
    pub fn occurrences(&self, message: &Message) -> Option<usize> {
        if message.sender != self.sender {
            return None;
        }

        Some(
            message
                .body
                .as_deref()
                .map_or(0, |body| self.marker.count_in(body)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn devan() -> Matcher {
        Matcher::new("Devan  :)", Marker::default())
    }

    #[test]
    fn test_from_emoji_matches_exported_form() {
        assert_eq!(Marker::from_emoji("😭"), Marker::exact(SOB_MARKER));
        assert_eq!(Marker::from_emoji("😭").as_str().chars().count(), 4);
    }

    #[test]
    fn test_consecutive_markers_count_twice() {
        let body = format!("{SOB_MARKER}{SOB_MARKER}");
        let msg = Message::new("Devan  :)", Some(&body), 0);
        assert_eq!(devan().occurrences(&msg), Some(2));
    }

    #[test]
    fn test_real_emoji_does_not_match_exported_marker() {
        let msg = Message::new("Devan  :)", Some("😭😭"), 0);
        assert_eq!(devan().occurrences(&msg), Some(0));
    }

    #[test]
    fn test_absent_body_counts_zero() {
        let msg = Message::new("Devan  :)", None, 0);
        assert_eq!(devan().occurrences(&msg), Some(0));
    }

    #[test]
    fn test_other_sender_not_applicable() {
        let body = format!("so sad {SOB_MARKER}");
        let msg = Message::new("Devan :)", Some(&body), 0);
        assert_eq!(devan().occurrences(&msg), None);
    }

    #[test]
    fn test_non_overlapping() {
        assert_eq!(Marker::exact("aa").count_in("aaaa"), 2);
        assert_eq!(Marker::exact("aa").count_in("aaa"), 1);
    }

    #[test]
    fn test_empty_marker_never_matches() {
        assert_eq!(Marker::exact("").count_in("anything"), 0);
    }

    #[test]
    fn test_decode_mojibake() {
        assert_eq!(decode_mojibake(SOB_MARKER).as_deref(), Some("😭"));
        assert_eq!(decode_mojibake("plain").as_deref(), Some("plain"));
        assert_eq!(decode_mojibake("😭"), None);
        assert_eq!(Marker::default().display(), "😭");
    }
}

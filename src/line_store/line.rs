//! A single stored line

/// Text of one line.
///
/// Bytes that are not valid UTF-8 are kept exactly as read so that saving
/// writes them back unchanged. `as_str` shows such a line with replacement
/// characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    /// Original bytes, present only when they are not valid UTF-8
    raw: Option<Vec<u8>>,
}

impl Line {
    /// Build a line from raw bytes, keeping them if they are not valid UTF-8
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Line { text, raw: None },
            Err(e) => {
                let text = String::from_utf8_lossy(e.as_bytes()).into_owned();
                Line {
                    text,
                    raw: Some(e.into_bytes()),
                }
            }
        }
    }

    /// Displayable text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Bytes written to disk
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.raw {
            Some(raw) => raw,
            None => self.text.as_bytes(),
        }
    }

    /// Whether the line holds bytes that are not valid UTF-8
    #[must_use]
    pub fn is_lossy(&self) -> bool {
        self.raw.is_some()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Line { text, raw: None }
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Line::from(text.to_string())
    }
}

impl From<Vec<u8>> for Line {
    fn from(bytes: Vec<u8>) -> Self {
        Line::from_bytes(bytes)
    }
}

impl From<&[u8]> for Line {
    fn from(bytes: &[u8]) -> Self {
        Line::from_bytes(bytes.to_vec())
    }
}

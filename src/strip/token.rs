//! Status tokens parsed from the `data` attribute.

use super::color::Rgb;

/// Normalized state of a single token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatusState {
    Ok,
    Warning,
    Error,
    /// Any other lower-cased token text.
    Other(String),
}

impl StatusState {
    /// Normalize raw token text (lower-case) and classify it.
    pub fn from_token(text: &str) -> Self {
        let normalized = text.to_lowercase();
        match normalized.as_str() {
            "ok" => StatusState::Ok,
            "warning" => StatusState::Warning,
            "error" => StatusState::Error,
            _ => StatusState::Other(normalized),
        }
    }

    /// The normalized state name exposed as `data-state`.
    pub fn as_str(&self) -> &str {
        match self {
            StatusState::Ok => "ok",
            StatusState::Warning => "warning",
            StatusState::Error => "error",
            StatusState::Other(name) => name,
        }
    }

    /// Whether this state has a fixed color rule.
    pub fn is_known(&self) -> bool {
        !matches!(self, StatusState::Other(_))
    }

    pub fn color(&self) -> Rgb {
        match self {
            StatusState::Ok => Rgb::OK,
            StatusState::Warning => Rgb::WARNING,
            StatusState::Error => Rgb::ERROR,
            StatusState::Other(_) => Rgb::FALLBACK,
        }
    }
}

/// One trimmed, non-empty segment of `data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusToken {
    /// Original text, case preserved.
    pub text: String,
    /// 0-based position in the sequence.
    pub index: usize,
    pub state: StatusState,
}

impl StatusToken {
    /// Human-readable tooltip: `"<text> (<1-based index>)"`.
    pub fn tooltip(&self) -> String {
        format!("{} ({})", self.text, self.index + 1)
    }
}

/// Split `data` on commas, trim each piece and drop empty pieces.
///
/// Trimming also strips a byte-order mark, so a file-sourced value starting
/// with U+FEFF still classifies its first token.
pub fn parse_tokens(data: &str) -> Vec<StatusToken> {
    data.split(',')
        .map(|piece| piece.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}'))
        .filter(|piece| !piece.is_empty())
        .enumerate()
        .map(|(index, text)| StatusToken {
            text: text.to_string(),
            index,
            state: StatusState::from_token(text),
        })
        .collect()
}

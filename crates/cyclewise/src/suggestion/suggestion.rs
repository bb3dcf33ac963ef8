//! Suggestion types shown to the user.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which rule produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Magnesium-rich diet for high stress.
    Diet,
    /// More physical activity for low exercise frequency.
    Exercise,
    /// More sleep for short nights.
    Sleep,
}

impl SuggestionKind {
    /// The canned text shown for this kind.
    pub fn text(&self) -> &'static str {
        match self {
            SuggestionKind::Diet => {
                "Try consuming magnesium-rich foods like leafy greens, nuts, and seeds to reduce stress."
            }
            SuggestionKind::Exercise => {
                "Incorporate more physical activity to help balance your hormones."
            }
            SuggestionKind::Sleep => {
                "Aim to get at least 7-8 hours of sleep to maintain hormonal balance."
            }
        }
    }
}

/// A single piece of advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub text: String,
}

impl From<SuggestionKind> for Suggestion {
    fn from(kind: SuggestionKind) -> Self {
        Self {
            kind,
            text: kind.text().to_string(),
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Suggestions in rule order. Empty when no rule fired.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionList(Vec<Suggestion>);

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Suggestion> {
        self.0.iter()
    }

    /// The kinds, in order.
    pub fn kinds(&self) -> Vec<SuggestionKind> {
        self.0.iter().map(|s| s.kind).collect()
    }
}

impl<'a> IntoIterator for &'a SuggestionList {
    type Item = &'a Suggestion;
    type IntoIter = std::slice::Iter<'a, Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<SuggestionKind> for SuggestionList {
    fn from_iter<I: IntoIterator<Item = SuggestionKind>>(iter: I) -> Self {
        Self(iter.into_iter().map(Suggestion::from).collect())
    }
}

//! Text rendering of interaction outcomes.

use std::fmt;

use serde::Serialize;

use crate::error::{CyclewiseError, Result};
use crate::suggestion::SuggestionList;

/// Shown when no file has been uploaded.
pub const UPLOAD_WARNING: &str = "Please upload a CSV file.";
/// Heading above the suggestion bullets.
pub const SUGGESTIONS_HEADER: &str = "Here are some suggestions for you:";
/// Shown when no rule fired.
pub const NO_SUGGESTIONS: &str = "No specific suggestions at this time.";

/// What the user sees after one interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rendered {
    /// A recoverable condition, such as a missing upload.
    Warning { message: String },
    /// Suggestions were computed, possibly none.
    Suggestions { suggestions: SuggestionList },
    /// Anything else went wrong; the message is safe to display.
    Error { message: String },
}

impl Rendered {
    /// Render the outcome of a suggestion request.
    pub fn from_result(result: Result<SuggestionList>) -> Self {
        match result {
            Ok(suggestions) => Rendered::Suggestions { suggestions },
            Err(err) => Self::from_error(&err),
        }
    }

    /// Render an error as a warning or an error message.
    pub fn from_error(err: &CyclewiseError) -> Self {
        if err.is_warning() {
            Rendered::Warning {
                message: UPLOAD_WARNING.to_string(),
            }
        } else {
            Rendered::Error {
                message: err.to_string(),
            }
        }
    }

    /// The output as display lines.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Rendered::Warning { message } | Rendered::Error { message } => vec![message.clone()],
            Rendered::Suggestions { suggestions } if suggestions.is_empty() => {
                vec![NO_SUGGESTIONS.to_string()]
            }
            Rendered::Suggestions { suggestions } => {
                let mut lines = Vec::with_capacity(suggestions.len() + 1);
                lines.push(SUGGESTIONS_HEADER.to_string());
                lines.extend(suggestions.iter().map(|s| format!("- {}", s.text)));
                lines
            }
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::SuggestionKind;

    #[test]
    fn test_render_bullets_after_header() {
        let suggestions: SuggestionList = [SuggestionKind::Exercise, SuggestionKind::Sleep]
            .into_iter()
            .collect();
        let rendered = Rendered::from_result(Ok(suggestions));

        assert_eq!(
            rendered.lines(),
            vec![
                SUGGESTIONS_HEADER.to_string(),
                "- Incorporate more physical activity to help balance your hormones.".to_string(),
                "- Aim to get at least 7-8 hours of sleep to maintain hormonal balance.".to_string(),
            ]
        );
    }

    #[test]
    fn test_render_empty_list() {
        let rendered = Rendered::from_result(Ok(SuggestionList::new()));
        assert_eq!(rendered.to_string(), format!("{}\n", NO_SUGGESTIONS));
    }

    #[test]
    fn test_missing_input_is_a_warning() {
        let rendered = Rendered::from_result(Err(CyclewiseError::MissingInput));
        assert_eq!(
            rendered,
            Rendered::Warning {
                message: UPLOAD_WARNING.to_string()
            }
        );
    }

    #[test]
    fn test_other_errors_are_messages() {
        let rendered = Rendered::from_error(&CyclewiseError::EmptyDataset);
        assert!(matches!(rendered, Rendered::Error { .. }));
        assert_eq!(rendered.lines(), vec!["The uploaded dataset has no data rows"]);
    }
}

//! Non-failing adapters for callers that cannot handle [`ParseResult::Error`].
//!
//! Both adapters absorb parse errors into a free-text shape whose prompt is
//! the raw trimmed input, and both omit fields the source variant does not
//! carry instead of filling them with empty placeholders.

use serde::Serialize;

use crate::interaction::{Button, InteractionParser, InteractionType, ParseResult};

/// Flattened property bag for a rendering collaborator.
///
/// `button_texts[i]` and `button_values[i]` describe the same button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemarkCompatibleResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_texts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_multi_select: Option<bool>,
}

impl RemarkCompatibleResult {
    /// Projects a successful result. Returns `None` for errors.
    pub fn from_result(result: &ParseResult) -> Option<Self> {
        if result.is_error() {
            return None;
        }
        let (button_texts, button_values) = match result.buttons() {
            Some(buttons) => (
                Some(buttons.iter().map(|b| b.display.clone()).collect()),
                Some(buttons.iter().map(|b| b.value.clone()).collect()),
            ),
            None => (None, None),
        };
        Some(Self {
            variable_name: result.variable().map(str::to_string),
            button_texts,
            button_values,
            placeholder: result.question().map(str::to_string),
            is_multi_select: result.is_multi_select(),
        })
    }

    /// The fallback shape for input that failed to parse.
    pub fn fallback(content: &str) -> Self {
        Self {
            placeholder: Some(content.trim().to_string()),
            ..Self::default()
        }
    }
}

/// The older `(type, data)` return shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyReturnData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<Button>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_multi_select: Option<bool>,
}

impl InteractionParser {
    /// Parses `content` into the flattened projection.
    ///
    /// Input that fails to parse comes back as `{ placeholder: <trimmed input> }`.
    pub fn parse_to_remark_format(&self, content: &str) -> RemarkCompatibleResult {
        let result = self.parse(content);
        RemarkCompatibleResult::from_result(&result)
            .unwrap_or_else(|| RemarkCompatibleResult::fallback(content))
    }

    /// Parses `content` into the legacy `(type, data)` pair.
    ///
    /// Input that fails to parse comes back as
    /// `(TextOnly, { question: <trimmed input> })`.
    pub fn parse_interaction_format(&self, content: &str) -> (InteractionType, LegacyReturnData) {
        let result = self.parse(content);
        let Some(kind) = result.interaction_type() else {
            return (
                InteractionType::TextOnly,
                LegacyReturnData {
                    question: Some(content.trim().to_string()),
                    ..LegacyReturnData::default()
                },
            );
        };
        let data = LegacyReturnData {
            variable: result.variable().map(str::to_string),
            buttons: result.buttons().map(<[Button]>::to_vec),
            question: result.question().map(str::to_string),
            is_multi_select: result.is_multi_select(),
        };
        (kind, data)
    }
}

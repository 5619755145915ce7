use serde::{Serialize, Serializer, ser::SerializeMap};

/// One selectable button: the label shown to the user and the value stored
/// when it is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub display: String,
    pub value: String,
}

impl Button {
    /// A button whose value is the same as its label.
    pub fn plain(text: impl Into<String>) -> Self {
        let display = text.into();
        Self {
            value: display.clone(),
            display,
        }
    }

    pub fn with_value(display: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            value: value.into(),
        }
    }
}

/// The kind of interaction a successful parse produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    /// `?[%{{var}}...question]`
    TextOnly,
    /// `?[%{{var}} A | B]` or `?[%{{var}} A]`
    ButtonsOnly,
    /// `?[%{{var}} A | B | ...question]`
    ButtonsWithText,
    /// `?[%{{var}} A || B]`
    ButtonsMultiSelect,
    /// `?[%{{var}} A || B || ...question]`
    ButtonsMultiWithText,
    /// `?[Continue]` or `?[Continue | Cancel]`
    NonAssignmentButton,
}

impl InteractionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TextOnly => "text_only",
            Self::ButtonsOnly => "buttons_only",
            Self::ButtonsWithText => "buttons_with_text",
            Self::ButtonsMultiSelect => "buttons_multi_select",
            Self::ButtonsMultiWithText => "buttons_multi_with_text",
            Self::NonAssignmentButton => "non_assignment_button",
        }
    }
}

/// The structured outcome of parsing one interaction block.
///
/// Multi-select is implied by the variant, so it cannot disagree with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    TextOnly {
        variable: String,
        question: String,
    },
    ButtonsOnly {
        variable: String,
        buttons: Vec<Button>,
    },
    ButtonsWithText {
        variable: String,
        buttons: Vec<Button>,
        question: String,
    },
    ButtonsMultiSelect {
        variable: String,
        buttons: Vec<Button>,
    },
    ButtonsMultiWithText {
        variable: String,
        buttons: Vec<Button>,
        question: String,
    },
    /// Buttons with no variable binding; purely action triggers.
    NonAssignmentButton {
        buttons: Vec<Button>,
    },
    Error {
        message: String,
    },
}

impl ParseResult {
    /// The interaction kind, or `None` for [`ParseResult::Error`].
    pub fn interaction_type(&self) -> Option<InteractionType> {
        Some(match self {
            Self::TextOnly { .. } => InteractionType::TextOnly,
            Self::ButtonsOnly { .. } => InteractionType::ButtonsOnly,
            Self::ButtonsWithText { .. } => InteractionType::ButtonsWithText,
            Self::ButtonsMultiSelect { .. } => InteractionType::ButtonsMultiSelect,
            Self::ButtonsMultiWithText { .. } => InteractionType::ButtonsMultiWithText,
            Self::NonAssignmentButton { .. } => InteractionType::NonAssignmentButton,
            Self::Error { .. } => return None,
        })
    }

    pub fn variable(&self) -> Option<&str> {
        match self {
            Self::TextOnly { variable, .. }
            | Self::ButtonsOnly { variable, .. }
            | Self::ButtonsWithText { variable, .. }
            | Self::ButtonsMultiSelect { variable, .. }
            | Self::ButtonsMultiWithText { variable, .. } => Some(variable),
            Self::NonAssignmentButton { .. } | Self::Error { .. } => None,
        }
    }

    pub fn buttons(&self) -> Option<&[Button]> {
        match self {
            Self::ButtonsOnly { buttons, .. }
            | Self::ButtonsWithText { buttons, .. }
            | Self::ButtonsMultiSelect { buttons, .. }
            | Self::ButtonsMultiWithText { buttons, .. }
            | Self::NonAssignmentButton { buttons } => Some(buttons),
            Self::TextOnly { .. } | Self::Error { .. } => None,
        }
    }

    /// The free-text prompt that follows `...`, if the variant has one.
    pub fn question(&self) -> Option<&str> {
        match self {
            Self::TextOnly { question, .. }
            | Self::ButtonsWithText { question, .. }
            | Self::ButtonsMultiWithText { question, .. } => Some(question),
            _ => None,
        }
    }

    /// Multi-select flag for variants bound to a variable.
    ///
    /// `None` for non-assignment buttons and errors, which carry no flag.
    pub fn is_multi_select(&self) -> Option<bool> {
        match self {
            Self::ButtonsMultiSelect { .. } | Self::ButtonsMultiWithText { .. } => Some(true),
            Self::TextOnly { .. } | Self::ButtonsOnly { .. } | Self::ButtonsWithText { .. } => {
                Some(false)
            }
            Self::NonAssignmentButton { .. } | Self::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Serializes as a flat object: `type`, then whichever of `variable`,
/// `buttons`, `question`, `isMultiSelect` the variant carries. Errors
/// serialize as `{"type": null, "error": message}`.
impl Serialize for ParseResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.interaction_type())?;
        if let Some(variable) = self.variable() {
            map.serialize_entry("variable", variable)?;
        }
        if let Some(buttons) = self.buttons() {
            map.serialize_entry("buttons", buttons)?;
        }
        if let Some(question) = self.question() {
            map.serialize_entry("question", question)?;
        }
        if let Some(multi) = self.is_multi_select() {
            map.serialize_entry("isMultiSelect", &multi)?;
        }
        if let Some(message) = self.error() {
            map.serialize_entry("error", message)?;
        }
        map.end()
    }
}

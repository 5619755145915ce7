use super::{
    binding::{NamePolicy, detect_binding},
    buttons::{parse_button, parse_buttons, split_ellipsis},
    envelope::extract_block,
    error::InteractionError,
    separator::Separator,
    types::{Button, InteractionType, ParseResult},
};

/// Parser for a single `?[...]` interaction block.
///
/// Holds no state beyond its [`NamePolicy`]; copy it freely and call it from
/// any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionParser {
    policy: NamePolicy,
}

impl InteractionParser {
    /// A parser with the strict variable-name policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: NamePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> NamePolicy {
        self.policy
    }

    /// Parses `content`, which must be exactly one `?[...]` block once
    /// trimmed.
    ///
    /// Never fails: any fault, including input that is not a block, comes
    /// back as [`ParseResult::Error`].
    pub fn parse(&self, content: &str) -> ParseResult {
        match self.try_parse(content) {
            Ok(result) => result,
            Err(e) => {
                log::debug!("interaction parse failed: {e}");
                ParseResult::Error {
                    message: e.to_string(),
                }
            }
        }
    }

    /// Like [`parse`](Self::parse) but reports faults as an
    /// [`InteractionError`].
    pub fn try_parse(&self, content: &str) -> Result<ParseResult, InteractionError> {
        let inner = extract_block(content).ok_or_else(|| InteractionError::InvalidEnvelope {
            content: content.to_string(),
        })?;

        let result = match detect_binding(inner, self.policy)? {
            Some(binding) => assemble_bound(binding.name, binding.remainder)?,
            None => assemble_unbound(inner)?,
        };
        log::debug!(
            "classified {inner:?} as {}",
            result.interaction_type().map_or("error", InteractionType::as_str)
        );
        Ok(result)
    }
}

/// Builds the result for a block with a variable binding.
///
/// `content` is the trimmed text after `%{{name}}`.
fn assemble_bound(variable: &str, content: &str) -> Result<ParseResult, InteractionError> {
    let variable = variable.to_string();

    if let Some((before, question)) = split_ellipsis(content)? {
        let question = question.to_string();
        if before.is_empty() {
            return Ok(ParseResult::TextOnly { variable, question });
        }
        let (buttons, multi) = parse_buttons(before)?;
        return Ok(if multi {
            ParseResult::ButtonsMultiWithText {
                variable,
                buttons,
                question,
            }
        } else {
            ParseResult::ButtonsWithText {
                variable,
                buttons,
                question,
            }
        });
    }

    if content.is_empty() {
        // `?[%{{var}}]`: free text with no prompt
        return Ok(ParseResult::TextOnly {
            variable,
            question: String::new(),
        });
    }

    let (buttons, multi) = parse_buttons(content)?;
    Ok(if multi {
        ParseResult::ButtonsMultiSelect { variable, buttons }
    } else {
        ParseResult::ButtonsOnly { variable, buttons }
    })
}

/// Builds the result for a block without a binding.
///
/// `...` has no meaning here; it stays in the button text. Multi-select is
/// not tracked for non-assignment buttons, but `||` still governs splitting.
fn assemble_unbound(content: &str) -> Result<ParseResult, InteractionError> {
    let buttons: Vec<Button> = if Separator::resolve(content).is_some() {
        parse_buttons(content)?.0
    } else {
        // `?[]` lands here as one empty button
        vec![parse_button(content)?]
    };
    Ok(ParseResult::NonAssignmentButton { buttons })
}

//! Binding detection: the optional leading `%{{name}}` marker.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{
    error::InteractionError,
    kinds::Binding,
    pattern::{Cached, compiled},
};

/// Which characters a bound variable name may contain.
///
/// Both policies require the first character to be a letter (any script) or
/// `_`, and both trim whitespace between the markers and the name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePolicy {
    /// Letters, digits and `_` only. `%{{User Name}}` is not a binding and
    /// the whole block is read as non-assignment buttons.
    #[default]
    Strict,
    /// Also allows interior spaces and tabs: `%{{ User Name }}` binds
    /// `"User Name"`.
    Permissive,
}

/// A recognised binding and the content that follows it, both trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingMatch<'a> {
    pub name: &'a str,
    pub remainder: &'a str,
}

static STRICT: Cached = OnceLock::new();
static PERMISSIVE: Cached = OnceLock::new();

impl NamePolicy {
    fn name_class(self) -> &'static str {
        match self {
            Self::Strict => r"[\p{L}_][\p{L}\p{Nd}_]*",
            Self::Permissive => r"[\p{L}_][\p{L}\p{Nd}_ \t]*",
        }
    }

    fn regex(self) -> Result<&'static Regex, InteractionError> {
        let cell = match self {
            Self::Strict => &STRICT,
            Self::Permissive => &PERMISSIVE,
        };
        compiled(cell, || {
            format!(
                r"^{}\s*({})\s*{}(.*)$",
                regex::escape(Binding::OPEN),
                self.name_class(),
                regex::escape(Binding::CLOSE),
            )
        })
    }
}

/// Tests `inner` for a leading binding.
///
/// `Ok(None)` means there is no valid binding and `inner` should be read as
/// non-assignment buttons unchanged. Partial markers (`%{name}`, `%{{}}`)
/// and names outside the policy's charset are never consumed. The remainder
/// must fit on one line.
pub fn detect_binding(
    inner: &str,
    policy: NamePolicy,
) -> Result<Option<BindingMatch<'_>>, InteractionError> {
    let Some(caps) = policy.regex()?.captures(inner) else {
        return Ok(None);
    };
    let (Some(name), Some(remainder)) = (caps.get(1), caps.get(2)) else {
        return Err(InteractionError::Malformed {
            fragment: inner.to_string(),
            reason: "binding pattern matched without its groups".to_string(),
        });
    };
    let name = name.as_str().trim();
    if name.is_empty() {
        return Ok(None);
    }
    log::debug!("binding {name:?} detected ({policy:?})");
    Ok(Some(BindingMatch {
        name,
        remainder: remainder.as_str().trim(),
    }))
}

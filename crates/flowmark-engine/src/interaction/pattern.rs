use std::sync::OnceLock;

use regex::Regex;

use super::error::InteractionError;

/// A regex compiled on first use and shared for the life of the process.
pub(crate) type Cached = OnceLock<Result<Regex, regex::Error>>;

/// Returns the regex in `cell`, compiling `source()` the first time.
///
/// A compile failure is remembered and reported on every call.
pub(crate) fn compiled(
    cell: &'static Cached,
    source: impl FnOnce() -> String,
) -> Result<&'static Regex, InteractionError> {
    cell.get_or_init(|| Regex::new(&source()))
        .as_ref()
        .map_err(|e| InteractionError::Pattern(e.clone()))
}

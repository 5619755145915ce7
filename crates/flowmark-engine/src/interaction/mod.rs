//! # Interaction Blocks
//!
//! Layered parsing of `?[...]` interaction blocks into a [`ParseResult`].
//!
//! ## Pipeline
//!
//! Data flows strictly top-down, each stage a pure function:
//!
//! 1. **`envelope`**: validates the `?[...]` form and rejects `?[text](url)` links
//! 2. **`binding`**: detects an optional `%{{name}}` prefix under a [`NamePolicy`]
//! 3. **`separator`**: decides whether `|` or `||` governs splitting (first pipe wins)
//! 4. **`buttons`**: splits off the `...` free-text tail and parses `display//value` segments
//! 5. **`parser`**: picks the result variant and folds every fault into [`ParseResult::Error`]
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter constants owned by each construct
//! - **`cursor`**: byte cursor shared by the scanners
//! - **`types`**: `Button`, `ParseResult`, `InteractionType`
//! - **`error`**: `InteractionError`
//!
//! ## Examples of the grammar
//!
//! | Block | Result |
//! |---|---|
//! | `?[%{{name}}...Enter your name]` | `TextOnly` |
//! | `?[%{{color}} Red//r \| Blue//b]` | `ButtonsOnly` |
//! | `?[%{{lang}} JS//js \|\| TS//ts]` | `ButtonsMultiSelect` |
//! | `?[%{{c}} A \| B \| ...Other]` | `ButtonsWithText` |
//! | `?[Continue \| Cancel]` | `NonAssignmentButton` |

pub mod binding;
pub mod buttons;
pub mod cursor;
pub mod envelope;
pub mod error;
pub mod kinds;
mod pattern;
pub mod parser;
pub mod separator;
pub mod types;

pub use binding::{BindingMatch, NamePolicy, detect_binding};
pub use envelope::{BlockMatch, extract_block, find_block};
pub use error::InteractionError;
pub use parser::InteractionParser;
pub use separator::Separator;
pub use types::{Button, InteractionType, ParseResult};

/// Parses one block with the default (strict) name policy.
pub fn parse(content: &str) -> ParseResult {
    InteractionParser::new().parse(content)
}

//! Segment parsing: `...` free-text split and `display//value` buttons.

use std::sync::OnceLock;

use super::{
    error::InteractionError,
    kinds::{Ellipsis, Pipe, ValueSplit},
    pattern::{Cached, compiled},
    separator::{Separator, split_segments},
    types::Button,
};

static ELLIPSIS: Cached = OnceLock::new();
static BUTTON_VALUE: Cached = OnceLock::new();

/// Splits `content` at its first `...` into `(buttons, question)`, both
/// trimmed. The marker itself is dropped.
///
/// Returns `None` when there is no `...` on the first line of `content`.
pub fn split_ellipsis(content: &str) -> Result<Option<(&str, &str)>, InteractionError> {
    let re = compiled(&ELLIPSIS, || {
        format!(r"^(.*?){}(.*)", regex::escape(Ellipsis::MARK))
    })?;
    let Some(caps) = re.captures(content) else {
        return Ok(None);
    };
    match (caps.get(1), caps.get(2)) {
        (Some(before), Some(after)) => Ok(Some((before.as_str().trim(), after.as_str().trim()))),
        _ => Err(InteractionError::Malformed {
            fragment: content.to_string(),
            reason: "ellipsis pattern matched without its groups".to_string(),
        }),
    }
}

/// Parses one segment into a [`Button`].
///
/// The first `//` splits display from value, provided both sides are
/// non-empty; otherwise the trimmed segment is both display and value.
pub fn parse_button(segment: &str) -> Result<Button, InteractionError> {
    let segment = segment.trim();
    let re = compiled(&BUTTON_VALUE, || {
        format!(r"^(.+?){}(.+)$", regex::escape(ValueSplit::MARK))
    })?;
    let Some(caps) = re.captures(segment) else {
        return Ok(Button::plain(segment));
    };
    match (caps.get(1), caps.get(2)) {
        (Some(display), Some(value)) => Ok(Button::with_value(
            display.as_str().trim(),
            value.as_str().trim(),
        )),
        _ => Err(InteractionError::Malformed {
            fragment: segment.to_string(),
            reason: "button pattern matched without its groups".to_string(),
        }),
    }
}

/// Splits `content` on its resolved separator and parses every segment.
///
/// Segments that trim to empty are dropped, so `A||B||` gives two buttons.
/// A bare `|` or `||` gives none; any other content that leaves no segment,
/// such as `| |`, becomes one button of the whole trimmed text. Content with
/// no pipe is a single implicit button. Returns the buttons and whether `||`
/// was in force.
pub fn parse_buttons(content: &str) -> Result<(Vec<Button>, bool), InteractionError> {
    let separator = Separator::resolve(content);
    let mut buttons = split_segments(content, separator)
        .into_iter()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_button)
        .collect::<Result<Vec<_>, _>>()?;

    let trimmed = content.trim();
    let bare_separator = trimmed.as_bytes() == [Pipe::SINGLE] || trimmed == Pipe::DOUBLE;
    if buttons.is_empty() && !bare_separator {
        buttons.push(Button::plain(trimmed));
    }
    Ok((buttons, separator.is_some_and(Separator::is_multi_select)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Red//r", "Red", "r")]
    #[case("  Submit // save-action  ", "Submit", "save-action")]
    #[case("Submit", "Submit", "Submit")]
    #[case("a//b//c", "a", "b//c")]
    #[case("//value", "//value", "//value")]
    #[case("label//", "label//", "label//")]
    #[case("http://example.com", "http:", "example.com")]
    #[case("前端开发//frontend", "前端开发", "frontend")]
    fn parses_button(#[case] segment: &str, #[case] display: &str, #[case] value: &str) {
        assert_eq!(parse_button(segment).unwrap(), Button::with_value(display, value));
    }

    #[rstest]
    #[case("Red | Blue", None)]
    #[case("...Enter your name", Some(("", "Enter your name")))]
    #[case("A | B | ... Other ", Some(("A | B |", "Other")))]
    #[case("A...B...C", Some(("A", "B...C")))]
    #[case("A\n...B", None)]
    fn splits_ellipsis(#[case] content: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(split_ellipsis(content).unwrap(), expected);
    }

    #[test]
    fn parse_buttons_single_select() {
        let (buttons, multi) = parse_buttons("Red//r | Blue//b | Green//g").unwrap();
        assert!(!multi);
        assert_eq!(
            buttons,
            vec![
                Button::with_value("Red", "r"),
                Button::with_value("Blue", "b"),
                Button::with_value("Green", "g"),
            ]
        );
    }

    #[test]
    fn parse_buttons_multi_select_drops_trailing_empty() {
        let (buttons, multi) = parse_buttons("A||B||").unwrap();
        assert!(multi);
        assert_eq!(buttons, vec![Button::plain("A"), Button::plain("B")]);
    }

    #[test]
    fn parse_buttons_separator_only() {
        assert_eq!(parse_buttons("||").unwrap(), (vec![], true));
        assert_eq!(parse_buttons(" | ").unwrap(), (vec![], false));
    }

    #[rstest]
    #[case("| |", false)]
    #[case("| | |", false)]
    #[case("|| ||", true)]
    fn parse_buttons_separator_runs_become_one_button(#[case] content: &str, #[case] multi: bool) {
        assert_eq!(
            parse_buttons(content).unwrap(),
            (vec![Button::plain(content)], multi)
        );
    }

    #[test]
    fn parse_buttons_without_separator_is_one_button() {
        let (buttons, multi) = parse_buttons(" Submit//go ").unwrap();
        assert!(!multi);
        assert_eq!(buttons, vec![Button::with_value("Submit", "go")]);
    }
}

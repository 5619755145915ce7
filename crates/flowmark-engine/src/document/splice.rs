use serde::Serialize;

use crate::{
    compat::RemarkCompatibleResult,
    interaction::{InteractionParser, find_block},
    span::Span,
};

use super::{
    fence::{CodeFence, FenceSig},
    inline::{InlineNode, parse_inline},
};

/// Element name used when none is configured.
pub const DEFAULT_ELEMENT_NAME: &str = "custom-variable";

/// An opaque interactive element carrying the flattened projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionElement {
    /// Element name handed to the renderer.
    pub name: String,
    pub properties: RemarkCompatibleResult,
    /// Span of the original `?[...]` source.
    pub span: Span,
}

/// A piece of spliced output: literal text or an interactive element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fragment {
    Text(String),
    Element(InteractionElement),
}

/// Splices every interaction block in a single text leaf.
///
/// Each successful block becomes `[Text(before), Element]`, and the text
/// after the last block closes the list, so one block always yields three
/// fragments even when the surrounding text is empty. Blocks that fail to
/// parse are left as text.
pub fn splice_text(text: &str, parser: &InteractionParser, element_name: &str) -> Vec<Fragment> {
    let mut out = vec![];
    let mut last = 0;
    let mut from = 0;

    while let Some(found) = find_block(text, from) {
        let block = &text[found.full.start..found.full.end];
        if let Some(element) = build_element(parser, element_name, block, found.full) {
            out.push(Fragment::Text(text[last..found.full.start].to_string()));
            out.push(Fragment::Element(element));
            last = found.full.end;
        }
        from = found.full.end;
    }

    out.push(Fragment::Text(text[last..].to_string()));
    out
}

/// Splices every interaction block in a markdown document.
///
/// Blank lines end a paragraph, and a block never spans two paragraphs.
/// Fenced code blocks and inline code spans are raw zones and pass through
/// as text. Adjacent text is merged and empty text is dropped, so joining
/// the text fragments with each element's source span reproduces `source`.
pub fn splice_document(
    source: &str,
    parser: &InteractionParser,
    element_name: &str,
) -> Vec<Fragment> {
    let mut out = FragmentBuilder::default();
    let mut open_fence: Option<FenceSig> = None;
    let mut prose_start: Option<usize> = None;
    let mut offset = 0;

    for line in source.split_inclusive('\n') {
        let sig = CodeFence::sig(line);
        match open_fence {
            Some(open) => {
                if CodeFence::closes(open, sig) {
                    open_fence = None;
                }
                out.push_text(line);
            }
            None if sig.is_some() || CodeFence::content(line).trim().is_empty() => {
                if let Some(start) = prose_start.take() {
                    splice_prose(&mut out, source, Span { start, end: offset }, parser, element_name);
                }
                open_fence = sig;
                out.push_text(line);
            }
            None => {
                prose_start.get_or_insert(offset);
            }
        }
        offset += line.len();
    }

    if let Some(start) = prose_start {
        splice_prose(&mut out, source, Span { start, end: offset }, parser, element_name);
    }
    out.finish()
}

fn splice_prose(
    out: &mut FragmentBuilder,
    source: &str,
    prose: Span,
    parser: &InteractionParser,
    element_name: &str,
) {
    let text = &source[prose.start..prose.end];
    for node in parse_inline(prose.start, text) {
        let span = node.span();
        let slice = &source[span.start..span.end];
        match node {
            InlineNode::Text(_) | InlineNode::CodeSpan { .. } => out.push_text(slice),
            InlineNode::Interaction(found) => {
                match build_element(parser, element_name, slice, found.full) {
                    Some(element) => out.push_element(element),
                    None => out.push_text(slice),
                }
            }
        }
    }
}

fn build_element(
    parser: &InteractionParser,
    element_name: &str,
    block: &str,
    span: Span,
) -> Option<InteractionElement> {
    let result = parser.parse(block);
    match RemarkCompatibleResult::from_result(&result) {
        Some(properties) => Some(InteractionElement {
            name: element_name.to_string(),
            properties,
            span,
        }),
        None => {
            // Leave the original text untouched
            log::warn!(
                "failed to parse interaction syntax {block:?}: {}",
                result.error().unwrap_or_default()
            );
            None
        }
    }
}

#[derive(Default)]
struct FragmentBuilder {
    out: Vec<Fragment>,
}

impl FragmentBuilder {
    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Fragment::Text(prev)) = self.out.last_mut() {
            prev.push_str(text);
        } else {
            self.out.push(Fragment::Text(text.to_string()));
        }
    }

    fn push_element(&mut self, element: InteractionElement) {
        self.out.push(Fragment::Element(element));
    }

    fn finish(self) -> Vec<Fragment> {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Fragment {
        Fragment::Text(s.to_string())
    }

    fn element_at(fragments: &[Fragment], i: usize) -> &InteractionElement {
        match &fragments[i] {
            Fragment::Element(el) => el,
            other => panic!("expected element at {i}, got {other:?}"),
        }
    }

    #[test]
    fn splice_text_yields_three_fragments() {
        let parser = InteractionParser::new();
        let out = splice_text("Choose ?[%{{c}} A | B] please", &parser, DEFAULT_ELEMENT_NAME);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], text("Choose "));
        assert_eq!(out[2], text(" please"));
        let el = element_at(&out, 1);
        assert_eq!(el.name, "custom-variable");
        assert_eq!(el.properties.variable_name.as_deref(), Some("c"));
        assert_eq!(el.span, Span { start: 7, end: 22 });
    }

    #[test]
    fn splice_text_keeps_empty_edges() {
        let parser = InteractionParser::new();
        let out = splice_text("?[Continue]", &parser, "button");
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], text(""));
        assert_eq!(out[2], text(""));
        assert_eq!(element_at(&out, 1).name, "button");
    }

    #[test]
    fn splice_text_handles_every_block() {
        let parser = InteractionParser::new();
        let out = splice_text("?[A] and ?[B]", &parser, DEFAULT_ELEMENT_NAME);
        assert_eq!(out.len(), 5);
        assert_eq!(out[2], text(" and "));
        assert_eq!(
            element_at(&out, 3).properties.button_texts,
            Some(vec!["B".to_string()])
        );
    }

    #[test]
    fn splice_text_without_blocks_is_unchanged() {
        let parser = InteractionParser::new();
        let out = splice_text("see ?[docs](http://x)", &parser, DEFAULT_ELEMENT_NAME);
        assert_eq!(out, vec![text("see ?[docs](http://x)")]);
    }

    #[test]
    fn splice_document_skips_fences_and_code_spans() {
        let parser = InteractionParser::new();
        let md = "Intro ?[Go]\n\n```\n?[Hidden]\n```\n\nUse `?[Raw]` or ?[%{{x}}...Type]\n";
        let out = splice_document(md, &parser, DEFAULT_ELEMENT_NAME);

        let elements: Vec<_> = out
            .iter()
            .filter_map(|f| match f {
                Fragment::Element(el) => Some(el),
                Fragment::Text(_) => None,
            })
            .collect();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].span.slice(md), Some("?[Go]"));
        assert_eq!(elements[1].span.slice(md), Some("?[%{{x}}...Type]"));
        assert_eq!(elements[1].properties.placeholder.as_deref(), Some("Type"));
    }

    #[test]
    fn splice_document_merges_text() {
        let parser = InteractionParser::new();
        let out = splice_document("no blocks\n```\ncode\n```\nhere\n", &parser, "x");
        assert_eq!(out, vec![text("no blocks\n```\ncode\n```\nhere\n")]);
    }

    #[test]
    fn splice_document_stops_at_blank_lines() {
        let parser = InteractionParser::new();
        let md = "Really?[ see below\n\nnext para] done\n";
        let out = splice_document(md, &parser, DEFAULT_ELEMENT_NAME);
        assert_eq!(out, vec![text(md)]);
    }

    #[test]
    fn splice_document_keeps_fence_open_past_info_line() {
        let parser = InteractionParser::new();
        let md = "````\n```rust\n?[Hidden]\n```\n````\n?[Shown]\n";
        let out = splice_document(md, &parser, DEFAULT_ELEMENT_NAME);
        assert_eq!(out.len(), 3);
        assert_eq!(element_at(&out, 1).span.slice(md), Some("?[Shown]"));
    }

    #[test]
    fn splice_document_empty_source() {
        let parser = InteractionParser::new();
        assert_eq!(splice_document("", &parser, "x"), vec![]);
    }
}

//! Table-of-contents extraction from article Markdown.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Anchorizer, Arena, Options};

/// One heading in the generated table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level, 1 through 6.
    pub level: u8,
    /// Anchor id matching the heading's id attribute in the body.
    pub id: String,
    /// Plain heading text with inline markup stripped.
    pub text: String,
}

/// Extracts headings from `content` in document order.
///
/// Anchor ids are produced with the same [`Anchorizer`] comrak uses for
/// the `header_ids` extension, so entries link to the rendered headings
/// even when titles repeat.
///
/// # Arguments
///
/// * `content`: Markdown source of the article body
/// * `options`: The same parse options used for rendering
pub fn extract(content: &str, options: &Options) -> Vec<TocEntry> {
    let arena = Arena::new();
    let root = parse_document(&arena, content, options);
    let mut anchorizer = Anchorizer::new();
    let mut entries = Vec::new();

    for node in root.descendants() {
        if let NodeValue::Heading(heading) = &node.data.borrow().value {
            let text = heading_text(node);
            let id = anchorizer.anchorize(text.clone());
            entries.push(TocEntry {
                level: heading.level,
                id,
                text,
            });
        }
    }

    entries
}

/// Collects the plain text of a heading, dropping inline markup.
fn heading_text<'a>(heading: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for node in heading.descendants() {
        match &node.data.borrow().value {
            NodeValue::Text(t) => text.push_str(t),
            NodeValue::Code(code) => text.push_str(&code.literal),
            _ => {}
        }
    }
    text
}

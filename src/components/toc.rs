//! Table of contents panel for the article detail page

use maud::{html, Markup};

use crate::markdown::TocEntry;

/// Renders the table of contents as an anchor list
///
/// Entries are indented by heading level via CSS classes and link to the
/// matching heading anchors in the rendered body. Rendered empty when the
/// article has no headings.
///
/// # Arguments
///
/// * `entries`: Headings extracted during Markdown rendering
pub fn toc_panel(entries: &[TocEntry]) -> Markup {
    if entries.is_empty() {
        return html! {};
    }

    html! {
        aside class="toc-panel" {
            h2 class="toc-title" { "Contents" }
            ul class="toc-list" {
                @for entry in entries {
                    li class=(format!("toc-entry toc-level-{}", entry.level)) {
                        a href=(format!("#{}", entry.id)) { (entry.text) }
                    }
                }
            }
        }
    }
}

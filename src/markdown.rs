//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! This module renders article bodies using comrak with GFM extensions
//! (tables, strikethrough, autolinks, task lists) and extracts a table
//! of contents from heading anchors.

mod renderer;
mod toc;

pub use renderer::{MarkdownRenderer, RenderedMarkdown};
pub use toc::TocEntry;

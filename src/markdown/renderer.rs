//! Markdown rendering for article bodies.

use anyhow::{Context, Result};
use comrak::Options;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::toc::{self, TocEntry};

/// Rendered article body: HTML plus its extracted table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMarkdown {
    pub html: String,
    pub toc: Vec<TocEntry>,
}

/// Renders article Markdown to HTML with GitHub Flavored Markdown support.
///
/// Provides GFM extensions including tables, strikethrough, autolinks,
/// task lists, footnotes, and description lists. Headings get stable
/// anchor ids so the table of contents can link into the body. Uses
/// syntect for code block syntax highlighting when language is specified.
///
/// Only the syntax set lives in the struct; `comrak::Options` holds a
/// non-`Sync` callback slot, so it is rebuilt per render to keep the
/// renderer shareable across request handlers.
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
}

impl MarkdownRenderer {
    /// Creates renderer with syntax definitions loaded for highlighting.
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Builds the GitHub Flavored Markdown options.
    ///
    /// Configures all GFM extensions and security settings:
    /// - Tables, strikethrough, autolinks, task lists, footnotes
    /// - Heading anchor ids for table-of-contents links
    /// - Smart punctuation for quotes and dashes
    /// - Raw HTML passthrough (authors are trusted)
    fn options() -> Options<'static> {
        let mut options = Options::default();

        // Extension options (GFM features)
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;

        // Anchor ids on headings, no prefix
        options.extension.header_ids = Some(String::new());

        // Parse options (smart punctuation)
        options.parse.smart = true;

        // Render options (authors are trusted)
        options.render.unsafe_ = true;

        options
    }

    /// Renders markdown content to HTML string.
    ///
    /// Parses markdown and renders to HTML with GFM extensions. Code
    /// blocks are syntax highlighted with CSS class names using syntect.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML as string with syntax highlighted code blocks
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    pub fn render(&self, content: &str) -> Result<String> {
        let html = comrak::markdown_to_html(content, &Self::options());

        // Post-process HTML to add syntax highlighting with CSS classes
        self.highlight_code_blocks(&html)
    }

    /// Renders markdown and extracts the table of contents in one pass
    /// over the same parse options, so ToC anchors match heading ids.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    pub fn render_with_toc(&self, content: &str) -> Result<RenderedMarkdown> {
        let options = Self::options();
        let html = comrak::markdown_to_html(content, &options);
        let html = self.highlight_code_blocks(&html)?;
        let toc = toc::extract(content, &options);
        Ok(RenderedMarkdown { html, toc })
    }

    /// Post-processes HTML to apply syntax highlighting with CSS classes.
    ///
    /// Finds code blocks with language-* classes from comrak's output and
    /// replaces the plain text content with syntect highlighted HTML using
    /// CSS class names (hljs-* prefix).
    ///
    /// # Arguments
    ///
    /// * `html`: Raw HTML from comrak with <code class="language-X"> blocks
    ///
    /// # Returns
    ///
    /// HTML with syntax highlighted code blocks using CSS classes
    ///
    /// # Errors
    ///
    /// Returns error if HTML parsing or highlighting fails
    fn highlight_code_blocks(&self, html: &str) -> Result<String> {
        let mut result = String::with_capacity(html.len());
        let mut last_end = 0;

        // Pattern: <code class="language-LANG">CODE</code>
        let mut search_pos = 0;

        while let Some(code_start) = html[search_pos..].find("<code class=\"language-") {
            let code_start = search_pos + code_start;

            // Find the language name
            let lang_start = code_start + "<code class=\"language-".len();
            let lang_end = match html[lang_start..].find('"') {
                Some(pos) => lang_start + pos,
                None => {
                    search_pos = code_start + 1;
                    continue;
                }
            };

            let language = &html[lang_start..lang_end];

            // Find the end of the opening tag
            let content_start = match html[lang_end..].find('>') {
                Some(pos) => lang_end + pos + 1,
                None => {
                    search_pos = code_start + 1;
                    continue;
                }
            };

            // Find the closing </code> tag
            let content_end = match html[content_start..].find("</code>") {
                Some(pos) => content_start + pos,
                None => {
                    search_pos = code_start + 1;
                    continue;
                }
            };

            let code_content = &html[content_start..content_end];

            // HTML decode the content (comrak escapes &, <, >, ", ')
            let decoded_content = Self::html_decode(code_content);

            // Copy everything before this code block
            result.push_str(&html[last_end..code_start]);

            // Generate highlighted HTML with CSS classes
            let highlighted = self
                .highlight_code(&decoded_content, language)
                .context("Failed to highlight code block")?;

            // Write opening tag with language class preserved
            result.push_str("<code class=\"language-");
            result.push_str(language);
            result.push_str("\">");
            result.push_str(&highlighted);
            result.push_str("</code>");

            // Move past this code block
            last_end = content_end + "</code>".len();
            search_pos = last_end;
        }

        // Copy remaining HTML after last code block
        result.push_str(&html[last_end..]);

        Ok(result)
    }

    /// Highlights code with syntect using CSS classes.
    ///
    /// Uses ClassedHTMLGenerator to produce HTML with CSS class names
    /// instead of inline styles. The class prefix is "hljs-" to match
    /// highlight.js CSS conventions in markdown.css.
    ///
    /// # Arguments
    ///
    /// * `code`: Source code to highlight
    /// * `language`: Language identifier (rust, python, etc)
    ///
    /// # Returns
    ///
    /// HTML string with <span class="hljs-*"> tags
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    fn highlight_code(&self, code: &str, language: &str) -> Result<String> {
        // Handle empty code blocks
        if code.is_empty() {
            return Ok(String::new());
        }

        // Find syntax definition for language
        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language));

        let syntax = match syntax {
            Some(s) => s,
            None => {
                // Unknown language: return escaped plain text
                return Ok(Self::html_escape(code));
            }
        };

        // Generate HTML with CSS classes using hljs- prefix
        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        // Process each line
        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(generator.finalize())
    }

    /// Decodes HTML entities in code block content.
    ///
    /// Comrak escapes special characters in code blocks. This function
    /// reverses those escapes before passing to syntect.
    fn html_decode(html: &str) -> String {
        html.replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
    }

    /// Escapes HTML special characters.
    ///
    /// Used for plain text fallback when language is unknown.
    fn html_escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

//! Embedded stylesheets served under `/assets/`.

/// Site-wide layout and component styles.
pub const SITE_CSS: &str = include_str!("../assets/inkpot.css");

/// Rendered Markdown and code highlighting styles.
pub const MARKDOWN_CSS: &str = include_str!("../assets/markdown.css");

/// Looks up an embedded stylesheet by file name.
pub fn stylesheet(name: &str) -> Option<&'static str> {
    match name {
        "inkpot.css" => Some(SITE_CSS),
        "markdown.css" => Some(MARKDOWN_CSS),
        _ => None,
    }
}

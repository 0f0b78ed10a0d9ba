//! Page footer component

use maud::{html, Markup};

/// Renders the shared page footer
pub fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            span { "Powered by Inkpot" }
        }
    }
}

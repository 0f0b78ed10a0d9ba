//! Page layout wrapper component

use maud::{html, Markup, DOCTYPE};

use super::footer::footer;
use super::nav::site_nav;
use crate::model::User;

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and container structure across
/// all page types. The wrapper handles viewport configuration, charset,
/// stylesheet loading and the signed-in navigation bar while the caller
/// provides page-specific body content.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `user`: Signed-in user for the navigation bar, if any
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, user: Option<&User>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Inkpot" }
                link rel="stylesheet" href="/assets/inkpot.css";
                link rel="stylesheet" href="/assets/markdown.css";
            }
            body {
                (site_nav(user))
                div class="container" {
                    (body)
                }
                (footer())
            }
        }
    }
}

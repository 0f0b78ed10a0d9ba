//! Article list page generation

use maud::{html, Markup};

use crate::components::article_card::article_card;
use crate::components::layout::page_wrapper;
use crate::components::nav::filter_bar;
use crate::components::pagination::page_nav;
use crate::model::{Article, Column, User};
use crate::paginate::Page;
use crate::query::ListParams;

/// Generates the article list page
///
/// Shows the filter bar, one card per article on the current page, and
/// the page navigation. Active filters are echoed into every link so
/// paging and filtering compose.
///
/// # Arguments
///
/// * `page`: Current page of filtered articles
/// * `columns`: All columns for the filter chips
/// * `params`: Raw request parameters being echoed
/// * `user`: Signed-in user, if any
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn render(
    page: &Page<Article>,
    columns: &[Column],
    params: &ListParams,
    user: Option<&User>,
) -> Markup {
    let title = match params.search.as_deref() {
        Some(needle) if !needle.is_empty() => format!("Search: {needle}"),
        _ => "Articles".to_string(),
    };

    page_wrapper(
        &title,
        user,
        html! {
            (filter_bar(columns, params))

            main class="article-list" {
                @if page.items.is_empty() {
                    div class="empty-state" {
                        @if params.query().is_unfiltered() {
                            p { "No articles yet." }
                        } @else {
                            p { "No articles match these filters." }
                        }
                    }
                } @else {
                    @for article in &page.items {
                        (article_card(article, params))
                    }
                }
            }

            (page_nav(page, params))
        },
    )
}

//! Article summary card for the list page

use maud::{html, Markup};

use crate::avatar;
use crate::model::Article;
use crate::query::ListParams;
use crate::util::format_timestamp;

/// Body characters shown in the card excerpt.
const EXCERPT_LEN: usize = 160;

/// Renders one article as a list card
///
/// Shows title (linking to the detail page), a plain-text excerpt, the
/// author byline with a generated avatar, the column badge, tag links
/// that narrow the list, and the view/like counters.
///
/// # Arguments
///
/// * `article`: Article to summarize
/// * `params`: Raw request parameters, preserved in tag/column links
pub fn article_card(article: &Article, params: &ListParams) -> Markup {
    html! {
        article class="article-card" {
            div class="card-header" {
                a class="card-title" href=(format!("/{}", article.id)) { (article.title) }
                @if let Some(column) = &article.column {
                    a class="column-badge" href=(params.href_for_column(column.id)) {
                        (column.name)
                    }
                }
            }
            p class="card-excerpt" { (article.excerpt(EXCERPT_LEN)) }
            div class="card-meta" {
                span class="byline" {
                    (avatar::render(&article.author_name, 22))
                    (article.author_name)
                }
                span { (format_timestamp(article.created)) }
                span class="counters" {
                    (article.total_views) " views · " (article.likes) " likes"
                }
            }
            @if !article.tags.is_empty() {
                div class="card-tags" {
                    @for tag in &article.tags {
                        a class="tag" href=(params.href_for_tag(tag)) { "#" (tag) }
                    }
                }
            }
        }
    }
}

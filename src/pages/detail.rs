//! Article detail page generation

use maud::{html, Markup, PreEscaped};

use crate::avatar;
use crate::components::comments::comment_section;
use crate::components::layout::page_wrapper;
use crate::components::toc::toc_panel;
use crate::markdown::RenderedMarkdown;
use crate::model::{Article, Comment, User};
use crate::query::ListParams;
use crate::util::format_timestamp;

/// Generates the article detail page
///
/// Renders the article header (byline, column, tags, counters), the
/// table of contents, the Markdown body as HTML, the like button and
/// the comment section. Authors additionally get edit and delete links.
///
/// # Arguments
///
/// * `article`: Article being viewed
/// * `rendered`: Markdown body rendered to HTML plus its ToC
/// * `comments`: Stored comments, oldest first
/// * `user`: Signed-in user, if any
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn render(
    article: &Article,
    rendered: &RenderedMarkdown,
    comments: &[Comment],
    user: Option<&User>,
) -> Markup {
    let is_author = user.map(|u| u.id) == Some(article.author_id);
    let params = ListParams::default();

    page_wrapper(
        &article.title,
        user,
        html! {
            article class="article-detail" {
                header class="article-header" {
                    h1 { (article.title) }
                    div class="article-meta" {
                        span class="byline" {
                            (avatar::render(&article.author_name, 28))
                            (article.author_name)
                        }
                        span { (format_timestamp(article.created)) }
                        @if let Some(column) = &article.column {
                            a class="column-badge" href=(params.href_for_column(column.id)) {
                                (column.name)
                            }
                        }
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
                    @if is_author {
                        div class="author-actions" {
                            a href=(format!("/update/{}", article.id)) { "Edit" }
                            form class="inline-form" action=(format!("/safe-delete/{}", article.id))
                                method="post" {
                                button type="submit" class="danger" { "Delete" }
                            }
                        }
                    }
                }

                (toc_panel(&rendered.toc))

                div class="article-body latte" {
                    (PreEscaped(rendered.html.as_str()))
                }

                form class="like-form" action=(format!("/like/{}", article.id)) method="post" {
                    button type="submit" { "♥ Like (" (article.likes) ")" }
                }
            }

            (comment_section(article.id, comments))
        },
    )
}

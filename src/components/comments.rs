//! Comment list and comment form for the article detail page

use maud::{html, Markup};

use crate::avatar;
use crate::model::Comment;
use crate::util::format_timestamp;

/// Renders the comment section
///
/// Shows existing comments oldest first and the posting form. The form
/// targets the external comment subsystem; this core only displays it.
///
/// # Arguments
///
/// * `article_id`: Article the comments belong to
/// * `comments`: Stored comments, oldest first
pub fn comment_section(article_id: i64, comments: &[Comment]) -> Markup {
    html! {
        section class="comments" {
            h2 { (comments.len()) " comments" }

            @if comments.is_empty() {
                p class="empty-state" { "No comments yet." }
            } @else {
                ul class="comment-list" {
                    @for comment in comments {
                        li class="comment" {
                            div class="comment-meta" {
                                (avatar::render(&comment.author, 24))
                                span class="comment-author" { (comment.author) }
                                span class="comment-date" { (format_timestamp(comment.created)) }
                            }
                            p class="comment-body" { (comment.body) }
                        }
                    }
                }
            }

            form class="comment-form" action=(format!("/comment/post/{article_id}/")) method="post" {
                textarea name="body" rows="3" placeholder="Leave a comment" {}
                button type="submit" { "Post comment" }
            }
        }
    }
}

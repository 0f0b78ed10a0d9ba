//! Article create and update form pages

use maud::{html, Markup};

use crate::components::forms::article_form;
use crate::components::layout::page_wrapper;
use crate::model::{Article, Column, User};

/// Generates the new-article page
///
/// # Arguments
///
/// * `columns`: Columns offered in the category selector
/// * `user`: The signed-in author
pub fn create(columns: &[Column], user: &User) -> Markup {
    page_wrapper(
        "New article",
        Some(user),
        html! {
            main class="editor" {
                h1 { "New article" }
                (article_form("/create", columns, None))
            }
        },
    )
}

/// Generates the edit page prefilled with the current field values
///
/// # Arguments
///
/// * `article`: Article being edited
/// * `columns`: Columns offered in the category selector
/// * `user`: The signed-in author
pub fn update(article: &Article, columns: &[Column], user: &User) -> Markup {
    page_wrapper(
        &format!("Edit: {}", article.title),
        Some(user),
        html! {
            main class="editor" {
                h1 { "Edit article" }
                (article_form(
                    &format!("/update/{}", article.id),
                    columns,
                    Some(article),
                ))
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> User {
        User {
            id: 1,
            username: "alice".to_string(),
        }
    }

    #[test]
    fn test_create_page_has_blank_form() {
        // Act
        let html = create(&[], &author()).into_string();

        // Assert
        assert!(html.contains("New article"));
        assert!(html.contains("action=\"/create\""));
    }

    #[test]
    fn test_update_page_prefills_and_targets_article() {
        // Arrange
        let article = Article {
            id: 8,
            title: "Revise me".to_string(),
            body: "Old body".to_string(),
            author_id: 1,
            author_name: "alice".to_string(),
            column: None,
            tags: vec!["draft".to_string()],
            total_views: 0,
            likes: 0,
            avatar: None,
            created: 0,
            updated: 0,
        };

        // Act
        let html = update(&article, &[], &author()).into_string();

        // Assert
        assert!(html.contains("action=\"/update/8\""));
        assert!(html.contains("Revise me"));
        assert!(html.contains("draft"));
    }
}

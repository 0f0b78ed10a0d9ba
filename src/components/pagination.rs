//! Page navigation component for the article list

use maud::{html, Markup};

use crate::model::Article;
use crate::paginate::Page;
use crate::query::ListParams;

/// Renders previous/next links and the page position
///
/// Links carry every active filter so paging never drops the current
/// search, column, tag or order. Rendered empty when everything fits on
/// one page.
///
/// # Arguments
///
/// * `page`: Current page with navigation metadata
/// * `params`: Raw request parameters for link building
pub fn page_nav(page: &Page<Article>, params: &ListParams) -> Markup {
    if page.total_pages <= 1 {
        return html! {};
    }

    html! {
        nav class="page-nav" {
            @if page.has_previous() {
                a class="page-link" href=(params.href_for_page(page.number - 1)) { "← Previous" }
            }
            span class="page-current" {
                "Page " (page.number) " of " (page.total_pages)
            }
            @if page.has_next() {
                a class="page-link" href=(params.href_for_page(page.number + 1)) { "Next →" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginate::paginate;

    fn article(id: i64) -> Article {
        Article {
            id,
            title: format!("Article {id}"),
            body: String::new(),
            author_id: 1,
            author_name: "alice".to_string(),
            column: None,
            tags: Vec::new(),
            total_views: 0,
            likes: 0,
            avatar: None,
            created: 0,
            updated: 0,
        }
    }

    #[test]
    fn test_single_page_renders_nothing() {
        // Arrange
        let page = paginate(vec![article(1)], 1);

        // Act
        let html = page_nav(&page, &ListParams::default()).into_string();

        // Assert
        assert!(html.is_empty());
    }

    #[test]
    fn test_middle_page_links_both_ways() {
        // Arrange
        let page = paginate((1..=9).map(article).collect(), 2);
        let params = ListParams {
            search: Some("Go".to_string()),
            ..ListParams::default()
        };

        // Act
        let html = page_nav(&page, &params).into_string();

        // Assert: both links present, filters preserved
        assert!(html.contains("page=1"));
        assert!(html.contains("page=3"));
        assert!(html.contains("search=Go"));
        assert!(html.contains("Page 2 of 3"));
    }

    #[test]
    fn test_last_page_has_no_next() {
        // Arrange
        let page = paginate((1..=4).map(article).collect(), 2);

        // Act
        let html = page_nav(&page, &ListParams::default()).into_string();

        // Assert
        assert!(html.contains("Previous"));
        assert!(!html.contains("Next"));
    }
}

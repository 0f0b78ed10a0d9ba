//! Record types backing the blog.

/// A published (or draft-free, this engine has no drafts) blog article.
///
/// The body holds raw Markdown; rendering to HTML happens at view time.
/// `total_views` and `likes` only ever grow, and only through the atomic
/// counter updates in [`crate::store::Store`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author_id: i64,
    pub author_name: String,
    pub column: Option<Column>,
    pub tags: Vec<String>,
    pub total_views: i64,
    pub likes: i64,
    pub avatar: Option<String>,
    pub created: i64,
    pub updated: i64,
}

impl Article {
    /// Tags joined with commas for form display and card rendering.
    pub fn tags_display(&self) -> String {
        self.tags.join(", ")
    }

    /// Plain-text excerpt of the body for list cards.
    ///
    /// Takes the first `limit` characters on a char boundary and appends
    /// an ellipsis when the body was truncated. Markdown syntax is left
    /// as-is; cards show it as plain text.
    pub fn excerpt(&self, limit: usize) -> String {
        let mut end = self.body.len().min(limit);
        while !self.body.is_char_boundary(end) {
            end -= 1;
        }
        if end < self.body.len() {
            format!("{}…", &self.body[..end])
        } else {
            self.body.clone()
        }
    }
}

/// A category grouping articles many-to-one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub id: i64,
    pub name: String,
}

/// A reader comment attached to an article.
///
/// Comments are written by the external comment subsystem; this core only
/// reads them for the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub article_id: i64,
    pub author: String,
    pub body: String,
    pub created: i64,
}

/// A registered user. Authentication itself is external; the server only
/// resolves session ids against this table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article(body: &str) -> Article {
        Article {
            id: 1,
            title: "Sample".to_string(),
            body: body.to_string(),
            author_id: 1,
            author_name: "alice".to_string(),
            column: None,
            tags: vec!["rust".to_string(), "web".to_string()],
            total_views: 0,
            likes: 0,
            avatar: None,
            created: 0,
            updated: 0,
        }
    }

    #[test]
    fn test_tags_display_joins_with_commas() {
        // Arrange
        let article = sample_article("body");

        // Act
        let display = article.tags_display();

        // Assert
        assert_eq!(display, "rust, web");
    }

    #[test]
    fn test_excerpt_truncates_long_body() {
        // Arrange
        let article = sample_article("abcdefghij");

        // Act
        let excerpt = article.excerpt(4);

        // Assert
        assert_eq!(excerpt, "abcd…");
    }

    #[test]
    fn test_excerpt_keeps_short_body_intact() {
        // Arrange
        let article = sample_article("short");

        // Act
        let excerpt = article.excerpt(100);

        // Assert
        assert_eq!(excerpt, "short");
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        // Arrange: multi-byte characters must not be split
        let article = sample_article("日本語のテキスト");

        // Act
        let excerpt = article.excerpt(4);

        // Assert
        assert!(excerpt.ends_with('…'));
        assert!(excerpt.chars().count() >= 1);
    }
}

//! Article create/update form markup

use maud::{html, Markup};

use crate::model::{Article, Column};

/// Renders the article submission form
///
/// Shared between the create and update pages. For updates, `existing`
/// prefills the fields; its tags are joined back into the comma-delimited
/// input string. The column selector always offers the `none` sentinel.
///
/// # Arguments
///
/// * `action`: URL the form posts to
/// * `columns`: Columns offered in the category selector
/// * `existing`: Article being edited, absent for the create form
pub fn article_form(action: &str, columns: &[Column], existing: Option<&Article>) -> Markup {
    let title = existing.map(|a| a.title.as_str()).unwrap_or("");
    let body = existing.map(|a| a.body.clone()).unwrap_or_default();
    let tags = existing.map(|a| a.tags_display()).unwrap_or_default();
    let avatar = existing
        .and_then(|a| a.avatar.as_deref())
        .unwrap_or("");
    let selected_column = existing.and_then(|a| a.column.as_ref()).map(|c| c.id);

    html! {
        form class="article-form" action=(action) method="post" {
            label for="title" { "Title" }
            input type="text" id="title" name="title" value=(title) maxlength="100" required;

            label for="column" { "Column" }
            select id="column" name="column" {
                option value="none" selected[selected_column.is_none()] { "No column" }
                @for column in columns {
                    option value=(column.id) selected[selected_column == Some(column.id)] {
                        (column.name)
                    }
                }
            }

            label for="tags" { "Tags" }
            input type="text" id="tags" name="tags" value=(tags)
                placeholder="comma, separated, tags";

            label for="avatar" { "Cover image" }
            input type="text" id="avatar" name="avatar" value=(avatar)
                placeholder="path or URL, optional";

            label for="body" { "Body (Markdown)" }
            textarea id="body" name="body" rows="18" required { (body) }

            button type="submit" { "Save article" }
        }
    }
}

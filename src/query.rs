//! Article list filtering and ordering.
//!
//! Raw request strings are decoded once at the HTTP boundary into a typed
//! [`ArticleQuery`]; SQL construction is a pure function of that struct so
//! every filter is independently testable.

use rusqlite::types::ToSqlOutput;
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};

/// Raw list-view request parameters, exactly as sent by the client.
///
/// Kept around after decoding so pages can echo the active filters back
/// into pagination and filter links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

impl ListParams {
    /// Decodes the raw strings into typed filters.
    pub fn query(&self) -> ArticleQuery {
        ArticleQuery::from_raw(
            self.search.as_deref(),
            self.column.as_deref(),
            self.tag.as_deref(),
            self.order.as_deref(),
        )
    }

    /// List URL for `page` with every other active filter preserved.
    pub fn href_for_page(&self, page: usize) -> String {
        let mut params = self.clone();
        params.page = Some(page.to_string());
        Self::href(&params)
    }

    /// List URL narrowed to one column, with the page reset.
    pub fn href_for_column(&self, column_id: i64) -> String {
        let mut params = self.clone();
        params.column = Some(column_id.to_string());
        params.page = None;
        Self::href(&params)
    }

    /// List URL narrowed to one tag, with the page reset.
    pub fn href_for_tag(&self, tag: &str) -> String {
        let mut params = self.clone();
        params.tag = Some(tag.to_string());
        params.page = None;
        Self::href(&params)
    }

    /// List URL with the sort order replaced and the page reset.
    pub fn href_for_order(&self, order: Option<&str>) -> String {
        let mut params = self.clone();
        params.order = order.map(str::to_string);
        params.page = None;
        Self::href(&params)
    }

    fn href(params: &ListParams) -> String {
        match serde_urlencoded::to_string(params) {
            Ok(encoded) if !encoded.is_empty() => format!("/?{encoded}"),
            _ => "/".to_string(),
        }
    }
}

/// Sort order for the article list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Insertion (id) order.
    #[default]
    Default,
    /// Most viewed first.
    TotalViews,
}

/// Decoded list-view filters.
///
/// All filters are optional and compose conjunctively. Malformed values
/// decode to "no filter" rather than errors: a non-numeric column id and
/// the `"None"` tag placeholder both mean the filter is absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleQuery {
    pub search: Option<String>,
    pub column: Option<i64>,
    pub tag: Option<String>,
    pub order: Order,
}

/// A positional SQL parameter produced by clause construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Int(i64),
}

impl ToSql for SqlValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            SqlValue::Text(s) => Ok(ToSqlOutput::from(s.as_str())),
            SqlValue::Int(i) => Ok(ToSqlOutput::from(*i)),
        }
    }
}

/// WHERE/ORDER BY fragments plus their bound parameters.
///
/// `where_sql` is either empty or starts with `" WHERE "`, ready to be
/// appended to the base SELECT. Predicates appear in fixed order: search,
/// column, tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlClauses {
    pub where_sql: String,
    pub order_sql: &'static str,
    pub params: Vec<SqlValue>,
}

impl ArticleQuery {
    /// Decodes raw request parameters into typed filters.
    ///
    /// # Arguments
    ///
    /// * `search`: Free-text search, ignored when empty
    /// * `column`: Column id, applied only when the value is all digits
    /// * `tag`: Tag name, ignored when empty or the `"None"` placeholder
    /// * `order`: `"total_views"` selects the view-count sort
    pub fn from_raw(
        search: Option<&str>,
        column: Option<&str>,
        tag: Option<&str>,
        order: Option<&str>,
    ) -> Self {
        let search = search
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let column = column
            .filter(|c| !c.is_empty() && c.chars().all(|ch| ch.is_ascii_digit()))
            .and_then(|c| c.parse::<i64>().ok());

        let tag = tag
            .filter(|t| !t.is_empty() && *t != "None")
            .map(str::to_string);

        let order = match order {
            Some("total_views") => Order::TotalViews,
            _ => Order::Default,
        };

        Self {
            search,
            column,
            tag,
            order,
        }
    }

    /// True when no filter narrows the result set.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_none() && self.column.is_none() && self.tag.is_none()
    }

    /// Builds SQL predicate and ordering fragments for this query.
    ///
    /// Predicates are ANDed in fixed order (search, column, tag). The
    /// search predicate uses `instr` over lowercased text so `%` and `_`
    /// in the needle match literally.
    pub fn clauses(&self) -> SqlClauses {
        let mut predicates: Vec<&'static str> = Vec::new();
        let mut params = Vec::new();

        if let Some(search) = &self.search {
            predicates
                .push("(instr(lower(a.title), lower(?)) > 0 OR instr(lower(a.body), lower(?)) > 0)");
            params.push(SqlValue::Text(search.clone()));
            params.push(SqlValue::Text(search.clone()));
        }

        if let Some(column) = self.column {
            predicates.push("a.column_id = ?");
            params.push(SqlValue::Int(column));
        }

        if let Some(tag) = &self.tag {
            predicates.push(
                "EXISTS (SELECT 1 FROM article_tags t WHERE t.article_id = a.id AND t.tag = ?)",
            );
            params.push(SqlValue::Text(tag.clone()));
        }

        let where_sql = if predicates.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", predicates.join(" AND "))
        };

        let order_sql = match self.order {
            Order::Default => " ORDER BY a.id",
            Order::TotalViews => " ORDER BY a.total_views DESC, a.id",
        };

        SqlClauses {
            where_sql,
            order_sql,
            params,
        }
    }
}

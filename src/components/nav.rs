//! Site navigation components

use maud::{html, Markup};

use crate::avatar;
use crate::model::{Column, User};
use crate::query::ListParams;

/// External login page owned by the auth subsystem.
pub const LOGIN_URL: &str = "/accounts/login/";

/// Renders the top navigation bar
///
/// Shows the site title linking home, a write link for signed-in users
/// and either the user's avatar or a login link.
///
/// # Arguments
///
/// * `user`: Signed-in user, if any
pub fn site_nav(user: Option<&User>) -> Markup {
    html! {
        header class="site-nav" {
            a href="/" class="site-title" { "Inkpot" }
            nav class="nav-links" {
                @if let Some(user) = user {
                    a href="/create" class="nav-link" { "Write" }
                    span class="nav-user" {
                        (avatar::render(&user.username, 28))
                        (user.username)
                    }
                } @else {
                    a href=(LOGIN_URL) class="nav-link" { "Log in" }
                }
            }
        }
    }
}

/// Renders the filter bar above the article list
///
/// Column chips narrow the list to one category, the order toggle flips
/// between newest and most viewed, and the search box round-trips the
/// current needle. Every link preserves the other active filters.
///
/// # Arguments
///
/// * `columns`: All columns, rendered as filter chips
/// * `params`: Raw request parameters for echoing active filters
pub fn filter_bar(columns: &[Column], params: &ListParams) -> Markup {
    let active_column = params.query().column;
    let by_views = params.query().order == crate::query::Order::TotalViews;

    html! {
        div class="filter-bar" {
            form class="search-form" action="/" method="get" {
                input type="text" name="search" placeholder="Search articles"
                    value=(params.search.as_deref().unwrap_or(""));
                @if let Some(order) = &params.order {
                    input type="hidden" name="order" value=(order);
                }
                @if let Some(column) = &params.column {
                    input type="hidden" name="column" value=(column);
                }
                @if let Some(tag) = &params.tag {
                    input type="hidden" name="tag" value=(tag);
                }
                button type="submit" { "Search" }
            }

            div class="column-chips" {
                @for column in columns {
                    @if active_column == Some(column.id) {
                        span class="chip chip-active" { (column.name) }
                    } @else {
                        a class="chip" href=(params.href_for_column(column.id)) { (column.name) }
                    }
                }
            }

            div class="order-toggle" {
                @if by_views {
                    a href=(params.href_for_order(None)) { "Newest" }
                    span class="order-active" { "Most viewed" }
                } @else {
                    span class="order-active" { "Newest" }
                    a href=(params.href_for_order(Some("total_views"))) { "Most viewed" }
                }
            }
        }
    }
}

//! Session resolution and the ownership guard.
//!
//! Authentication itself is external: the auth subsystem issues a `uid`
//! session cookie after login, and this module only resolves it against
//! the users table. Unknown or absent sessions are anonymous readers.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::response::Redirect;

use crate::components::nav::LOGIN_URL;
use crate::error::AppError;
use crate::model::{Article, User};
use crate::server::AppState;

/// The signed-in user, if the request carries a valid session.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<User>);

/// A signed-in user, or a redirect to the external login page.
#[derive(Debug, Clone)]
pub struct RequireUser(pub User);

/// Extracts the `uid` session cookie value.
fn session_user_id(headers: &HeaderMap) -> Option<i64> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == "uid" {
            value.parse::<i64>().ok()
        } else {
            None
        }
    })
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = session_user_id(&parts.headers)
            .and_then(|id| state.store.user(id).ok().flatten());
        Ok(CurrentUser(user))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for RequireUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match CurrentUser::from_request_parts(parts, state).await {
            Ok(CurrentUser(Some(user))) => Ok(RequireUser(user)),
            Ok(CurrentUser(None)) => Err(Redirect::to(LOGIN_URL)),
            Err(infallible) => match infallible {},
        }
    }
}

/// Ownership guard applied uniformly across author-only mutations.
///
/// # Errors
///
/// Returns [`AppError::Forbidden`] when `user` is not the article's
/// author; the caller must not have changed any state yet.
pub fn ensure_author(user: &User, article: &Article) -> Result<(), AppError> {
    if user.id == article.author_id {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

//! HTTP server: routing, shared state and request handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{any, get, post};
use axum::{Form, Router};
use tokio::net::TcpListener;
use tracing::info;

use crate::auth::{ensure_author, CurrentUser, RequireUser};
use crate::error::AppError;
use crate::form::ArticleForm;
use crate::markdown::MarkdownRenderer;
use crate::paginate::{paginate, parse_page};
use crate::query::ListParams;
use crate::store::{ArticleUpdate, NewArticle, Store};
use crate::{assets, pages};

/// Shared handler state: the store plus one renderer.
///
/// The renderer loads syntect's syntax definitions once at startup and
/// is shared read-only across requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    renderer: Arc<MarkdownRenderer>,
}

impl AppState {
    /// Builds handler state around an open store.
    pub fn new(store: Store) -> Self {
        Self {
            store,
            renderer: Arc::new(MarkdownRenderer::new()),
        }
    }
}

/// Builds the application router.
///
/// Method gating is part of the routing table: safe-delete and like only
/// accept POST, so other methods get a 405 without touching the store.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(list))
        .route("/create", get(create_form).post(create_submit))
        .route("/update/:id", get(update_form).post(update_submit))
        .route("/delete/:id", any(delete))
        .route("/safe-delete/:id", post(safe_delete))
        .route("/like/:id", post(like))
        .route("/assets/:file", get(asset))
        .route("/:id", get(detail))
        .with_state(state)
}

/// Binds `addr` and serves until interrupted.
///
/// # Errors
///
/// Returns error if the address cannot be bound or the server fails.
pub async fn run(state: AppState, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Cannot bind to {addr}"))?;
    info!(%addr, "inkpot listening");
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

/// GET `/` with optional `search`, `order`, `column`, `tag`, `page`.
async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, AppError> {
    let articles = state.store.list_articles(&params.query())?;
    let page = paginate(articles, parse_page(params.page.as_deref()));
    let columns = state.store.columns()?;
    Ok(Html(
        pages::list::render(&page, &columns, &params, user.as_ref()).into_string(),
    ))
}

/// GET `/{id}`: renders the article and bumps its view counter.
async fn detail(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    state.store.increment_views(id)?;
    let article = state.store.article(id)?;
    let comments = state.store.comments_for(id)?;
    let rendered = state.renderer.render_with_toc(&article.body)?;
    Ok(Html(
        pages::detail::render(&article, &rendered, &comments, user.as_ref()).into_string(),
    ))
}

/// GET `/create`: the blank article form.
async fn create_form(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Html<String>, AppError> {
    let columns = state.store.columns()?;
    Ok(Html(pages::editor::create(&columns, &user).into_string()))
}

/// POST `/create`: validates and persists a new article.
async fn create_submit(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Form(form): Form<ArticleForm>,
) -> Result<Redirect, AppError> {
    let valid = form.validate()?;
    let id = state.store.create_article(&NewArticle {
        title: valid.title,
        body: valid.body,
        author_id: user.id,
        column_id: valid.column_id,
        tags: valid.tags,
        avatar: valid.avatar,
    })?;
    info!(article = id, author = %user.username, "article created");
    Ok(Redirect::to("/"))
}

/// GET `/update/{id}`: the edit form, authors only.
async fn update_form(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let article = state.store.article(id)?;
    ensure_author(&user, &article)?;
    let columns = state.store.columns()?;
    Ok(Html(
        pages::editor::update(&article, &columns, &user).into_string(),
    ))
}

/// POST `/update/{id}`: overwrites the article, authors only.
async fn update_submit(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<i64>,
    Form(form): Form<ArticleForm>,
) -> Result<Redirect, AppError> {
    let article = state.store.article(id)?;
    ensure_author(&user, &article)?;
    let valid = form.validate()?;
    state.store.update_article(
        id,
        &ArticleUpdate {
            title: valid.title,
            body: valid.body,
            avatar: valid.avatar,
            tags: valid.tags,
        },
    )?;
    info!(article = id, author = %user.username, "article updated");
    Ok(Redirect::to(&format!("/{id}")))
}

/// `/delete/{id}`: unconditional delete, answering any method. The
/// POST-gated variant below is the stricter tier.
async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    remove(&state, id)
}

/// POST `/safe-delete/{id}`: the method-gated delete variant.
async fn safe_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    remove(&state, id)
}

fn remove(state: &AppState, id: i64) -> Result<Redirect, AppError> {
    state.store.delete_article(id)?;
    info!(article = id, "article deleted");
    Ok(Redirect::to("/"))
}

/// POST `/like/{id}`: bumps the like counter, plain acknowledgment.
async fn like(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<&'static str, AppError> {
    state.store.increment_likes(id)?;
    Ok("success")
}

/// GET `/assets/{file}`: embedded stylesheets.
async fn asset(Path(file): Path<String>) -> Response {
    match assets::stylesheet(&file) {
        Some(css) => ([(CONTENT_TYPE, "text/css; charset=utf-8")], css).into_response(),
        None => (StatusCode::NOT_FOUND, "stylesheet not found").into_response(),
    }
}

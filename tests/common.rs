//! Shared test utilities for integration tests.
//!
//! Provides a seeded in-memory site plus helpers for driving the router
//! with plain requests, signed-in requests and form submissions.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use http_body_util::BodyExt;
use inkpot::server::{app, AppState};
use inkpot::{NewArticle, Store};
use tower::ServiceExt;

/// A blog instance over an in-memory database, pre-seeded with two users
/// and two columns.
pub struct TestSite {
    pub state: AppState,
    pub alice: i64,
    pub bob: i64,
    pub tech: i64,
    pub life: i64,
}

/// Builds a seeded test site.
pub fn site() -> TestSite {
    let store = Store::open_in_memory().expect("in-memory store");
    let alice = store.ensure_user("alice").expect("user").id;
    let bob = store.ensure_user("bob").expect("user").id;
    let tech = store.ensure_column("Tech").expect("column").id;
    let life = store.ensure_column("Life").expect("column").id;

    TestSite {
        state: AppState::new(store),
        alice,
        bob,
        tech,
        life,
    }
}

impl TestSite {
    pub fn store(&self) -> &Store {
        &self.state.store
    }

    /// Inserts a bare article directly through the store.
    ///
    /// # Returns
    ///
    /// The id of the created article.
    pub fn publish(&self, author_id: i64, title: &str, body: &str) -> i64 {
        self.publish_article(NewArticle {
            title: title.to_string(),
            body: body.to_string(),
            author_id,
            column_id: None,
            tags: Vec::new(),
            avatar: None,
        })
    }

    /// Inserts an article with full control over every field.
    pub fn publish_article(&self, article: NewArticle) -> i64 {
        self.store().create_article(&article).expect("create article")
    }

    /// Performs an anonymous GET.
    pub async fn get(&self, uri: &str) -> Response {
        let request = Request::get(uri).body(Body::empty()).expect("request");
        self.send(request).await
    }

    /// Performs a GET carrying `user_id`'s session cookie.
    pub async fn get_as(&self, uri: &str, user_id: i64) -> Response {
        let request = Request::get(uri)
            .header(header::COOKIE, format!("uid={user_id}"))
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }

    /// Posts a urlencoded form body anonymously.
    pub async fn post_form(&self, uri: &str, body: &str) -> Response {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("request");
        self.send(request).await
    }

    /// Posts a urlencoded form body with `user_id`'s session cookie.
    pub async fn post_form_as(&self, uri: &str, user_id: i64, body: &str) -> Response {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(header::COOKIE, format!("uid={user_id}"))
            .body(Body::from(body.to_string()))
            .expect("request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> Response {
        app(self.state.clone())
            .oneshot(request)
            .await
            .expect("router response")
    }
}

/// Collects a response body into a string.
pub async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

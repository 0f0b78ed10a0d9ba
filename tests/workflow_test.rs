//! Write-side integration tests: authoring workflows, authorization
//! gates and counter mutations.

mod common;

use axum::http::{header, StatusCode};
use common::{body_text, site};
use inkpot::StoreError;

fn location(response: &axum::response::Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn test_create_requires_a_session() {
    // Arrange
    let site = site();

    // Act
    let form_page = site.get("/create").await;
    let submission = site.post_form("/create", "title=Hello&body=World").await;

    // Assert: both hops bounce to the login page, nothing is stored
    assert_eq!(form_page.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&form_page), "/accounts/login/");
    assert_eq!(submission.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&submission), "/accounts/login/");
    let listed = site
        .store()
        .list_articles(&Default::default())
        .expect("list");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_create_workflow() {
    // Arrange
    let site = site();
    let form = format!(
        "title=Hello+world&body=First+post&column={}&tags=rust%2C+web&avatar=",
        site.tech
    );

    // Act
    let response = site.post_form_as("/create", site.alice, &form).await;

    // Assert
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    let listed = site
        .store()
        .list_articles(&Default::default())
        .expect("list");
    assert_eq!(listed.len(), 1);
    let article = &listed[0];
    assert_eq!(article.title, "Hello world");
    assert_eq!(article.author_name, "alice");
    assert_eq!(article.column.as_ref().map(|c| c.name.as_str()), Some("Tech"));
    assert_eq!(article.tags, vec!["rust", "web"]);
    assert_eq!(article.avatar, None);
}

#[tokio::test]
async fn test_create_rejects_invalid_form_without_persisting() {
    // Arrange
    let site = site();

    // Act
    let response = site
        .post_form_as("/create", site.alice, "title=Hello&body=")
        .await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let listed = site
        .store()
        .list_articles(&Default::default())
        .expect("list");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_update_workflow() {
    // Arrange
    let site = site();
    let id = site.publish(site.alice, "Draft", "Original body");

    // Act
    let form_page = site.get_as(&format!("/update/{id}"), site.alice).await;
    let submission = site
        .post_form_as(
            &format!("/update/{id}"),
            site.alice,
            "title=Published&body=Edited+body&column=none&tags=notes",
        )
        .await;

    // Assert
    assert_eq!(form_page.status(), StatusCode::OK);
    assert!(body_text(form_page).await.contains("Original body"));
    assert_eq!(submission.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&submission), format!("/{id}"));
    let article = site.store().article(id).expect("fetch");
    assert_eq!(article.title, "Published");
    assert_eq!(article.body, "Edited body");
    assert_eq!(article.tags, vec!["notes"]);
}

#[tokio::test]
async fn test_update_by_non_author_is_forbidden() {
    // Arrange
    let site = site();
    let id = site.publish(site.alice, "Alice's post", "Body");

    // Act
    let form_page = site.get_as(&format!("/update/{id}"), site.bob).await;
    let submission = site
        .post_form_as(
            &format!("/update/{id}"),
            site.bob,
            "title=Hijacked&body=Changed",
        )
        .await;

    // Assert: both hops are refused before any state change
    assert_eq!(form_page.status(), StatusCode::FORBIDDEN);
    assert_eq!(submission.status(), StatusCode::FORBIDDEN);
    let article = site.store().article(id).expect("fetch");
    assert_eq!(article.title, "Alice's post");
    assert_eq!(article.body, "Body");
}

#[tokio::test]
async fn test_every_detail_view_counts_once() {
    // Arrange
    let site = site();
    let id = site.publish(site.alice, "Counted", "Body");

    // Act
    for _ in 0..3 {
        let response = site.get(&format!("/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Assert
    assert_eq!(site.store().article(id).expect("fetch").total_views, 3);
}

#[tokio::test]
async fn test_like_acknowledges_and_increments() {
    // Arrange
    let site = site();
    let id = site.publish(site.alice, "Likeable", "Body");

    // Act
    let response = site.post_form(&format!("/like/{id}"), "").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "success");
    assert_eq!(site.store().article(id).expect("fetch").likes, 1);
}

#[tokio::test]
async fn test_like_unknown_article_is_404() {
    // Arrange
    let site = site();

    // Act
    let response = site.post_form("/like/999", "").await;

    // Assert
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_safe_delete_refuses_get() {
    // Arrange
    let site = site();
    let id = site.publish(site.alice, "Protected", "Body");

    // Act
    let response = site.get(&format!("/safe-delete/{id}")).await;

    // Assert: wrong method, record untouched
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(site.store().article(id).is_ok());
}

#[tokio::test]
async fn test_safe_delete_removes_on_post() {
    // Arrange
    let site = site();
    let id = site.publish(site.alice, "Doomed", "Body");

    // Act
    let response = site.post_form(&format!("/safe-delete/{id}"), "").await;

    // Assert
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert!(matches!(
        site.store().article(id),
        Err(StoreError::NotFound)
    ));
}

#[tokio::test]
async fn test_unconditional_delete_works_on_get() {
    // Arrange
    let site = site();
    let id = site.publish(site.alice, "Unprotected", "Body");

    // Act
    let response = site.get(&format!("/delete/{id}")).await;

    // Assert
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(matches!(
        site.store().article(id),
        Err(StoreError::NotFound)
    ));
}

#[tokio::test]
async fn test_unconditional_delete_accepts_post_too() {
    // Arrange
    let site = site();
    let id = site.publish(site.alice, "Unprotected", "Body");

    // Act
    let response = site.post_form(&format!("/delete/{id}"), "").await;

    // Assert: unlike safe-delete, no method is refused
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert!(matches!(
        site.store().article(id),
        Err(StoreError::NotFound)
    ));
}

#[tokio::test]
async fn test_detail_shows_author_actions_only_to_the_author() {
    // Arrange
    let site = site();
    let id = site.publish(site.alice, "Mine", "Body");

    // Act
    let as_author = body_text(site.get_as(&format!("/{id}"), site.alice).await).await;
    let as_visitor = body_text(site.get_as(&format!("/{id}"), site.bob).await).await;

    // Assert
    assert!(as_author.contains(&format!("/update/{id}")));
    assert!(as_author.contains(&format!("/safe-delete/{id}")));
    assert!(!as_visitor.contains(&format!("/update/{id}")));
    assert!(!as_visitor.contains(&format!("/safe-delete/{id}")));
}

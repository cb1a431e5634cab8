/*
 * Responsibility
 * - /posts 系 handler (一覧 / 新規フォーム / 詳細 / 作成 / 編集フォーム / 更新 / 削除)
 * - Path の {post_id} は公開 ID → extractor で復号化して内部 ID に変換して受け取る
 * - 編集系は owner middleware が読み込んだ OwnedPost を受け取る (所有者チェック済み)
 * - 入力エラーはフォームの再描画、それ以外は AppError (エラーページ) へ
 */
use axum::{
    Extension,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::SignedCookieJar;
use futures::future::try_join_all;
use validator::Validate;

use crate::{
    error::AppError,
    services::date_format::format_date,
    state::AppState,
    web::{
        extractors::{CurrentUser, HtmlForm, OwnedPost, PublicPostId},
        flash,
        forms::{field_errors, posts::PostForm},
        views::{self, PostListItem, PostsEdit, PostsIndex, PostsNew, PostsShow},
    },
};

const POSTS_PATH: &str = "/posts";

pub async fn list_posts(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list_posts().await?;

    // author lookups are independent reads; issue them together, keep list order
    let state = &state;
    let posts = try_join_all(rows.into_iter().map(|row| async move {
        let user = state.store.find_user(row.author_id).await?;
        Ok::<_, AppError>(PostListItem {
            id: state.id_codec.encode(row.post_id)?,
            content: row.content,
            user,
        })
    }))
    .await?;

    let (jar, notice) = flash::take(jar);
    let page = views::render(&PostsIndex { notice, posts })?;
    Ok((jar, page))
}

pub async fn new_post(jar: SignedCookieJar) -> Result<impl IntoResponse, AppError> {
    let (jar, notice) = flash::take(jar);
    let page = views::render(&PostsNew {
        notice,
        content: String::new(),
        errors: Vec::new(),
    })?;
    Ok((jar, page))
}

pub async fn show_post(
    State(state): State<AppState>,
    CurrentUser(auth): CurrentUser,
    post_id: PublicPostId,
    jar: SignedCookieJar,
) -> Result<impl IntoResponse, AppError> {
    let post = state
        .store
        .find_post(post_id.id)
        .await?
        .ok_or_else(|| AppError::not_found("post"))?;

    let user = state.store.find_user(post.author_id).await?;
    let like_count = state.store.count_likes(post.post_id).await?;
    let has_liked = state.store.has_liked(auth.user_id, post.post_id).await?;

    let (jar, notice) = flash::take(jar);
    let page = views::render(&PostsShow {
        notice,
        post_id: state.id_codec.encode(post.post_id)?,
        is_owner: post.author_id == auth.user_id,
        edited: post.updated_at > post.created_at,
        content: post.content,
        post_created_at: format_date(post.created_at),
        user,
        like_count,
        has_liked,
    })?;
    Ok((jar, page))
}

pub async fn create_post(
    State(state): State<AppState>,
    CurrentUser(auth): CurrentUser,
    jar: SignedCookieJar,
    HtmlForm(form): HtmlForm<PostForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.validate() {
        let page = views::render(&PostsNew {
            notice: None,
            content: form.content,
            errors: field_errors(&errors),
        })?;
        return Ok(page.into_response());
    }

    let post = state.store.create_post(&form.content, auth.user_id).await?;
    tracing::info!(
        post_id = post.post_id,
        user_id = %auth.user_id,
        user_name = %auth.user_name,
        "post created"
    );

    let jar = flash::set(jar, "Post successfully created");
    Ok((jar, Redirect::to(POSTS_PATH)).into_response())
}

pub async fn edit_post(
    State(state): State<AppState>,
    Extension(OwnedPost(post)): Extension<OwnedPost>,
    jar: SignedCookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (jar, notice) = flash::take(jar);
    let page = views::render(&PostsEdit {
        notice,
        post_id: state.id_codec.encode(post.post_id)?,
        content: post.content,
        errors: Vec::new(),
    })?;
    Ok((jar, page))
}

pub async fn update_post(
    State(state): State<AppState>,
    Extension(OwnedPost(post)): Extension<OwnedPost>,
    jar: SignedCookieJar,
    HtmlForm(form): HtmlForm<PostForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.validate() {
        let page = views::render(&PostsEdit {
            notice: None,
            post_id: state.id_codec.encode(post.post_id)?,
            content: form.content,
            errors: field_errors(&errors),
        })?;
        return Ok(page.into_response());
    }

    // deleted between the ownership check and now
    let updated = state
        .store
        .update_post_content(post.post_id, &form.content)
        .await?
        .ok_or_else(|| AppError::not_found("post"))?;
    tracing::info!(post_id = updated.post_id, "post updated");

    let jar = flash::set(jar, "Post successfully edited");
    Ok((jar, Redirect::to(POSTS_PATH)).into_response())
}

pub async fn delete_post(
    State(state): State<AppState>,
    Extension(OwnedPost(post)): Extension<OwnedPost>,
    jar: SignedCookieJar,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state.store.delete_post(post.post_id).await?;
    tracing::info!(post_id = post.post_id, deleted, "post deleted");

    let jar = flash::set(jar, "Post successfully deleted");
    Ok((jar, Redirect::to(POSTS_PATH)))
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::{get, post},
    };
    use tower::ServiceExt;

    use super::{create_post, show_post};
    use crate::test_support::{TestApp, TestResponse};

    #[tokio::test]
    async fn unauthenticated_requests_are_sent_to_login() {
        let mut app = TestApp::new();
        let alice = app.state.store.create_user("alice", None).await.unwrap();
        let post = app.state.store.create_post("hello", alice.id).await.unwrap();
        let public_id = app.public_id(post.post_id);

        for uri in ["/posts", "/posts/new"] {
            let res = app.get(uri).await;
            assert_eq!(res.status, StatusCode::SEE_OTHER);
            assert_eq!(res.location.as_deref(), Some("/login"));
        }

        let res = app.post_form("/posts", "content=anonymous").await;
        assert_eq!(res.status, StatusCode::SEE_OTHER);
        assert_eq!(res.location.as_deref(), Some("/login"));

        let res = app
            .post_form(&format!("/posts/{public_id}?_method=DELETE"), "")
            .await;
        assert_eq!(res.status, StatusCode::SEE_OTHER);
        assert_eq!(res.location.as_deref(), Some("/login"));

        let posts = app.state.store.list_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content, "hello");
    }

    #[tokio::test]
    async fn handlers_without_the_session_layer_fail_with_a_server_error() {
        let app = TestApp::new();
        let alice = app.state.store.create_user("alice", None).await.unwrap();
        let stored = app.state.store.create_post("hello", alice.id).await.unwrap();
        let public_id = app.public_id(stored.post_id);

        let router = Router::new()
            .route("/posts", post(create_post))
            .route("/posts/{post_id}", get(show_post))
            .with_state(app.state.clone());

        for (method, uri) in [("GET", format!("/posts/{public_id}")), ("POST", "/posts".to_string())] {
            let req = Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("content=unattributed"))
                .unwrap();
            let res = TestResponse::read(router.clone().oneshot(req).await.unwrap()).await;

            assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(res.body.contains(r#"<h1 class="error-status">500</h1>"#));
            assert!(!res.body.contains("like-count"));
        }

        assert_eq!(app.state.store.list_posts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn undecodable_form_bodies_render_the_error_page() {
        let mut app = TestApp::new();
        let alice = app.login("alice").await;
        let post = app.state.store.create_post("untouched", alice).await.unwrap();
        let public_id = app.public_id(post.post_id);

        // no Content-Type header
        let res = app.send("POST", "/posts", None).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert!(res.body.contains(r#"<h1 class="error-status">400</h1>"#));
        assert!(res.body.contains(r#"class="error-message""#));

        let res = app.send("PATCH", &format!("/posts/{public_id}"), None).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert!(res.body.contains(r#"<h1 class="error-status">400</h1>"#));

        let posts = app.state.store.list_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content, "untouched");
    }

    #[tokio::test]
    async fn new_post_renders_an_empty_form() {
        let mut app = TestApp::new();
        app.login("alice").await;

        let res = app.get("/posts/new").await;
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.body.contains(r#"<textarea name="content"></textarea>"#));
        assert!(!res.body.contains(r#"class="errors""#));
    }

    #[tokio::test]
    async fn empty_content_rerenders_the_form_and_persists_nothing() {
        let mut app = TestApp::new();
        app.login("alice").await;

        let res = app.post_form("/posts", "content=").await;
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.body.contains(r#"class="errors""#));
        assert!(res.body.contains("be blank"));

        // a missing field is treated as empty
        let res = app.post_form("/posts", "").await;
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.body.contains("be blank"));

        assert!(app.state.store.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn created_post_is_listed_with_a_one_shot_notice() {
        let mut app = TestApp::new();
        app.login("alice").await;

        let res = app.post_form("/posts", "content=hello+board").await;
        assert_eq!(res.status, StatusCode::SEE_OTHER);
        assert_eq!(res.location.as_deref(), Some("/posts"));

        let res = app.get("/posts").await;
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.body.contains("hello board"));
        assert!(res.body.contains("alice"));
        assert!(res.body.contains("Post successfully created"));

        let res = app.get("/posts").await;
        assert!(res.body.contains("hello board"));
        assert!(!res.body.contains("Post successfully created"));
    }

    #[tokio::test]
    async fn show_renders_author_and_like_state() {
        let mut app = TestApp::new();
        let alice = app.login("alice").await;
        let post = app.state.store.create_post("liked post", alice).await.unwrap();
        let public_id = app.public_id(post.post_id);

        let res = app.get(&format!("/posts/{public_id}")).await;
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.body.contains("liked post"));
        assert!(res.body.contains(r#"<span class="like-count">0</span>"#));
        assert!(res.body.contains(r#"data-has-liked="false""#));
        assert!(res.body.contains(&format!("/posts/{public_id}/edit")));
    }

    #[tokio::test]
    async fn unknown_or_malformed_post_ids_never_render_the_detail_view() {
        let mut app = TestApp::new();
        app.login("alice").await;

        let missing = app.public_id(999);
        let res = app.get(&format!("/posts/{missing}")).await;
        assert_eq!(res.status, StatusCode::NOT_FOUND);
        assert!(!res.body.contains("like-count"));

        let res = app.get("/posts/not-a-valid-id!").await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert!(!res.body.contains("like-count"));
    }

    #[tokio::test]
    async fn owner_can_edit_through_method_override() {
        let mut app = TestApp::new();
        let alice = app.login("alice").await;
        let post = app.state.store.create_post("before", alice).await.unwrap();
        let public_id = app.public_id(post.post_id);

        let res = app.get(&format!("/posts/{public_id}/edit")).await;
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.body.contains("before"));
        assert!(res.body.contains(&format!("/posts/{public_id}?_method=PATCH")));

        let res = app
            .post_form(&format!("/posts/{public_id}?_method=PATCH"), "content=after")
            .await;
        assert_eq!(res.status, StatusCode::SEE_OTHER);
        assert_eq!(res.location.as_deref(), Some("/posts"));

        let stored = app.state.store.find_post(post.post_id).await.unwrap().unwrap();
        assert_eq!(stored.content, "after");

        let res = app.get("/posts").await;
        assert!(res.body.contains("Post successfully edited"));
    }

    #[tokio::test]
    async fn empty_edit_rerenders_the_edit_form_and_keeps_the_post() {
        let mut app = TestApp::new();
        let alice = app.login("alice").await;
        let post = app.state.store.create_post("keep me", alice).await.unwrap();
        let public_id = app.public_id(post.post_id);

        let res = app
            .send("PATCH", &format!("/posts/{public_id}"), Some("content="))
            .await;
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.body.contains("be blank"));
        assert!(res.body.contains(&format!("/posts/{public_id}?_method=PATCH")));

        let stored = app.state.store.find_post(post.post_id).await.unwrap().unwrap();
        assert_eq!(stored.content, "keep me");
    }

    #[tokio::test]
    async fn non_owner_cannot_reach_edit_update_or_delete() {
        let mut app = TestApp::new();
        let alice = app.login("alice").await;
        let post = app.state.store.create_post("alice's", alice).await.unwrap();
        let public_id = app.public_id(post.post_id);

        app.login("bob").await;

        let res = app.get(&format!("/posts/{public_id}/edit")).await;
        assert_eq!(res.status, StatusCode::FORBIDDEN);

        let res = app
            .send("PATCH", &format!("/posts/{public_id}"), Some("content=hijacked"))
            .await;
        assert_eq!(res.status, StatusCode::FORBIDDEN);

        let res = app
            .post_form(&format!("/posts/{public_id}?_method=DELETE"), "")
            .await;
        assert_eq!(res.status, StatusCode::FORBIDDEN);

        let stored = app.state.store.find_post(post.post_id).await.unwrap().unwrap();
        assert_eq!(stored.content, "alice's");

        // bob can still read it, without owner actions
        let res = app.get(&format!("/posts/{public_id}")).await;
        assert_eq!(res.status, StatusCode::OK);
        assert!(!res.body.contains(&format!("/posts/{public_id}/edit")));
    }

    #[tokio::test]
    async fn deleted_post_can_no_longer_be_fetched() {
        let mut app = TestApp::new();
        let alice = app.login("alice").await;
        let post = app.state.store.create_post("short lived", alice).await.unwrap();
        let public_id = app.public_id(post.post_id);

        let res = app
            .post_form(&format!("/posts/{public_id}?_method=DELETE"), "")
            .await;
        assert_eq!(res.status, StatusCode::SEE_OTHER);
        assert_eq!(res.location.as_deref(), Some("/posts"));

        let res = app.get(&format!("/posts/{public_id}")).await;
        assert_eq!(res.status, StatusCode::NOT_FOUND);

        let res = app.send("DELETE", &format!("/posts/{public_id}"), None).await;
        assert_eq!(res.status, StatusCode::NOT_FOUND);

        let res = app.get("/posts").await;
        assert!(res.body.contains("Post successfully deleted"));
        assert!(!res.body.contains("short lived"));
    }
}

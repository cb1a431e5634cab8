//! askama templates (one struct per view under `templates/`).
//!
//! Every page extends `layout.html`, which shows the one-shot `notice` when present.

use askama::Template;
use axum::response::Html;

use crate::error::AppError;
use crate::repos::UserRow;
use crate::web::forms::FieldError;

/// Render a template into an HTML response; failures become `AppError::Internal`.
pub fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

pub struct PostListItem {
    // public id
    pub id: String,
    pub content: String,
    pub user: Option<UserRow>,
}

#[derive(Template)]
#[template(path = "posts/index.html")]
pub struct PostsIndex {
    pub notice: Option<String>,
    pub posts: Vec<PostListItem>,
}

#[derive(Template)]
#[template(path = "posts/new.html")]
pub struct PostsNew {
    pub notice: Option<String>,
    pub content: String,
    pub errors: Vec<FieldError>,
}

#[derive(Template)]
#[template(path = "posts/show.html")]
pub struct PostsShow {
    pub notice: Option<String>,
    pub post_id: String,
    pub content: String,
    pub post_created_at: String,
    pub edited: bool,
    pub user: Option<UserRow>,
    pub like_count: i64,
    pub has_liked: bool,
    pub is_owner: bool,
}

#[derive(Template)]
#[template(path = "posts/edit.html")]
pub struct PostsEdit {
    pub notice: Option<String>,
    pub post_id: String,
    pub content: String,
    pub errors: Vec<FieldError>,
}

#[derive(Template)]
#[template(path = "sessions/new.html")]
pub struct SessionsNew {
    pub notice: Option<String>,
    pub user_name: String,
    pub errors: Vec<FieldError>,
}

#[derive(Template)]
#[template(path = "errors/show.html")]
pub struct ErrorPage {
    pub notice: Option<String>,
    pub status: u16,
    pub message: String,
}

use serde::Deserialize;
use validator::Validate;

/// Body of `POST /posts` and `PATCH /posts/{post_id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct PostForm {
    // missing field == empty
    #[serde(default)]
    #[validate(length(min = 1, message = "Content can't be blank"))]
    pub content: String,
}

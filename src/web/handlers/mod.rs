pub mod health;
pub mod likes;
pub mod posts;
pub mod sessions;

/*
 * Responsibility
 * - server-rendered な画面側 (routes / handlers / forms / views) の入口
 * - routes() / session_routes() の re-export
 */
pub mod extractors;
pub mod flash;
pub mod forms;
pub mod handlers;
mod routes;
pub mod session;
pub mod views;

pub use routes::{routes, session_routes};

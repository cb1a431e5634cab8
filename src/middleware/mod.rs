/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth (session / owner), HTTP 共通 layer, security headers, method override
 */
pub mod auth;
pub mod http;
pub mod method_override;
pub mod security_headers;

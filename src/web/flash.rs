//! One-shot "dialog" messages carried across a redirect in a signed cookie.
//!
//! `set` is called by the handler that redirects; the next rendered page calls `take`,
//! which returns the message and removes the cookie in the same response.

use axum_extra::extract::{SignedCookieJar, cookie::Cookie};
use url::form_urlencoded;

pub const FLASH_COOKIE: &str = "flash";

pub fn set(jar: SignedCookieJar, message: &str) -> SignedCookieJar {
    // cookie values can't carry spaces or `;` as-is
    let encoded: String = form_urlencoded::byte_serialize(message.as_bytes()).collect();
    jar.add(
        Cookie::build((FLASH_COOKIE, encoded))
            .path("/")
            .http_only(true),
    )
}

pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Option<String>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };

    // A serialized message has no `=` or `&` left, so it parses as a single bare key.
    let message = form_urlencoded::parse(cookie.value().as_bytes())
        .next()
        .map(|(message, _)| message.into_owned())
        .filter(|m| !m.is_empty());

    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, message)
}

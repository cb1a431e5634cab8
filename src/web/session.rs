//! Session cookie: the signed user id of the logged-in user.
//!
//! The cookie is signed with the `AppState` key, so a client can't forge another
//! user's id. Its contents are only trusted after `SignedCookieJar` verified the MAC.

use axum_extra::extract::{
    SignedCookieJar,
    cookie::{Cookie, SameSite},
};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "session";

pub fn sign_in(jar: SignedCookieJar, user_id: Uuid) -> SignedCookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, user_id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

pub fn sign_out(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}

pub fn current_user_id(jar: &SignedCookieJar) -> Option<Uuid> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

#[cfg(test)]
mod tests {
    use axum_extra::extract::cookie::Key;

    use super::*;

    #[test]
    fn signed_in_user_is_read_back_until_sign_out() {
        let user_id = Uuid::new_v4();
        let jar = sign_in(SignedCookieJar::new(Key::generate()), user_id);
        assert_eq!(current_user_id(&jar), Some(user_id));

        let jar = sign_out(jar);
        assert_eq!(current_user_id(&jar), None);
    }
}

//! In-process client for router tests: the real application over a `MemoryStore`,
//! with a tiny cookie jar so sessions and flash messages survive between requests.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use axum_extra::extract::cookie::Key;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use crate::{
    app::build_app,
    config::AppEnv,
    middleware::method_override::App,
    repos::MemoryStore,
    services::id_codec::IdCodec,
    state::AppState,
};

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub async fn read(res: Response) -> Self {
        let status = res.status();
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = res
            .into_body()
            .collect()
            .await
            .expect("readable body")
            .to_bytes();

        Self {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

pub struct TestApp {
    app: App,
    pub state: AppState,
    cookies: BTreeMap<String, String>,
}

impl TestApp {
    pub fn new() -> Self {
        let id_codec = IdCodec::new(10, ALPHABET).expect("valid sqids settings");
        let state = AppState::new(Arc::new(MemoryStore::new()), id_codec, Key::generate());
        let app = build_app(state.clone(), AppEnv::Development);

        Self {
            app,
            state,
            cookies: BTreeMap::new(),
        }
    }

    pub fn public_id(&self, post_id: i64) -> String {
        self.state.id_codec.encode(post_id).expect("encodable id")
    }

    pub fn set_cookie(&mut self, name: &str, value: &str) {
        self.cookies.insert(name.to_string(), value.to_string());
    }

    /// Log in through `POST /login` and return the user's id.
    pub async fn login(&mut self, user_name: &str) -> Uuid {
        let res = self
            .post_form("/login", &format!("user_name={user_name}"))
            .await;
        assert_eq!(res.status, StatusCode::SEE_OTHER, "login failed");

        self.state
            .store
            .find_user_by_name(user_name)
            .await
            .expect("store")
            .expect("user exists after login")
            .id
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send("GET", uri, None).await
    }

    pub async fn post_form(&mut self, uri: &str, form: &str) -> TestResponse {
        self.send("POST", uri, Some(form)).await
    }

    pub async fn send(&mut self, method: &str, uri: &str, form: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);

        if !self.cookies.is_empty() {
            let cookie_header = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            builder = builder.header(header::COOKIE, cookie_header);
        }

        let body = match form {
            Some(form) => {
                builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(form.to_string())
            }
            None => Body::empty(),
        };

        let req = builder.body(body).expect("valid request");
        let res = self.app.clone().oneshot(req).await.expect("infallible");

        for value in res.headers().get_all(header::SET_COOKIE) {
            self.store_cookie(value.to_str().expect("ascii set-cookie"));
        }

        TestResponse::read(res).await
    }

    fn store_cookie(&mut self, set_cookie: &str) {
        let pair = set_cookie.split(';').next().unwrap_or_default();
        let Some((name, value)) = pair.split_once('=') else {
            return;
        };

        let removed = value.is_empty() || set_cookie.to_ascii_lowercase().contains("max-age=0");
        if removed {
            self.cookies.remove(name.trim());
        } else {
            self.cookies
                .insert(name.trim().to_string(), value.trim().to_string());
        }
    }
}

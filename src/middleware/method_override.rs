//! HTML forms can only send GET/POST. A form that means PATCH or DELETE posts to
//! `...?_method=PATCH` (or `DELETE`), and the method is rewritten here.
//!
//! This has to happen *before* routing, so it wraps the whole `Router` as a service
//! instead of being added with `Router::layer` (which runs after the route is matched).

use axum::{Router, extract::Request, http::Method};
use tower::{
    Layer,
    util::{MapRequest, MapRequestLayer},
};
use url::form_urlencoded;

pub const OVERRIDE_PARAM: &str = "_method";

/// The application service: the router behind the method override.
pub type App = MapRequest<Router, fn(Request) -> Request>;

pub fn apply(router: Router) -> App {
    MapRequestLayer::new(override_method as fn(Request) -> Request).layer(router)
}

fn override_method(mut req: Request) -> Request {
    if req.method() != Method::POST {
        return req;
    }

    let Some(query) = req.uri().query() else {
        return req;
    };

    let method = form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == OVERRIDE_PARAM)
        .and_then(|(_, value)| match value.to_ascii_uppercase().as_str() {
            "PATCH" => Some(Method::PATCH),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        });

    if let Some(method) = method {
        tracing::debug!(%method, uri = %req.uri(), "method override");
        *req.method_mut() = method;
    }

    req
}

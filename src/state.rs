/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - store: Arc<dyn Store>, id_codec: IdCodec, cookie_key: Key
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::{repos::Store, services::id_codec::IdCodec};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub id_codec: IdCodec,
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, id_codec: IdCodec, cookie_key: Key) -> Self {
        Self {
            store,
            id_codec,
            cookie_key,
        }
    }
}

// SignedCookieJar を extractor として使うため
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

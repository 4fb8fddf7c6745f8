//! Visitor session helpers: CSRF tokens and the notification client id.

pub mod csrf;

use actix_session::Session;
use rand::Rng;

const CLIENT_KEY: &str = "client_id";

/// Random 32-byte hex token.
pub(crate) fn random_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();
    hex::encode(bytes)
}

/// Stable per-visitor id used to address the notification queue.
/// Created on first use and kept for the lifetime of the session cookie.
pub fn client_id(session: &Session) -> String {
    if let Ok(Some(id)) = session.get::<String>(CLIENT_KEY) {
        return id;
    }
    let id = random_token();
    if let Err(e) = session.insert(CLIENT_KEY, &id) {
        log::warn!("Failed to store client id in session: {e}");
    }
    id
}

//! Shared test infrastructure.
//!
//! - `test_config()` - configuration with defaults and no session key
//! - `test_app!(hub)` - full application service around a given hub
//!   (needs `#[macro_use] mod common;`)
//! - `Visitor` - carries the session cookie between requests

#![allow(dead_code)]

use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::test::TestRequest;
use regex::Regex;

use scholarhub::config::AppConfig;
use scholarhub::notifications::NotificationHub;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const STUDENT_EMAIL: &str = "user@example.com";
pub const STRONG_PASSWORD: &str = "Secret123";

// ============================================================================
// APP SETUP
// ============================================================================

pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|_| None)
}

pub fn test_hub() -> NotificationHub {
    NotificationHub::new(Duration::from_secs(60))
}

/// Build the application the way `main` does, minus the logger and file
/// service, with an insecure cookie so the test client can replay it.
#[allow(unused_macros)]
macro_rules! test_app {
    ($hub:expr) => {{
        use actix_session::{SessionMiddleware, storage::CookieSessionStore};
        use actix_web::cookie::Key;

        let session_mw = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
            .cookie_secure(false)
            .build();

        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(session_mw)
                .app_data(actix_web::web::Data::new($crate::common::test_config()))
                .app_data(actix_web::web::Data::new($hub))
                .configure(scholarhub::routes::configure),
        )
        .await
    }};
}

// ============================================================================
// VISITOR
// ============================================================================

/// One browser: remembers the cookies the server sets.
#[derive(Default)]
pub struct Visitor {
    cookies: Vec<Cookie<'static>>,
}

impl Visitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> TestRequest {
        self.with_cookies(TestRequest::get().uri(path))
    }

    /// POST a urlencoded form built from `pairs`.
    pub fn post(&self, path: &str, pairs: &[(&str, &str)]) -> TestRequest {
        let body = serde_urlencoded::to_string(pairs).expect("Failed to encode form");
        self.with_cookies(
            TestRequest::post()
                .uri(path)
                .insert_header(("content-type", "application/x-www-form-urlencoded"))
                .set_payload(body),
        )
    }

    fn with_cookies(&self, mut req: TestRequest) -> TestRequest {
        for cookie in &self.cookies {
            req = req.cookie(cookie.clone());
        }
        req
    }

    /// Keep any cookie the response set, replacing older values.
    pub fn remember<B: MessageBody>(&mut self, resp: &ServiceResponse<B>) {
        for cookie in resp.response().cookies() {
            let cookie = cookie.into_owned();
            self.cookies.retain(|c| c.name() != cookie.name());
            self.cookies.push(cookie);
        }
    }
}

// ============================================================================
// HTML HELPERS
// ============================================================================

pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]+)""#).expect("Invalid regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("No CSRF token in page")
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub fn toast_count(html: &str) -> usize {
    html.matches("data-toast-id=").count()
}

pub fn body_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

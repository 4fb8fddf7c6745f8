// Template context structures for Askama templates, grouped by area.

use actix_session::Session;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::nav_item::{Sidebar, SidebarVariant, build_sidebar};
use crate::notifications::{NotificationHub, Toast};
use crate::session::{client_id, csrf};
use crate::ui_state::PageState;

/// Common context shared by every full page.
/// Templates access these as `ctx.app_name`, `ctx.toasts`, etc.
pub struct PageContext {
    pub app_name: String,
    pub csrf_token: String,
    pub toasts: Vec<Toast>,
    pub toast_ttl_ms: u128,
    pub sidebar: Option<Sidebar>,
    pub current_path: String,
    /// Where the toast dismiss form sends the visitor back to.
    pub return_to: String,
    pub state: PageState,
}

impl PageContext {
    /// Entering `current_path` discards whatever state another page left behind.
    pub fn build(
        session: &Session,
        config: &AppConfig,
        hub: &NotificationHub,
        current_path: &str,
        sidebar: Option<SidebarVariant>,
    ) -> Result<Self, AppError> {
        let state = PageState::for_page(session, current_path)?;
        let client = client_id(session);
        Ok(Self {
            app_name: config.app_name.clone(),
            csrf_token: csrf::get_or_create_token(session),
            toasts: hub.visible(&client),
            toast_ttl_ms: hub.ttl().as_millis(),
            sidebar: sidebar.map(|variant| build_sidebar(variant, current_path)),
            current_path: current_path.to_string(),
            return_to: current_path.to_string(),
            state,
        })
    }

    /// Keep the page's query string (e.g. the open tab) across a toast dismiss.
    pub fn keep_query(&mut self, query: &str) {
        if !query.is_empty() {
            self.return_to = format!("{}?{query}", self.current_path);
        }
    }

    pub fn has_sidebar(&self) -> bool {
        self.sidebar.is_some()
    }
}

/// A table row with its checkbox state.
pub struct SelectableRow<T> {
    pub item: T,
    pub selected: bool,
}

impl<T> SelectableRow<T> {
    pub fn wrap(items: Vec<T>, is_selected: impl Fn(&T) -> bool) -> Vec<Self> {
        items
            .into_iter()
            .map(|item| {
                let selected = is_selected(&item);
                SelectableRow { item, selected }
            })
            .collect()
    }
}

mod admin;
mod auth;
mod public;
mod student;

pub use admin::*;
pub use auth::*;
pub use public::*;
pub use student::*;

//! Admin back-office pages. Tables keep their selection, open detail and
//! filters in the page state; every action only emits a notice.

pub mod actions;
pub mod applications;
pub mod dashboard;
pub mod scholarships;
pub mod settings;
pub mod users;

use actix_session::Session;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::forms::is_checked;
use crate::models::nav_item::SidebarVariant;
use crate::notifications::{Notice, NotificationHub};
use crate::session::client_id;
use crate::templates_structs::{PageContext, TableSelection};
use crate::ui_state::PageState;

/// Row checkbox (`id`) or header checkbox (`all`).
#[derive(Deserialize)]
pub struct SelectForm {
    pub csrf_token: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub all: Option<String>,
}

#[derive(Deserialize)]
pub struct BulkForm {
    pub csrf_token: String,
    pub action: String,
}

#[derive(Deserialize)]
pub struct RowActionForm {
    pub csrf_token: String,
    pub id: String,
    pub action: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct ViewForm {
    pub csrf_token: String,
    pub id: String,
}

pub(crate) fn admin_page(
    session: &Session,
    config: &AppConfig,
    hub: &NotificationHub,
    path: &str,
) -> Result<PageContext, AppError> {
    PageContext::build(session, config, hub, path, Some(SidebarVariant::Admin))
}

pub(crate) fn table_selection(state: &PageState, all_ids: &[String]) -> TableSelection {
    TableSelection {
        all_selected: state.selection.all_selected(all_ids),
        count: state.selection.len(),
    }
}

/// Apply one checkbox click to the selection held for `page`.
pub(crate) fn apply_select(
    session: &Session,
    page: &str,
    form: &SelectForm,
    all_ids: &[String],
) -> Result<(), AppError> {
    let mut state = PageState::for_page(session, page)?;
    if is_checked(form.all.as_deref()) {
        state.selection.toggle_all(all_ids);
    } else if all_ids.iter().any(|id| *id == form.id) {
        state.selection.toggle(&form.id);
    } else {
        log::debug!("Ignoring selection of unknown row {:?} on {page}", form.id);
        return Ok(());
    }
    state.save(session)
}

/// Clear the selection held for `page` and push the notice built from the
/// ids it held. An empty selection does nothing, and so does a `None` notice.
pub(crate) fn run_bulk(
    session: &Session,
    hub: &NotificationHub,
    page: &str,
    notice: impl FnOnce(&[String]) -> Option<Notice>,
) -> Result<usize, AppError> {
    let mut state = PageState::for_page(session, page)?;
    if state.selection.is_empty() {
        log::debug!("Bulk action on {page} with nothing selected, ignored");
        return Ok(0);
    }
    let ids = state.selection.take();
    state.save(session)?;
    match notice(&ids) {
        Some(notice) => {
            log::info!("{}: {}", notice.title, notice.description);
            hub.push(&client_id(session), notice);
        }
        None => log::debug!("Bulk action on {page} had no eligible rows"),
    }
    Ok(ids.len())
}

/// Point the page's single detail slot at `id`.
pub(crate) fn open_detail(session: &Session, page: &str, id: &str) -> Result<(), AppError> {
    let mut state = PageState::for_page(session, page)?;
    state.detail.open(id);
    state.notes.clear();
    state.save(session)
}

pub(crate) fn close_detail(session: &Session, page: &str) -> Result<(), AppError> {
    let mut state = PageState::for_page(session, page)?;
    state.detail.close();
    state.notes.clear();
    state.save(session)
}

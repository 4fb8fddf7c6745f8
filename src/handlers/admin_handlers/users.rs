use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};

use super::actions::UserAction;
use super::{
    BulkForm, RowActionForm, SelectForm, ViewForm, admin_page, apply_select, close_detail, open_detail,
    run_bulk, table_selection,
};
use crate::config::AppConfig;
use crate::errors::{AppError, render, see_other};
use crate::forms::SelectOption;
use crate::handlers::auth_handlers::CsrfOnly;
use crate::models::user::{self, UserTab};
use crate::notifications::NotificationHub;
use crate::session::{client_id, csrf};
use crate::templates_structs::{ManageUsersTemplate, SelectableRow};
use crate::ui_state::FilterQuery;

const PAGE: &str = "/admin/dashboard/users";

const ROLE_FILTERS: &[(&str, &str)] = &[("student", "Student"), ("admin", "Admin")];

const STATUS_FILTERS: &[(&str, &str)] = &[
    ("active", "Active"),
    ("inactive", "Inactive"),
    ("suspended", "Suspended"),
];

pub async fn list(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
    query: web::Query<FilterQuery>,
) -> Result<HttpResponse, AppError> {
    let mut ctx = admin_page(&session, &config, &hub, PAGE)?;
    ctx.keep_query(req.query_string());
    if ctx.state.hold_filters(&query) {
        ctx.state.save(&session)?;
    }

    let ids = user::all_ids();
    let selection = table_selection(&ctx.state, &ids);
    let rows = SelectableRow::wrap(user::find_all(), |u| ctx.state.selection.contains(u.id));
    let detail = ctx.state.detail.current().and_then(user::find_by_id);
    let filters = ctx.state.filters.clone();

    render(ManageUsersTemplate {
        role_options: SelectOption::list(ROLE_FILTERS, &filters.role),
        status_options: SelectOption::list(STATUS_FILTERS, &filters.status),
        tab: UserTab::from_param(query.tab.as_deref()),
        rows,
        selection,
        filters,
        detail,
        ctx,
    })
}

pub async fn select(
    session: Session,
    form: web::Form<SelectForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    apply_select(&session, PAGE, &form, &user::all_ids())?;
    Ok(see_other(PAGE))
}

pub async fn bulk(
    hub: web::Data<NotificationHub>,
    session: Session,
    form: web::Form<BulkForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    match UserAction::bulk_from_value(&form.action) {
        Some(action) => {
            run_bulk(&session, &hub, PAGE, |ids| {
                let affected = if action == UserAction::Delete { deletable(ids) } else { ids.len() };
                (affected > 0).then(|| action.bulk_notice(affected))
            })?;
        }
        None => log::debug!("Unknown user bulk action {:?}", form.action),
    }
    Ok(see_other(PAGE))
}

/// Selected rows a bulk delete may remove. Admin accounts are skipped.
fn deletable(ids: &[String]) -> usize {
    let count = ids
        .iter()
        .filter(|id| user::find_by_id(id).is_some_and(|u| u.can_delete()))
        .count();
    if count < ids.len() {
        log::warn!("Bulk delete skipped {} admin account(s)", ids.len() - count);
    }
    count
}

/// Admin accounts cannot be deleted; the menu never offers it.
pub async fn action(
    hub: web::Data<NotificationHub>,
    session: Session,
    form: web::Form<RowActionForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let account = user::find_by_id(&form.id).ok_or(AppError::NotFound)?;
    match UserAction::from_value(&form.action) {
        Some(UserAction::Delete) if !account.can_delete() => {
            log::warn!("Refusing to delete admin account {}", account.id);
        }
        Some(action) => {
            log::info!("User {} {}", account.id, action.past());
            hub.push(&client_id(&session), action.notice());
        }
        None => log::debug!("Unknown user action {:?}", form.action),
    }
    Ok(see_other(PAGE))
}

pub async fn view(
    session: Session,
    form: web::Form<ViewForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let account = user::find_by_id(&form.id).ok_or(AppError::NotFound)?;
    open_detail(&session, PAGE, account.id)?;
    Ok(see_other(PAGE))
}

pub async fn close(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    close_detail(&session, PAGE)?;
    Ok(see_other(PAGE))
}

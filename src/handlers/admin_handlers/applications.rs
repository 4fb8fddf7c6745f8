use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};

use super::actions::Decision;
use super::{
    BulkForm, RowActionForm, SelectForm, ViewForm, admin_page, apply_select, close_detail, open_detail,
    run_bulk, table_selection,
};
use crate::config::AppConfig;
use crate::errors::{AppError, render, see_other};
use crate::forms::SelectOption;
use crate::handlers::auth_handlers::CsrfOnly;
use crate::models::application::{self, ApplicationTab};
use crate::notifications::NotificationHub;
use crate::session::{client_id, csrf};
use crate::templates_structs::{ReviewApplicationsTemplate, SelectableRow};
use crate::ui_state::{FilterQuery, PageState};

const PAGE: &str = "/admin/dashboard/applications";

const SCHOLARSHIP_FILTERS: &[(&str, &str)] = &[
    ("xyz", "XYZ Merit Scholarship"),
    ("abc", "ABC Need-Based Grant"),
    ("sports", "Sports Excellence Fund"),
];

const STATUS_FILTERS: &[(&str, &str)] = &[
    ("pending", "Pending"),
    ("under-review", "Under Review"),
    ("approved", "Approved"),
    ("rejected", "Rejected"),
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

    let ids = application::all_ids();
    let selection = table_selection(&ctx.state, &ids);
    let rows = SelectableRow::wrap(application::find_all(), |a| ctx.state.selection.contains(a.id));
    let detail = ctx.state.detail.current().and_then(application::find_by_id);
    let filters = ctx.state.filters.clone();

    render(ReviewApplicationsTemplate {
        scholarship_options: SelectOption::list(SCHOLARSHIP_FILTERS, &filters.category),
        status_options: SelectOption::list(STATUS_FILTERS, &filters.status),
        tab: ApplicationTab::from_param(query.tab.as_deref()),
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
    apply_select(&session, PAGE, &form, &application::all_ids())?;
    Ok(see_other(PAGE))
}

pub async fn bulk(
    hub: web::Data<NotificationHub>,
    session: Session,
    form: web::Form<BulkForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    match Decision::from_value(&form.action) {
        Some(decision) => {
            run_bulk(&session, &hub, PAGE, |ids| Some(decision.bulk_notice(ids.len())))?;
        }
        None => log::debug!("Unknown application bulk action {:?}", form.action),
    }
    Ok(see_other(PAGE))
}

/// Approve or reject one application. Only pending applications accept a decision.
pub async fn action(
    hub: web::Data<NotificationHub>,
    session: Session,
    form: web::Form<RowActionForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let record = application::find_by_id(&form.id).ok_or(AppError::NotFound)?;

    if let Some(notes) = &form.notes {
        let mut state = PageState::for_page(&session, PAGE)?;
        state.hold_notes(notes);
        state.save(&session)?;
    }

    match Decision::from_value(&form.action) {
        Some(decision) if record.status.is_decidable() => {
            log::info!("Application {} decided: {:?}", record.id, decision);
            hub.push(&client_id(&session), decision.notice());
        }
        Some(_) => log::debug!("Application {} is {}, decision ignored", record.id, record.status.label()),
        None => log::debug!("Unknown application action {:?}", form.action),
    }
    Ok(see_other(PAGE))
}

pub async fn view(
    session: Session,
    form: web::Form<ViewForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let record = application::find_by_id(&form.id).ok_or(AppError::NotFound)?;
    open_detail(&session, PAGE, record.id)?;
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

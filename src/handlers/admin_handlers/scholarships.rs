use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::actions::{ScholarshipAction, ScholarshipBulk, export_notice};
use super::{BulkForm, RowActionForm, SelectForm, admin_page, apply_select, run_bulk, table_selection};
use crate::config::AppConfig;
use crate::errors::{AppError, render, see_other};
use crate::forms::scholarship::{AddScholarshipForm, Intent};
use crate::forms::{FieldErrors, FormData, SelectOption, outcome_notice, submit_stub};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::models::scholarship::{self, ScholarshipType};
use crate::notifications::{Notice, NotificationHub};
use crate::session::{client_id, csrf};
use crate::templates_structs::{AddScholarshipTemplate, ManageScholarshipsTemplate, SelectableRow};
use crate::ui_state::FilterQuery;

const PAGE: &str = "/admin/dashboard/scholarships";
const ADD_PAGE: &str = "/admin/add-scholarship";

const STATUS_FILTERS: &[(&str, &str)] = &[
    ("published", "Published"),
    ("draft", "Draft"),
    ("expired", "Expired"),
];

pub async fn list(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
    query: web::Query<FilterQuery>,
) -> Result<HttpResponse, AppError> {
    let mut ctx = admin_page(&session, &config, &hub, PAGE)?;
    if ctx.state.hold_filters(&query) {
        ctx.state.save(&session)?;
    }

    let ids = scholarship::managed_ids();
    let selection = table_selection(&ctx.state, &ids);
    let rows = SelectableRow::wrap(scholarship::find_managed(), |s| ctx.state.selection.contains(s.id));
    let filters = ctx.state.filters.clone();
    let type_pairs: Vec<(&str, &str)> = ScholarshipType::ALL.iter().map(|t| (t.value(), t.label())).collect();

    render(ManageScholarshipsTemplate {
        type_options: SelectOption::list(&type_pairs, &filters.category),
        status_options: SelectOption::list(STATUS_FILTERS, &filters.status),
        rows,
        selection,
        filters,
        ctx,
    })
}

pub async fn select(
    session: Session,
    form: web::Form<SelectForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    apply_select(&session, PAGE, &form, &scholarship::managed_ids())?;
    Ok(see_other(PAGE))
}

pub async fn bulk(
    hub: web::Data<NotificationHub>,
    session: Session,
    form: web::Form<BulkForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    match ScholarshipBulk::from_value(&form.action) {
        Some(action) => {
            run_bulk(&session, &hub, PAGE, |ids| Some(action.notice(ids.len())))?;
        }
        None => log::debug!("Unknown scholarship bulk action {:?}", form.action),
    }
    Ok(see_other(PAGE))
}

pub async fn action(
    hub: web::Data<NotificationHub>,
    session: Session,
    form: web::Form<RowActionForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let record = scholarship::find_managed_by_id(&form.id).ok_or(AppError::NotFound)?;
    match ScholarshipAction::from_value(&form.action) {
        Some(action) => {
            log::info!("Scholarship action {} on {}", action.label(), record.id);
            hub.push(&client_id(&session), action.notice(record.name));
        }
        None => log::debug!("Unknown scholarship action {:?}", form.action),
    }
    Ok(see_other(PAGE))
}

pub async fn export(
    hub: web::Data<NotificationHub>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    hub.push(&client_id(&session), export_notice());
    Ok(see_other(PAGE))
}

pub async fn add_page(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = admin_page(&session, &config, &hub, ADD_PAGE)?;
    render(AddScholarshipTemplate { ctx, form: AddScholarshipForm::default(), errors: FieldErrors::new() })
}

pub async fn add_submit(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
    body: String,
) -> Result<HttpResponse, AppError> {
    let data = FormData::parse(&body);
    csrf::validate_csrf(&session, data.get("csrf_token"))?;
    let form = AddScholarshipForm::from_form_data(&data);
    let intent = form.intent();

    match form.validate() {
        Ok(new_scholarship) => {
            let label = match intent {
                Intent::Publish => "Scholarship (publish)",
                Intent::Draft => "Scholarship (draft)",
            };
            let notice = outcome_notice(
                submit_stub(label, &new_scholarship),
                intent.notice(),
                Notice::failure("Scholarship not saved", "Please try again later"),
            );
            hub.push(&client_id(&session), notice);
            Ok(see_other(ADD_PAGE))
        }
        Err(errors) => {
            log::debug!("Add scholarship rejected: {:?}", errors.fields());
            let ctx = admin_page(&session, &config, &hub, ADD_PAGE)?;
            render(AddScholarshipTemplate { ctx, form, errors })
        }
    }
}

use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::admin_page;
use crate::config::AppConfig;
use crate::errors::{AppError, render, see_other};
use crate::forms::preferences::{self, AdminSettingsForm};
use crate::forms::{FormData, SelectOption, outcome_notice, submit_stub};
use crate::models::user::{self, AdminRole};
use crate::notifications::{Notice, NotificationHub};
use crate::session::{client_id, csrf};
use crate::templates_structs::AdminSettingsTemplate;

const PAGE: &str = "/admin/dashboard/settings";

pub async fn page(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = admin_page(&session, &config, &hub, PAGE)?;
    let profile = user::admin_profile();
    let role_pairs: Vec<(&str, &str)> = AdminRole::ALL.iter().map(|r| (r.value(), r.label())).collect();
    render(AdminSettingsTemplate {
        ctx,
        role_options: SelectOption::list(&role_pairs, profile.role.value()),
        email_options: preferences::options(preferences::ADMIN_EMAIL_FREQUENCIES, "immediate"),
        profile,
    })
}

pub async fn save(
    hub: web::Data<NotificationHub>,
    session: Session,
    body: String,
) -> Result<HttpResponse, AppError> {
    let data = FormData::parse(&body);
    csrf::validate_csrf(&session, data.get("csrf_token"))?;
    let form = AdminSettingsForm::from_form_data(&data);
    let notice = outcome_notice(
        submit_stub("Admin settings", &form),
        preferences::settings_saved_notice(),
        Notice::failure("Settings not saved", "Please try again later"),
    );
    hub.push(&client_id(&session), notice);
    Ok(see_other(PAGE))
}

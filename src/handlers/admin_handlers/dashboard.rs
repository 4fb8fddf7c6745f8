use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use super::actions::QuickAction;
use super::admin_page;
use crate::config::AppConfig;
use crate::errors::{AppError, render, see_other};
use crate::models::{application, dashboard, scholarship, user};
use crate::notifications::NotificationHub;
use crate::session::{client_id, csrf};
use crate::templates_structs::AdminDashboardTemplate;

const PAGE: &str = "/admin/dashboard";

#[derive(Deserialize)]
pub struct QuickActionForm {
    pub csrf_token: String,
    pub action: String,
    pub item: String,
}

pub async fn index(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = admin_page(&session, &config, &hub, PAGE)?;
    render(AdminDashboardTemplate {
        ctx,
        stats: dashboard::admin_stats(),
        recent_scholarships: scholarship::find_recent_activity(),
        pending_applications: application::find_awaiting_review(),
        recent_users: user::find_recent_signups(),
    })
}

pub async fn action(
    hub: web::Data<NotificationHub>,
    session: Session,
    form: web::Form<QuickActionForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let item = form.item.trim();
    match QuickAction::from_value(&form.action) {
        Some(action) if !item.is_empty() => {
            log::info!("Dashboard action {} on {item}", action.label());
            hub.push(&client_id(&session), action.notice(item));
        }
        _ => log::debug!("Ignoring dashboard action {:?} on {:?}", form.action, form.item),
    }
    Ok(see_other(PAGE))
}

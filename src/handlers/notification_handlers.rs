use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::{AppError, see_other};
use crate::notifications::NotificationHub;
use crate::session::{client_id, csrf};

#[derive(Deserialize)]
pub struct DismissForm {
    pub csrf_token: String,
    #[serde(default)]
    pub return_to: String,
}

/// Only same-site absolute paths are followed back.
fn safe_return_path(raw: &str) -> &str {
    if raw.starts_with('/') && !raw.starts_with("//") && !raw.contains('\\') {
        raw
    } else {
        "/"
    }
}

pub async fn list(hub: web::Data<NotificationHub>, session: Session) -> HttpResponse {
    HttpResponse::Ok().json(hub.visible(&client_id(&session)))
}

pub async fn dismiss(
    hub: web::Data<NotificationHub>,
    session: Session,
    path: web::Path<u64>,
    form: web::Form<DismissForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    if !hub.dismiss(&client_id(&session), id) {
        log::debug!("Toast {id} was already gone");
    }
    Ok(see_other(safe_return_path(&form.return_to)))
}

#[cfg(test)]
mod tests {
    use super::safe_return_path;

    #[test]
    fn return_path_stays_on_site() {
        assert_eq!(safe_return_path("/admin/dashboard"), "/admin/dashboard");
        assert_eq!(safe_return_path("//evil.example"), "/");
        assert_eq!(safe_return_path("https://evil.example"), "/");
        assert_eq!(safe_return_path(""), "/");
    }
}

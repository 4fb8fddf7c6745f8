use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use askama::Template;

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::content;
use crate::notifications::NotificationHub;
use crate::templates_structs::{AboutTemplate, HomeTemplate, NotFoundTemplate, PageContext};

pub async fn home(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, &hub, "/", None)?;
    render(HomeTemplate {
        ctx,
        hero_image: content::HERO_IMAGE,
        features: content::home_features(),
        steps: content::home_steps(),
    })
}

pub async fn about(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, &hub, "/about", None)?;
    render(AboutTemplate {
        ctx,
        hero_image: content::HERO_IMAGE,
        features: content::about_features(),
        steps: content::about_steps(),
        team: content::team(),
        testimonials: content::testimonials(),
    })
}

/// Catch-all for unknown paths.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    log::warn!("404: attempted to access non-existent route {}", req.path());
    not_found_page(req.path())
}

/// Plain 404 page, used where no request is at hand.
pub fn not_found_response() -> HttpResponse {
    not_found_page("")
}

fn not_found_page(path: &str) -> HttpResponse {
    let tmpl = NotFoundTemplate { path: path.to_string() };
    match tmpl.render() {
        Ok(body) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render 404 page: {e}");
            HttpResponse::NotFound().body("404 - Page not found")
        }
    }
}

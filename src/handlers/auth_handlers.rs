use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::{AppError, render, see_other};
use crate::forms::login::LoginForm;
use crate::forms::signup::SignupForm;
use crate::forms::{FieldErrors, outcome_notice, submit_stub};
use crate::models::content::{HERO_IMAGE, LOGIN_IMAGE};
use crate::notifications::{Notice, NotificationHub};
use crate::session::{client_id, csrf};
use crate::templates_structs::{LoginTemplate, PageContext, SignupTemplate};
use crate::ui_state::PageState;

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub async fn login_page(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, &hub, "/login", None)?;
    render(LoginTemplate {
        ctx,
        form: LoginForm::default(),
        errors: FieldErrors::new(),
        image: LOGIN_IMAGE,
    })
}

pub async fn login_submit(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let mut form = form.into_inner();

    match form.validate() {
        Ok(attempt) => {
            let notice = outcome_notice(
                submit_stub("Login", &attempt),
                Notice::success("Welcome back!", format!("Successfully logged in to {}", config.app_name)),
                Notice::failure("Login failed", "Incorrect email or password"),
            );
            hub.push(&client_id(&session), notice);
            Ok(see_other("/login"))
        }
        Err(errors) => {
            log::debug!("Login rejected: {:?}", errors.fields());
            form.password.clear();
            let ctx = PageContext::build(&session, &config, &hub, "/login", None)?;
            render(LoginTemplate { ctx, form, errors, image: LOGIN_IMAGE })
        }
    }
}

pub async fn signup_page(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, &hub, "/signup", None)?;
    render(SignupTemplate {
        ctx,
        form: SignupForm::default(),
        errors: FieldErrors::new(),
        image: HERO_IMAGE,
    })
}

pub async fn signup_submit(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
    form: web::Form<SignupForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let mut form = form.into_inner();

    match form.validate() {
        Ok(account) => {
            let notice = outcome_notice(
                submit_stub("Signup", &account),
                Notice::success("Account created successfully!", format!("Welcome to {}", config.app_name)),
                Notice::failure("Error creating account", "Please try again later"),
            );
            hub.push(&client_id(&session), notice);
            Ok(see_other("/signup"))
        }
        Err(errors) => {
            log::debug!("Signup rejected: {:?}", errors.fields());
            form.password.clear();
            form.confirm_password.clear();
            let ctx = PageContext::build(&session, &config, &hub, "/signup", None)?;
            render(SignupTemplate { ctx, form, errors, image: HERO_IMAGE })
        }
    }
}

/// There is no login to end. Only the page state goes away.
pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    PageState::discard(&session);
    Ok(see_other("/login"))
}

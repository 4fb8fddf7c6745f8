use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::config::AppConfig;
use crate::errors::{AppError, render, see_other};
use crate::forms::preferences::{self, ProfileForm, StudentSettingsForm};
use crate::forms::{FormData, SelectOption, outcome_notice, submit_stub};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::models::nav_item::SidebarVariant;
use crate::models::{application, dashboard, scholarship, user};
use crate::notifications::{Notice, NotificationHub};
use crate::session::{client_id, csrf};
use crate::templates_structs::{
    PageContext, ProfileTemplate, SavedScholarshipsTemplate, ScholarshipDetailTemplate,
    ScholarshipsTemplate, StudentApplicationsTemplate, StudentDashboardTemplate,
    StudentSettingsTemplate,
};
use crate::ui_state::FilterQuery;

const CATEGORY_FILTERS: &[(&str, &str)] = &[
    ("all", "All Categories"),
    ("stem", "STEM"),
    ("arts", "Arts & Humanities"),
    ("leadership", "Leadership"),
    ("diversity", "Diversity"),
];

const AMOUNT_FILTERS: &[(&str, &str)] = &[
    ("all", "All Amounts"),
    ("0-5000", "$0 - $5,000"),
    ("5000-10000", "$5,000 - $10,000"),
    ("10000+", "$10,000+"),
];

fn student_page(
    session: &Session,
    config: &AppConfig,
    hub: &NotificationHub,
    path: &str,
) -> Result<PageContext, AppError> {
    PageContext::build(session, config, hub, path, Some(SidebarVariant::Student))
}

pub async fn dashboard(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = student_page(&session, &config, &hub, "/dashboard")?;
    let recommended = scholarship::find_recommended();
    render(StudentDashboardTemplate {
        ctx,
        stats: dashboard::student_stats(),
        saved: recommended.iter().take(2).cloned().collect(),
        recommended,
        applications: application::find_dashboard_preview(),
    })
}

/// Filters are remembered for the page but the grid always shows every card.
pub async fn scholarships(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
    query: web::Query<FilterQuery>,
) -> Result<HttpResponse, AppError> {
    let mut ctx = student_page(&session, &config, &hub, "/scholarships")?;
    if ctx.state.hold_filters(&query) {
        ctx.state.save(&session)?;
    }
    let filters = ctx.state.filters.clone();
    render(ScholarshipsTemplate {
        category_options: SelectOption::list(CATEGORY_FILTERS, &filters.category),
        amount_options: SelectOption::list(AMOUNT_FILTERS, &filters.amount),
        scholarships: scholarship::find_all(),
        filters,
        ctx,
    })
}

pub async fn scholarship_detail(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::debug!("Scholarship detail requested for id {id}");
    let ctx = PageContext::build(&session, &config, &hub, &format!("/scholarships/{id}"), None)?;
    render(ScholarshipDetailTemplate { ctx, detail: scholarship::find_detail(&id), id })
}

pub async fn save_scholarship(
    hub: web::Data<NotificationHub>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    log::info!("Scholarship {id} saved to the student's list");
    hub.push(
        &client_id(&session),
        Notice::success("Scholarship Saved", "This scholarship has been added to your saved list."),
    );
    Ok(see_other(&format!("/scholarships/{id}")))
}

pub async fn saved(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = student_page(&session, &config, &hub, "/dashboard/saved")?;
    render(SavedScholarshipsTemplate { ctx, saved: scholarship::find_saved() })
}

pub async fn applications(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = student_page(&session, &config, &hub, "/dashboard/applications")?;
    render(StudentApplicationsTemplate { ctx, applications: application::find_for_student() })
}

pub async fn settings_page(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = student_page(&session, &config, &hub, "/dashboard/settings")?;
    let profile = user::student_profile();
    render(StudentSettingsTemplate {
        ctx,
        education_options: preferences::options(preferences::SETTINGS_EDUCATION_LEVELS, profile.education_level),
        email_options: preferences::options(preferences::EMAIL_FREQUENCIES, "daily"),
        reminder_options: preferences::options(preferences::REMINDER_TIMES, "3days"),
        profile,
    })
}

pub async fn settings_save(
    hub: web::Data<NotificationHub>,
    session: Session,
    body: String,
) -> Result<HttpResponse, AppError> {
    let data = FormData::parse(&body);
    csrf::validate_csrf(&session, data.get("csrf_token"))?;
    let form = StudentSettingsForm::from_form_data(&data);
    let notice = outcome_notice(
        submit_stub("Student settings", &form),
        preferences::settings_saved_notice(),
        Notice::failure("Settings not saved", "Please try again later"),
    );
    hub.push(&client_id(&session), notice);
    Ok(see_other("/dashboard/settings"))
}

pub async fn profile_page(
    config: web::Data<AppConfig>,
    hub: web::Data<NotificationHub>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = student_page(&session, &config, &hub, "/profile")?;
    let profile = user::student_profile();
    let year = profile.graduation_year.to_string();
    let years: Vec<(String, String)> = user::graduation_years()
        .into_iter()
        .map(|y| (y.to_string(), y.to_string()))
        .collect();
    let year_pairs: Vec<(&str, &str)> = years.iter().map(|(v, l)| (v.as_str(), l.as_str())).collect();
    render(ProfileTemplate {
        ctx,
        education_options: preferences::options(preferences::PROFILE_EDUCATION_LEVELS, profile.education_level),
        year_options: SelectOption::list(&year_pairs, &year),
        income_options: preferences::options(preferences::INCOME_LEVELS, ""),
        type_preferences: preferences::options(preferences::SCHOLARSHIP_TYPE_PREFERENCES, ""),
        location_options: preferences::options(preferences::STUDY_LOCATIONS, ""),
        profile,
    })
}

pub async fn profile_save(
    hub: web::Data<NotificationHub>,
    session: Session,
    body: String,
) -> Result<HttpResponse, AppError> {
    let data = FormData::parse(&body);
    csrf::validate_csrf(&session, data.get("csrf_token"))?;
    let form = ProfileForm::from_form_data(&data);
    let notice = outcome_notice(
        submit_stub("Profile", &form),
        ProfileForm::saved_notice(),
        Notice::failure("Profile not saved", "Please try again later"),
    );
    hub.push(&client_id(&session), notice);
    Ok(see_other("/profile"))
}

use askama::Template;

use super::PageContext;
use crate::forms::SelectOption;
use crate::models::application::StudentApplication;
use crate::models::dashboard::StudentStat;
use crate::models::scholarship::{SavedScholarship, Scholarship, ScholarshipDetail};
use crate::models::user::StudentProfile;
use crate::ui_state::TableFilters;

#[derive(Template)]
#[template(path = "dashboard/index.html")]
pub struct StudentDashboardTemplate {
    pub ctx: PageContext,
    pub stats: Vec<StudentStat>,
    pub recommended: Vec<Scholarship>,
    pub saved: Vec<Scholarship>,
    pub applications: Vec<StudentApplication>,
}

#[derive(Template)]
#[template(path = "scholarships/list.html")]
pub struct ScholarshipsTemplate {
    pub ctx: PageContext,
    pub scholarships: Vec<Scholarship>,
    pub filters: TableFilters,
    pub category_options: Vec<SelectOption>,
    pub amount_options: Vec<SelectOption>,
}

#[derive(Template)]
#[template(path = "scholarships/detail.html")]
pub struct ScholarshipDetailTemplate {
    pub ctx: PageContext,
    pub id: String,
    pub detail: ScholarshipDetail,
}

#[derive(Template)]
#[template(path = "dashboard/saved.html")]
pub struct SavedScholarshipsTemplate {
    pub ctx: PageContext,
    pub saved: Vec<SavedScholarship>,
}

#[derive(Template)]
#[template(path = "dashboard/applications.html")]
pub struct StudentApplicationsTemplate {
    pub ctx: PageContext,
    pub applications: Vec<StudentApplication>,
}

#[derive(Template)]
#[template(path = "dashboard/settings.html")]
pub struct StudentSettingsTemplate {
    pub ctx: PageContext,
    pub profile: StudentProfile,
    pub education_options: Vec<SelectOption>,
    pub email_options: Vec<SelectOption>,
    pub reminder_options: Vec<SelectOption>,
}

#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub ctx: PageContext,
    pub profile: StudentProfile,
    pub education_options: Vec<SelectOption>,
    pub year_options: Vec<SelectOption>,
    pub income_options: Vec<SelectOption>,
    pub type_preferences: Vec<SelectOption>,
    pub location_options: Vec<SelectOption>,
}

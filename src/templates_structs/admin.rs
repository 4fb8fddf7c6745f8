use askama::Template;

use super::{PageContext, SelectableRow};
use crate::forms::scholarship::AddScholarshipForm;
use crate::forms::{FieldErrors, SelectOption};
use crate::models::application::{ApplicationRecord, ApplicationTab};
use crate::models::dashboard::AdminStat;
use crate::models::scholarship::{ManagedScholarship, RecentScholarship};
use crate::models::user::{AdminProfile, UserAccount, UserTab};
use crate::ui_state::TableFilters;

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub ctx: PageContext,
    pub stats: Vec<AdminStat>,
    pub recent_scholarships: Vec<RecentScholarship>,
    pub pending_applications: Vec<ApplicationRecord>,
    pub recent_users: Vec<UserAccount>,
}

#[derive(Template)]
#[template(path = "admin/add_scholarship.html")]
pub struct AddScholarshipTemplate {
    pub ctx: PageContext,
    pub form: AddScholarshipForm,
    pub errors: FieldErrors,
}

/// Header checkbox and bulk bar state shared by the admin tables.
pub struct TableSelection {
    pub all_selected: bool,
    pub count: usize,
}

#[derive(Template)]
#[template(path = "admin/scholarships.html")]
pub struct ManageScholarshipsTemplate {
    pub ctx: PageContext,
    pub rows: Vec<SelectableRow<ManagedScholarship>>,
    pub selection: TableSelection,
    pub filters: TableFilters,
    pub type_options: Vec<SelectOption>,
    pub status_options: Vec<SelectOption>,
}

#[derive(Template)]
#[template(path = "admin/applications.html")]
pub struct ReviewApplicationsTemplate {
    pub ctx: PageContext,
    pub rows: Vec<SelectableRow<ApplicationRecord>>,
    pub selection: TableSelection,
    pub filters: TableFilters,
    pub scholarship_options: Vec<SelectOption>,
    pub status_options: Vec<SelectOption>,
    pub detail: Option<ApplicationRecord>,
    pub tab: ApplicationTab,
}

#[derive(Template)]
#[template(path = "admin/users.html")]
pub struct ManageUsersTemplate {
    pub ctx: PageContext,
    pub rows: Vec<SelectableRow<UserAccount>>,
    pub selection: TableSelection,
    pub filters: TableFilters,
    pub role_options: Vec<SelectOption>,
    pub status_options: Vec<SelectOption>,
    pub detail: Option<UserAccount>,
    pub tab: UserTab,
}

#[derive(Template)]
#[template(path = "admin/settings.html")]
pub struct AdminSettingsTemplate {
    pub ctx: PageContext,
    pub profile: AdminProfile,
    pub role_options: Vec<SelectOption>,
    pub email_options: Vec<SelectOption>,
}

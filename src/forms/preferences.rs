//! Profile and settings forms. Nothing here is validated; the values are
//! handed to the submission stub and then forgotten.

use super::{FormData, SelectOption, is_checked};
use crate::notifications::Notice;

pub const PROFILE_EDUCATION_LEVELS: &[(&str, &str)] = &[
    ("highschool", "High School"),
    ("undergraduate", "Undergraduate"),
    ("postgraduate", "Postgraduate"),
];

pub const SETTINGS_EDUCATION_LEVELS: &[(&str, &str)] = &[
    ("highschool", "High School"),
    ("undergraduate", "Undergraduate"),
    ("graduate", "Graduate"),
    ("phd", "Ph.D."),
];

pub const INCOME_LEVELS: &[(&str, &str)] = &[
    ("low", "Below $30,000"),
    ("medium", "$30,000 - $60,000"),
    ("high", "Above $60,000"),
];

pub const STUDY_LOCATIONS: &[(&str, &str)] = &[
    ("local", "Local"),
    ("state", "State"),
    ("national", "National"),
    ("international", "International"),
];

pub const SCHOLARSHIP_TYPE_PREFERENCES: &[(&str, &str)] = &[
    ("merit", "Merit-based"),
    ("need", "Need-based"),
    ("sports", "Sports"),
    ("arts", "Arts & Culture"),
    ("stem", "STEM"),
    ("community", "Community Service"),
];

pub const EMAIL_FREQUENCIES: &[(&str, &str)] = &[
    ("daily", "Daily Digest"),
    ("weekly", "Weekly Summary"),
    ("none", "Don't send"),
];

pub const REMINDER_TIMES: &[(&str, &str)] = &[
    ("1day", "1 day before"),
    ("3days", "3 days before"),
    ("1week", "1 week before"),
    ("none", "Don't remind"),
];

pub const ADMIN_EMAIL_FREQUENCIES: &[(&str, &str)] = &[
    ("immediate", "Immediate"),
    ("daily", "Daily Digest"),
    ("weekly", "Weekly Summary"),
    ("none", "Don't send"),
];

pub fn options(pairs: &[(&str, &str)], current: &str) -> Vec<SelectOption> {
    SelectOption::list(pairs, current)
}

/// `/profile`
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub education_level: String,
    pub institution: String,
    pub field_of_study: String,
    pub graduation_year: String,
    pub caste: String,
    pub religion: String,
    pub income_level: String,
    pub scholarship_types: Vec<String>,
    pub study_location: String,
    pub two_factor: bool,
}

impl ProfileForm {
    pub fn from_form_data(data: &FormData) -> Self {
        Self {
            full_name: data.get("full_name").trim().to_string(),
            email: data.get("email").trim().to_string(),
            phone: data.get("phone").trim().to_string(),
            education_level: data.get("education_level").to_string(),
            institution: data.get("institution").trim().to_string(),
            field_of_study: data.get("field_of_study").trim().to_string(),
            graduation_year: data.get("graduation_year").to_string(),
            caste: data.get("caste").trim().to_string(),
            religion: data.get("religion").trim().to_string(),
            income_level: data.get("income_level").to_string(),
            scholarship_types: data.get_all("scholarship_types"),
            study_location: data.get("study_location").to_string(),
            two_factor: is_checked(data.get_opt("two_factor")),
        }
    }

    pub fn saved_notice() -> Notice {
        Notice::success("Profile Updated", "Your profile changes have been saved successfully.")
    }
}

/// `/dashboard/settings`
#[derive(Debug, Clone, Default)]
pub struct StudentSettingsForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub education_level: String,
    pub major: String,
    pub gpa: String,
    pub graduation_year: String,
    pub email_frequency: String,
    pub reminder: String,
}

impl StudentSettingsForm {
    pub fn from_form_data(data: &FormData) -> Self {
        Self {
            full_name: data.get("full_name").trim().to_string(),
            email: data.get("email").trim().to_string(),
            phone: data.get("phone").trim().to_string(),
            date_of_birth: data.get("date_of_birth").to_string(),
            education_level: data.get("education_level").to_string(),
            major: data.get("major").trim().to_string(),
            gpa: data.get("gpa").trim().to_string(),
            graduation_year: data.get("graduation_year").trim().to_string(),
            email_frequency: data.get("email_frequency").to_string(),
            reminder: data.get("reminder").to_string(),
        }
    }
}

/// `/admin/dashboard/settings`. Password fields are read only to be dropped.
#[derive(Debug, Clone, Default)]
pub struct AdminSettingsForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub password_change_requested: bool,
    pub two_factor: bool,
    pub email_frequency: String,
    pub system_alerts: bool,
    pub auto_review: bool,
    pub audit_logging: bool,
}

impl AdminSettingsForm {
    pub fn from_form_data(data: &FormData) -> Self {
        Self {
            name: data.get("name").trim().to_string(),
            email: data.get("email").trim().to_string(),
            phone: data.get("phone").trim().to_string(),
            role: data.get("role").to_string(),
            password_change_requested: !data.get("new_password").is_empty(),
            two_factor: is_checked(data.get_opt("two_factor")),
            email_frequency: data.get("email_frequency").to_string(),
            system_alerts: is_checked(data.get_opt("system_alerts")),
            auto_review: is_checked(data.get_opt("auto_review")),
            audit_logging: is_checked(data.get_opt("audit_logging")),
        }
    }
}

pub fn settings_saved_notice() -> Notice {
    Notice::success("Settings Updated", "Your settings have been successfully saved.")
}

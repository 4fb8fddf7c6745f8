use chrono::NaiveDate;

use crate::models::scholarship::TABLE_DATE_FORMAT;
use crate::models::status::{UserRole, UserStatus};

#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicationCounts {
    pub total: u32,
    pub approved: u32,
    pub rejected: u32,
    pub pending: u32,
}

/// A registered account, as listed on the admin "Manage Users" page.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub id: &'static str,
    pub full_name: &'static str,
    pub email: &'static str,
    pub role: UserRole,
    pub status: UserStatus,
    pub phone: &'static str,
    pub dob: NaiveDate,
    pub registered: NaiveDate,
    pub applications: ApplicationCounts,
}

impl UserAccount {
    pub fn registered_display(&self) -> String {
        self.registered.format("%B %-d, %Y").to_string()
    }

    pub fn registered_short(&self) -> String {
        self.registered.format(TABLE_DATE_FORMAT).to_string()
    }

    /// Admin accounts cannot be deleted from the back-office.
    pub fn can_delete(&self) -> bool {
        !self.role.is_admin()
    }
}

/// Tabs of the user detail dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserTab {
    #[default]
    Info,
    Activity,
}

impl UserTab {
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("activity") => UserTab::Activity,
            _ => UserTab::Info,
        }
    }

    pub fn is(&self, name: &str) -> bool {
        match self {
            UserTab::Info => name == "info",
            UserTab::Activity => name == "activity",
        }
    }
}

/// Pre-filled values of the student profile and settings pages.
#[derive(Debug, Clone)]
pub struct StudentProfile {
    pub full_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub education_level: &'static str,
    pub graduation_year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminRole {
    Super,
    Regular,
    Moderator,
}

impl AdminRole {
    pub const ALL: [AdminRole; 3] = [AdminRole::Super, AdminRole::Regular, AdminRole::Moderator];

    pub fn value(&self) -> &'static str {
        match self {
            AdminRole::Super => "super",
            AdminRole::Regular => "regular",
            AdminRole::Moderator => "moderator",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminRole::Super => "Super Admin",
            AdminRole::Regular => "Regular Admin",
            AdminRole::Moderator => "Moderator",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminProfile {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub role: AdminRole,
}

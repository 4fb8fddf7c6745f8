use chrono::NaiveDate;

use crate::models::scholarship::TABLE_DATE_FORMAT;
use crate::models::status::ApplicationStatus;

/// An application on the student's "My Applications" page.
#[derive(Debug, Clone)]
pub struct StudentApplication {
    pub name: &'static str,
    pub amount: &'static str,
    pub deadline: NaiveDate,
    pub status: ApplicationStatus,
    /// Completion percentage, 0..=100.
    pub progress: u8,
    pub documents: Vec<&'static str>,
}

impl StudentApplication {
    pub fn deadline_display(&self) -> String {
        self.deadline.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone)]
pub struct ApplicationDocument {
    pub name: &'static str,
    pub kind: &'static str,
    pub url: &'static str,
}

/// An application as seen by the admin reviewer.
#[derive(Debug, Clone)]
pub struct ApplicationRecord {
    pub id: &'static str,
    pub student_name: &'static str,
    pub scholarship_name: &'static str,
    pub submitted: NaiveDate,
    pub status: ApplicationStatus,
    pub email: &'static str,
    pub phone: &'static str,
    pub dob: NaiveDate,
    pub address: &'static str,
    pub category: &'static str,
    pub qualification: &'static str,
    pub percentage: u8,
    pub school_name: &'static str,
    pub documents: Vec<ApplicationDocument>,
}

impl ApplicationRecord {
    pub fn submitted_display(&self) -> String {
        self.submitted.format(TABLE_DATE_FORMAT).to_string()
    }

    pub fn dob_display(&self) -> String {
        self.dob.format("%B %-d, %Y").to_string()
    }
}

/// Tabs of the application detail dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplicationTab {
    #[default]
    StudentInfo,
    Academic,
    Documents,
}

impl ApplicationTab {
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("academic") => ApplicationTab::Academic,
            Some("documents") => ApplicationTab::Documents,
            _ => ApplicationTab::StudentInfo,
        }
    }

    pub fn is(&self, name: &str) -> bool {
        self.param() == name
    }

    pub fn param(&self) -> &'static str {
        match self {
            ApplicationTab::StudentInfo => "student-info",
            ApplicationTab::Academic => "academic",
            ApplicationTab::Documents => "documents",
        }
    }
}

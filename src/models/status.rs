//! Status enums and their single mapping onto badge styles.

use serde::{Deserialize, Serialize};

/// Style token for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Info,
    Danger,
    Neutral,
    Accent,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Success => "badge badge-success",
            Tone::Warning => "badge badge-warning",
            Tone::Info => "badge badge-info",
            Tone::Danger => "badge badge-danger",
            Tone::Neutral => "badge badge-neutral",
            Tone::Accent => "badge badge-accent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    InProgress,
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn tone(&self) -> Tone {
        match self {
            ApplicationStatus::InProgress => Tone::Info,
            ApplicationStatus::Pending => Tone::Warning,
            ApplicationStatus::UnderReview => Tone::Info,
            ApplicationStatus::Approved => Tone::Success,
            ApplicationStatus::Rejected => Tone::Danger,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        self.tone().css_class()
    }

    /// Label used on the admin screens.
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::InProgress => "In Progress",
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    /// Label shown to the student who owns the application.
    pub fn student_label(&self) -> &'static str {
        match self {
            ApplicationStatus::InProgress => "In Progress",
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::UnderReview => "Pending Review",
            ApplicationStatus::Approved => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    /// Only pending applications can still be approved or rejected.
    pub fn is_decidable(&self) -> bool {
        matches!(self, ApplicationStatus::Pending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScholarshipStatus {
    Published,
    Active,
    Draft,
    Expired,
}

impl ScholarshipStatus {
    pub fn tone(&self) -> Tone {
        match self {
            ScholarshipStatus::Published | ScholarshipStatus::Active => Tone::Success,
            ScholarshipStatus::Draft => Tone::Warning,
            ScholarshipStatus::Expired => Tone::Neutral,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        self.tone().css_class()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScholarshipStatus::Published => "Published",
            ScholarshipStatus::Active => "Active",
            ScholarshipStatus::Draft => "Draft",
            ScholarshipStatus::Expired => "Expired",
        }
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, ScholarshipStatus::Draft)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn tone(&self) -> Tone {
        match self {
            UserStatus::Active => Tone::Success,
            UserStatus::Inactive => Tone::Neutral,
            UserStatus::Suspended => Tone::Danger,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        self.tone().css_class()
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Suspended => "Suspended",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, UserStatus::Active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Student,
    Admin,
}

impl UserRole {
    pub fn tone(&self) -> Tone {
        match self {
            UserRole::Admin => Tone::Accent,
            UserRole::Student => Tone::Info,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        self.tone().css_class()
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Admin => "Admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedStatus {
    DeadlineApproaching,
    Open,
}

impl SavedStatus {
    pub fn tone(&self) -> Tone {
        match self {
            SavedStatus::DeadlineApproaching => Tone::Warning,
            SavedStatus::Open => Tone::Success,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        self.tone().css_class()
    }

    pub fn label(&self) -> &'static str {
        match self {
            SavedStatus::DeadlineApproaching => "Deadline Approaching",
            SavedStatus::Open => "Open",
        }
    }
}

//! Admin back-office actions. None of them touch the catalogues; each one
//! only produces the notice the visitor sees.

use crate::notifications::Notice;

/// Row menu entries on the admin dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Edit,
    Delete,
    Review,
    Approve,
    Reject,
    View,
    Suspend,
}

impl QuickAction {
    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim() {
            "edit" => Some(QuickAction::Edit),
            "delete" => Some(QuickAction::Delete),
            "review" => Some(QuickAction::Review),
            "approve" => Some(QuickAction::Approve),
            "reject" => Some(QuickAction::Reject),
            "view" => Some(QuickAction::View),
            "suspend" => Some(QuickAction::Suspend),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::Edit => "Edit",
            QuickAction::Delete => "Delete",
            QuickAction::Review => "Review",
            QuickAction::Approve => "Approve",
            QuickAction::Reject => "Reject",
            QuickAction::View => "View",
            QuickAction::Suspend => "Suspend",
        }
    }

    pub fn notice(&self, item: &str) -> Notice {
        triggered(self.label(), item)
    }
}

fn triggered(action: &str, item: &str) -> Notice {
    Notice::success(format!("{action} - {item}"), format!("{action} action triggered for {item}"))
}

/// Row actions on "Manage Scholarships".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScholarshipAction {
    View,
    Edit,
    Publish,
    Delete,
}

impl ScholarshipAction {
    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim() {
            "view" => Some(ScholarshipAction::View),
            "edit" => Some(ScholarshipAction::Edit),
            "publish" => Some(ScholarshipAction::Publish),
            "delete" => Some(ScholarshipAction::Delete),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScholarshipAction::View => "View",
            ScholarshipAction::Edit => "Edit",
            ScholarshipAction::Publish => "Publish",
            ScholarshipAction::Delete => "Delete",
        }
    }

    pub fn notice(&self, scholarship: &str) -> Notice {
        triggered(self.label(), scholarship)
    }
}

/// Bulk bar on "Manage Scholarships".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScholarshipBulk {
    Publish,
    Delete,
}

impl ScholarshipBulk {
    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim() {
            "publish" => Some(ScholarshipBulk::Publish),
            "delete" => Some(ScholarshipBulk::Delete),
            _ => None,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            ScholarshipBulk::Publish => "publish",
            ScholarshipBulk::Delete => "delete",
        }
    }

    pub fn notice(&self, count: usize) -> Notice {
        let action = self.value();
        Notice::success(
            format!("Bulk {action}"),
            format!("{action} action triggered for {count} scholarships"),
        )
    }
}

pub fn export_notice() -> Notice {
    Notice::success("Exporting Data", "Your scholarship data is being downloaded as CSV")
}

/// Reviewer decision on an application, for one row or in bulk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim() {
            "approve" => Some(Decision::Approve),
            "reject" => Some(Decision::Reject),
            _ => None,
        }
    }

    fn past(&self) -> &'static str {
        match self {
            Decision::Approve => "approved",
            Decision::Reject => "rejected",
        }
    }

    pub fn notice(&self) -> Notice {
        let title = match self {
            Decision::Approve => "Application Approved",
            Decision::Reject => "Application Rejected",
        };
        Notice::success(title, format!("Application has been {} successfully.", self.past()))
    }

    pub fn bulk_notice(&self, count: usize) -> Notice {
        let title = match self {
            Decision::Approve => "Bulk Approval",
            Decision::Reject => "Bulk Rejection",
        };
        Notice::success(title, format!("{count} applications have been {}.", self.past()))
    }
}

/// Row and bulk actions on "Manage Users". Edit has no bulk form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Edit,
    Delete,
    Suspend,
    Activate,
}

impl UserAction {
    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim() {
            "edit" => Some(UserAction::Edit),
            "delete" => Some(UserAction::Delete),
            "suspend" => Some(UserAction::Suspend),
            "activate" => Some(UserAction::Activate),
            _ => None,
        }
    }

    pub fn bulk_from_value(value: &str) -> Option<Self> {
        Self::from_value(value).filter(|a| *a != UserAction::Edit)
    }

    pub fn value(&self) -> &'static str {
        match self {
            UserAction::Edit => "edit",
            UserAction::Delete => "delete",
            UserAction::Suspend => "suspend",
            UserAction::Activate => "activate",
        }
    }

    pub fn past(&self) -> &'static str {
        match self {
            UserAction::Edit => "edited",
            UserAction::Delete => "deleted",
            UserAction::Suspend => "suspended",
            UserAction::Activate => "activated",
        }
    }

    pub fn notice(&self) -> Notice {
        Notice::success(
            format!("User {}", self.value()),
            format!("User has been {} successfully.", self.past()),
        )
    }

    pub fn bulk_notice(&self, count: usize) -> Notice {
        Notice::success(
            format!("Bulk {}", self.value()),
            format!("{count} users have been {}.", self.past()),
        )
    }
}

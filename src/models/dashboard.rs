use crate::models::status::Tone;

/// Tile on the student dashboard.
pub struct StudentStat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

/// Tile on the admin dashboard.
pub struct AdminStat {
    pub title: &'static str,
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
}

impl AdminStat {
    pub fn tone_class(&self) -> &'static str {
        match self.tone {
            Tone::Success => "stat-success",
            Tone::Warning => "stat-warning",
            Tone::Info => "stat-info",
            Tone::Danger => "stat-danger",
            Tone::Neutral => "stat-neutral",
            Tone::Accent => "stat-accent",
        }
    }
}

pub fn student_stats() -> Vec<StudentStat> {
    vec![
        StudentStat { label: "Saved Scholarships", value: "12", icon: "award" },
        StudentStat { label: "Applications in Progress", value: "5", icon: "clock" },
        StudentStat { label: "Deadlines Approaching", value: "3", icon: "clock" },
    ]
}

pub fn admin_stats() -> Vec<AdminStat> {
    vec![
        AdminStat {
            title: "Total Scholarships",
            value: "150",
            label: "Active Scholarships",
            icon: "award",
            tone: Tone::Accent,
        },
        AdminStat {
            title: "Pending Applications",
            value: "345",
            label: "Awaiting Review",
            icon: "clock",
            tone: Tone::Warning,
        },
        AdminStat {
            title: "Registered Users",
            value: "12,500",
            label: "Students",
            icon: "users",
            tone: Tone::Info,
        },
        AdminStat {
            title: "New Applications",
            value: "25",
            label: "New Submissions",
            icon: "file-text",
            tone: Tone::Success,
        },
    ]
}

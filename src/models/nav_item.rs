/// Which sidebar a page is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarVariant {
    Student,
    Admin,
}

pub struct NavSidebarItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub url: &'static str,
    pub is_active: bool,
}

/// Identity shown in the sidebar header.
pub struct SidebarProfile {
    pub name: &'static str,
    pub email: &'static str,
    pub initials: &'static str,
}

pub struct Sidebar {
    pub variant: SidebarVariant,
    pub profile: SidebarProfile,
    pub items: Vec<NavSidebarItem>,
}

// (icon, label, url)
const STUDENT_ITEMS: &[(&str, &str, &str)] = &[
    ("home", "Dashboard", "/dashboard"),
    ("search", "Find Scholarships", "/scholarships"),
    ("bookmark", "Saved Scholarships", "/dashboard/saved"),
    ("file-text", "My Applications", "/dashboard/applications"),
    ("settings", "Settings", "/dashboard/settings"),
];

const ADMIN_ITEMS: &[(&str, &str, &str)] = &[
    ("layout-dashboard", "Dashboard", "/admin/dashboard"),
    ("award", "Manage Scholarships", "/admin/dashboard/scholarships"),
    ("plus-circle", "Add Scholarship", "/admin/add-scholarship"),
    ("file-text", "Review Applications", "/admin/dashboard/applications"),
    ("users", "Manage Users", "/admin/dashboard/users"),
    ("settings", "Settings", "/admin/dashboard/settings"),
];

impl SidebarVariant {
    fn entries(&self) -> &'static [(&'static str, &'static str, &'static str)] {
        match self {
            SidebarVariant::Student => STUDENT_ITEMS,
            SidebarVariant::Admin => ADMIN_ITEMS,
        }
    }

    fn profile(&self) -> SidebarProfile {
        match self {
            SidebarVariant::Student => SidebarProfile {
                name: "John Doe",
                email: "john@example.com",
                initials: "JD",
            },
            SidebarVariant::Admin => SidebarProfile {
                name: "Admin User",
                email: "admin@example.com",
                initials: "AD",
            },
        }
    }
}

/// Build the sidebar for `current_path`. Only an exact path match is active.
pub fn build_sidebar(variant: SidebarVariant, current_path: &str) -> Sidebar {
    let items = variant
        .entries()
        .iter()
        .map(|&(icon, label, url)| NavSidebarItem {
            icon,
            label,
            url,
            is_active: url == current_path,
        })
        .collect();

    Sidebar {
        variant,
        profile: variant.profile(),
        items,
    }
}

impl Sidebar {
    pub fn active_label(&self) -> Option<&'static str> {
        self.items.iter().find(|i| i.is_active).map(|i| i.label)
    }
}

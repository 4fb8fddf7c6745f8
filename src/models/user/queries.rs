use chrono::{Datelike, Local};

use crate::models::scholarship::queries::date;
use crate::models::status::{UserRole, UserStatus};
use super::types::*;

pub fn find_all() -> Vec<UserAccount> {
    vec![
        UserAccount {
            id: "1001",
            full_name: "John Doe",
            email: "johndoe@example.com",
            role: UserRole::Student,
            status: UserStatus::Active,
            phone: "+91 9876543210",
            dob: date(2004, 1, 10),
            registered: date(2025, 2, 1),
            applications: ApplicationCounts { total: 3, approved: 1, rejected: 1, pending: 1 },
        },
        UserAccount {
            id: "1002",
            full_name: "Priya Sharma",
            email: "priya@example.com",
            role: UserRole::Student,
            status: UserStatus::Active,
            phone: "+91 9988776655",
            dob: date(2004, 11, 3),
            registered: date(2025, 2, 4),
            applications: ApplicationCounts { total: 2, approved: 0, rejected: 0, pending: 2 },
        },
        UserAccount {
            id: "1003",
            full_name: "Rahul Gupta",
            email: "rahul@example.com",
            role: UserRole::Student,
            status: UserStatus::Inactive,
            phone: "+91 9012345678",
            dob: date(2003, 8, 17),
            registered: date(2025, 2, 9),
            applications: ApplicationCounts::default(),
        },
        UserAccount {
            id: "1004",
            full_name: "Akshat Kumar",
            email: "akshat@example.com",
            role: UserRole::Student,
            status: UserStatus::Suspended,
            phone: "+91 9123456780",
            dob: date(2005, 6, 21),
            registered: date(2025, 2, 9),
            applications: ApplicationCounts { total: 1, approved: 0, rejected: 0, pending: 1 },
        },
        UserAccount {
            id: "1005",
            full_name: "Admin1",
            email: "admin@example.com",
            role: UserRole::Admin,
            status: UserStatus::Active,
            phone: "+1 (555) 123-4567",
            dob: date(1990, 3, 2),
            registered: date(2025, 1, 15),
            applications: ApplicationCounts::default(),
        },
    ]
}

pub fn find_by_id(id: &str) -> Option<UserAccount> {
    find_all().into_iter().find(|u| u.id == id)
}

pub fn all_ids() -> Vec<String> {
    find_all().iter().map(|u| u.id.to_string()).collect()
}

/// Latest sign-ups shown on the admin dashboard.
pub fn find_recent_signups() -> Vec<UserAccount> {
    let mut users = find_all();
    users.sort_by(|a, b| b.registered.cmp(&a.registered));
    users.truncate(2);
    users
}

pub fn student_profile() -> StudentProfile {
    StudentProfile {
        full_name: "John Doe",
        email: "john@example.com",
        phone: "",
        education_level: "undergraduate",
        graduation_year: 2025,
    }
}

pub fn admin_profile() -> AdminProfile {
    AdminProfile {
        name: "Admin User",
        email: "admin@example.com",
        phone: "+1 (555) 123-4567",
        role: AdminRole::Super,
    }
}

/// The current year and the five after it.
pub fn graduation_years() -> Vec<i32> {
    let start = Local::now().year();
    (start..start + 6).collect()
}

//! Static application data for the student and admin views.

use crate::models::scholarship::queries::date;
use crate::models::status::ApplicationStatus;
use super::types::*;

pub fn find_for_student() -> Vec<StudentApplication> {
    vec![
        StudentApplication {
            name: "Global Student Scholarship",
            amount: "$10,000",
            deadline: date(2024, 4, 30),
            status: ApplicationStatus::UnderReview,
            progress: 100,
            documents: vec!["Transcript", "Essay", "Recommendation Letter"],
        },
        StudentApplication {
            name: "Academic Merit Award",
            amount: "$5,000",
            deadline: date(2024, 3, 15),
            status: ApplicationStatus::Approved,
            progress: 100,
            documents: vec!["Transcript", "Essay", "Portfolio"],
        },
        StudentApplication {
            name: "Future Tech Leaders",
            amount: "$7,500",
            deadline: date(2024, 5, 20),
            status: ApplicationStatus::InProgress,
            progress: 60,
            documents: vec!["Resume", "Project Portfolio", "Essay"],
        },
    ]
}

/// The two applications previewed on the student dashboard.
pub fn find_dashboard_preview() -> Vec<StudentApplication> {
    find_for_student().into_iter().take(2).collect()
}

fn standard_documents() -> Vec<ApplicationDocument> {
    vec![
        ApplicationDocument { name: "Marksheet", kind: "PDF", url: "#" },
        ApplicationDocument { name: "Income Certificate", kind: "PDF", url: "#" },
        ApplicationDocument { name: "ID Proof", kind: "PDF", url: "#" },
    ]
}

/// Rows of the admin "Review Applications" table.
pub fn find_all() -> Vec<ApplicationRecord> {
    vec![
        ApplicationRecord {
            id: "1",
            student_name: "John Doe",
            scholarship_name: "XYZ Merit Scholarship",
            submitted: date(2025, 2, 10),
            status: ApplicationStatus::Pending,
            email: "johndoe@example.com",
            phone: "+91 9876543210",
            dob: date(2004, 1, 10),
            address: "XYZ City, India",
            category: "OBC",
            qualification: "12th Grade (Science)",
            percentage: 88,
            school_name: "XYZ Public School",
            documents: standard_documents(),
        },
        ApplicationRecord {
            id: "2",
            student_name: "Akshat Kumar",
            scholarship_name: "XYZ Merit Scholarship",
            submitted: date(2025, 2, 10),
            status: ApplicationStatus::Pending,
            email: "akshat@example.com",
            phone: "+91 9123456780",
            dob: date(2005, 6, 21),
            address: "Pune, India",
            category: "General",
            qualification: "12th Grade (Commerce)",
            percentage: 91,
            school_name: "Sunrise Senior Secondary School",
            documents: standard_documents(),
        },
        ApplicationRecord {
            id: "3",
            student_name: "Priya Sharma",
            scholarship_name: "ABC Need-Based Grant",
            submitted: date(2025, 2, 8),
            status: ApplicationStatus::UnderReview,
            email: "priya@example.com",
            phone: "+91 9988776655",
            dob: date(2004, 11, 3),
            address: "Jaipur, India",
            category: "SC",
            qualification: "12th Grade (Arts)",
            percentage: 84,
            school_name: "Govt. Girls Senior Secondary School",
            documents: standard_documents(),
        },
    ]
}

pub fn find_by_id(id: &str) -> Option<ApplicationRecord> {
    find_all().into_iter().find(|a| a.id == id)
}

pub fn all_ids() -> Vec<String> {
    find_all().iter().map(|a| a.id.to_string()).collect()
}

/// Applications still waiting for a decision, for the admin dashboard.
pub fn find_awaiting_review() -> Vec<ApplicationRecord> {
    find_all()
        .into_iter()
        .filter(|a| matches!(a.status, ApplicationStatus::Pending | ApplicationStatus::UnderReview))
        .collect()
}

//! Static catalogue. Every function returns a fresh copy of constant data.

use chrono::NaiveDate;

use crate::models::status::{SavedStatus, ScholarshipStatus};
use super::types::*;

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Scholarships shown on the search page and the dashboard recommendations.
pub fn find_all() -> Vec<Scholarship> {
    vec![
        Scholarship {
            id: 1,
            name: "STEM Excellence Scholarship",
            amount: "$5,000",
            deadline: date(2024, 5, 15),
            criteria: "Computer Science, GPA 3.5+",
            category: "STEM",
            match_score: 95,
        },
        Scholarship {
            id: 2,
            name: "Future Leaders Grant",
            amount: "$3,000",
            deadline: date(2024, 6, 1),
            criteria: "Leadership experience, Any major",
            category: "Leadership",
            match_score: 88,
        },
        Scholarship {
            id: 3,
            name: "Women in Technology",
            amount: "$7,500",
            deadline: date(2024, 5, 30),
            criteria: "Female students in Tech",
            category: "Diversity",
            match_score: 92,
        },
        Scholarship {
            id: 4,
            name: "Global Diversity Scholarship",
            amount: "$10,000",
            deadline: date(2024, 7, 15),
            criteria: "International Students, All majors",
            category: "International",
            match_score: 85,
        },
        Scholarship {
            id: 5,
            name: "Arts & Humanities Fellowship",
            amount: "$4,000",
            deadline: date(2024, 6, 30),
            criteria: "Arts, Literature, or History majors",
            category: "Arts",
            match_score: 78,
        },
        Scholarship {
            id: 6,
            name: "First Generation Scholar Award",
            amount: "$6,000",
            deadline: date(2024, 7, 1),
            criteria: "First-generation college students",
            category: "First Gen",
            match_score: 90,
        },
    ]
}

/// The first three catalogue entries, as recommended on the dashboard.
pub fn find_recommended() -> Vec<Scholarship> {
    find_all().into_iter().take(3).collect()
}

pub fn find_saved() -> Vec<SavedScholarship> {
    vec![
        SavedScholarship {
            id: 1,
            name: "STEM Excellence Scholarship",
            amount: "$5,000",
            deadline: date(2024, 5, 15),
            criteria: "Computer Science, GPA 3.5+",
            status: SavedStatus::DeadlineApproaching,
        },
        SavedScholarship {
            id: 2,
            name: "Future Leaders Grant",
            amount: "$3,000",
            deadline: date(2024, 6, 1),
            criteria: "Leadership experience, Any major",
            status: SavedStatus::Open,
        },
        SavedScholarship {
            id: 3,
            name: "Women in Technology",
            amount: "$7,500",
            deadline: date(2024, 5, 30),
            criteria: "Female students in Tech",
            status: SavedStatus::Open,
        },
        SavedScholarship {
            id: 4,
            name: "Global Diversity Scholarship",
            amount: "$10,000",
            deadline: date(2024, 7, 15),
            criteria: "International Students, All majors",
            status: SavedStatus::Open,
        },
    ]
}

/// Detail page content. The id is accepted but every id maps to the same record.
pub fn find_detail(_id: &str) -> ScholarshipDetail {
    ScholarshipDetail {
        title: "XYZ Merit-Based Scholarship 2025",
        tags: vec!["Merit-Based", "Engineering", "State-Level"],
        provider: "ABC Foundation",
        award: "₹50,000 per year + Mentorship",
        deadline: date(2025, 3, 31),
        eligibility: vec![
            "Minimum 80% in 12th grade",
            "Annual family income below ₹5 lakh",
            "SC/ST/OBC students eligible",
            "Only for students from Maharashtra",
        ],
        monetary_grant: "₹50,000 annually for 4 years",
        additional_benefits: vec![
            "Free study materials",
            "Mentorship programs",
            "Networking opportunities",
        ],
        process: vec![
            "Fill the online application form",
            "Upload required documents",
            "Submit before the deadline",
            "Shortlisted candidates will be notified via email",
        ],
        documents: vec![
            "Aadhaar Card",
            "12th Grade Marksheet",
            "Income Certificate",
            "Caste Certificate (If applicable)",
        ],
        faqs: vec![
            Faq {
                question: "Can I apply if I am in my final year?",
                answer: "Yes, final year students are eligible to apply.",
            },
            Faq {
                question: "How will I receive the scholarship money?",
                answer: "The amount will be directly transferred to your bank account.",
            },
            Faq {
                question: "When will the results be announced?",
                answer: "Results will be announced within 45 days of the application deadline.",
            },
        ],
        support_email: "support@scholarshipportal.com",
        related: vec![
            RelatedScholarship {
                id: 1,
                name: "Engineering Excellence Award",
                amount: "₹40,000",
                deadline: date(2025, 4, 15),
                tags: vec!["Engineering", "Merit-Based"],
            },
            RelatedScholarship {
                id: 2,
                name: "Future Tech Leaders Grant",
                amount: "₹35,000",
                deadline: date(2025, 5, 1),
                tags: vec!["Technology", "Leadership"],
            },
            RelatedScholarship {
                id: 3,
                name: "Women in STEM Scholarship",
                amount: "₹45,000",
                deadline: date(2025, 4, 30),
                tags: vec!["STEM", "Women"],
            },
        ],
    }
}

/// Rows of the admin "Manage Scholarships" table.
pub fn find_managed() -> Vec<ManagedScholarship> {
    vec![
        ManagedScholarship {
            id: "1",
            name: "XYZ Merit Scholarship",
            provider: "ABC Foundation",
            kind: ScholarshipType::Merit,
            deadline: date(2025, 3, 10),
            status: ScholarshipStatus::Published,
        },
        ManagedScholarship {
            id: "2",
            name: "ABC Need-Based Grant",
            provider: "Govt. of India",
            kind: ScholarshipType::Need,
            deadline: date(2025, 4, 5),
            status: ScholarshipStatus::Draft,
        },
        ManagedScholarship {
            id: "3",
            name: "Sports Excellence Fund",
            provider: "Sports Ministry",
            kind: ScholarshipType::Sports,
            deadline: date(2025, 5, 15),
            status: ScholarshipStatus::Expired,
        },
    ]
}

pub fn find_managed_by_id(id: &str) -> Option<ManagedScholarship> {
    find_managed().into_iter().find(|s| s.id == id)
}

pub fn managed_ids() -> Vec<String> {
    find_managed().iter().map(|s| s.id.to_string()).collect()
}

pub fn find_recent_activity() -> Vec<RecentScholarship> {
    vec![
        RecentScholarship {
            name: "XYZ Merit Scholarship",
            added_on: date(2025, 2, 10),
            status: ScholarshipStatus::Active,
        },
        RecentScholarship {
            name: "ABC Need-Based Grant",
            added_on: date(2025, 2, 5),
            status: ScholarshipStatus::Draft,
        },
    ]
}

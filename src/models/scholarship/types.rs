use chrono::NaiveDate;

use crate::models::status::{SavedStatus, ScholarshipStatus};

/// Display format for deadlines on the admin tables ("Mar 10, 2025").
pub const TABLE_DATE_FORMAT: &str = "%b %d, %Y";

/// A scholarship as listed on the student-facing search page.
#[derive(Debug, Clone)]
pub struct Scholarship {
    pub id: u32,
    pub name: &'static str,
    pub amount: &'static str,
    pub deadline: NaiveDate,
    pub criteria: &'static str,
    pub category: &'static str,
    /// Decorative percentage; nothing computes it.
    pub match_score: u8,
}

impl Scholarship {
    pub fn deadline_display(&self) -> String {
        self.deadline.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone)]
pub struct SavedScholarship {
    pub id: u32,
    pub name: &'static str,
    pub amount: &'static str,
    pub deadline: NaiveDate,
    pub criteria: &'static str,
    pub status: SavedStatus,
}

impl SavedScholarship {
    pub fn deadline_display(&self) -> String {
        self.deadline.format("%Y-%m-%d").to_string()
    }
}

/// Funding category offered on the admin forms and tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScholarshipType {
    Merit,
    Need,
    Sports,
    Research,
}

impl ScholarshipType {
    pub const ALL: [ScholarshipType; 4] = [
        ScholarshipType::Merit,
        ScholarshipType::Need,
        ScholarshipType::Sports,
        ScholarshipType::Research,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            ScholarshipType::Merit => "merit",
            ScholarshipType::Need => "need",
            ScholarshipType::Sports => "sports",
            ScholarshipType::Research => "research",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScholarshipType::Merit => "Merit-Based",
            ScholarshipType::Need => "Need-Based",
            ScholarshipType::Sports => "Sports",
            ScholarshipType::Research => "Research",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value.trim())
    }
}

/// Row of the admin "Manage Scholarships" table.
#[derive(Debug, Clone)]
pub struct ManagedScholarship {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: &'static str,
    pub kind: ScholarshipType,
    pub deadline: NaiveDate,
    pub status: ScholarshipStatus,
}

impl ManagedScholarship {
    pub fn deadline_display(&self) -> String {
        self.deadline.format(TABLE_DATE_FORMAT).to_string()
    }
}

/// Entry of the admin dashboard "Recent Scholarship Activity" card.
#[derive(Debug, Clone)]
pub struct RecentScholarship {
    pub name: &'static str,
    pub added_on: NaiveDate,
    pub status: ScholarshipStatus,
}

impl RecentScholarship {
    pub fn added_on_display(&self) -> String {
        self.added_on.format(TABLE_DATE_FORMAT).to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone)]
pub struct RelatedScholarship {
    pub id: u32,
    pub name: &'static str,
    pub amount: &'static str,
    pub deadline: NaiveDate,
    pub tags: Vec<&'static str>,
}

impl RelatedScholarship {
    pub fn deadline_display(&self) -> String {
        self.deadline.format("%B %-d, %Y").to_string()
    }
}

/// The full record behind `/scholarships/{id}`.
#[derive(Debug, Clone)]
pub struct ScholarshipDetail {
    pub title: &'static str,
    pub tags: Vec<&'static str>,
    pub provider: &'static str,
    pub award: &'static str,
    pub deadline: NaiveDate,
    pub eligibility: Vec<&'static str>,
    pub monetary_grant: &'static str,
    pub additional_benefits: Vec<&'static str>,
    pub process: Vec<&'static str>,
    pub documents: Vec<&'static str>,
    pub faqs: Vec<Faq>,
    pub support_email: &'static str,
    pub related: Vec<RelatedScholarship>,
}

impl ScholarshipDetail {
    pub fn deadline_display(&self) -> String {
        self.deadline.format("%B %-d, %Y").to_string()
    }
}

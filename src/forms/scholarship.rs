use chrono::NaiveDate;

use super::{FieldErrors, FormData, SelectOption, validate};
use crate::models::scholarship::ScholarshipType;
use crate::notifications::Notice;

pub const STATE_OPTIONS: &[&str] = &[
    "Delhi",
    "Gujarat",
    "Karnataka",
    "Kerala",
    "Maharashtra",
    "Tamil Nadu",
    "Uttar Pradesh",
    "West Bengal",
];

pub const DOCUMENT_OPTIONS: &[&str] = &[
    "Aadhar Card",
    "Income Certificate",
    "Caste Certificate",
    "Mark Sheets",
    "Bank Passbook",
    "Passport Size Photo",
];

const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("", "Any category"),
    ("general", "General"),
    ("obc", "OBC"),
    ("sc", "SC"),
    ("st", "ST"),
];

/// Which button submitted the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Publish,
    Draft,
}

impl Intent {
    pub fn from_value(value: &str) -> Self {
        match value.trim() {
            "draft" => Intent::Draft,
            _ => Intent::Publish,
        }
    }

    pub fn notice(&self) -> Notice {
        match self {
            Intent::Publish => Notice::success(
                "Scholarship Published",
                "Your scholarship has been published successfully.",
            ),
            Intent::Draft => Notice::success(
                "Scholarship Saved as Draft",
                "Your scholarship has been saved as a draft.",
            ),
        }
    }
}

/// Raw Add-Scholarship submission, echoed back on re-render.
#[derive(Debug, Clone, Default)]
pub struct AddScholarshipForm {
    pub name: String,
    pub organization: String,
    pub description: String,
    pub kind: String,
    pub deadline: String,
    pub academic_requirement: String,
    pub income_limit: String,
    pub category: String,
    pub states: Vec<String>,
    pub amount: String,
    pub benefits: String,
    pub instructions: String,
    pub application_link: String,
    pub documents: Vec<String>,
    pub support_email: String,
    pub helpline_number: String,
    pub intent: String,
}

/// A scholarship that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScholarship {
    pub name: String,
    pub organization: String,
    pub description: String,
    pub kind: ScholarshipType,
    pub deadline: NaiveDate,
    pub academic_requirement: String,
    pub income_limit: Option<String>,
    pub category: Option<String>,
    pub states: Vec<String>,
    pub amount: String,
    pub benefits: String,
    pub instructions: String,
    pub application_link: String,
    pub documents: Vec<String>,
    pub support_email: String,
    pub helpline_number: String,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl AddScholarshipForm {
    pub fn from_form_data(data: &FormData) -> Self {
        Self {
            name: data.get("name").to_string(),
            organization: data.get("organization").to_string(),
            description: data.get("description").to_string(),
            kind: data.get("type").to_string(),
            deadline: data.get("deadline").to_string(),
            academic_requirement: data.get("academic_requirement").to_string(),
            income_limit: data.get("income_limit").to_string(),
            category: data.get("category").to_string(),
            states: data.get_all("states"),
            amount: data.get("amount").to_string(),
            benefits: data.get("benefits").to_string(),
            instructions: data.get("instructions").to_string(),
            application_link: data.get("application_link").to_string(),
            documents: data.get_all("documents"),
            support_email: data.get("support_email").to_string(),
            helpline_number: data.get("helpline_number").to_string(),
            intent: data.get("intent").to_string(),
        }
    }

    pub fn intent(&self) -> Intent {
        Intent::from_value(&self.intent)
    }

    /// Validate every field. Publish and draft share the same rules.
    pub fn validate(&self) -> Result<NewScholarship, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.check("name", validate::required(&self.name, "Scholarship name is required"));
        errors.check(
            "organization",
            validate::required(&self.organization, "Organization name is required"),
        );
        errors.check(
            "description",
            validate::max_chars(&self.description, 200, "Description must be less than 200 characters"),
        );

        let kind = ScholarshipType::from_value(&self.kind);
        if kind.is_none() {
            errors.add("type", "Scholarship type is required");
        }

        let deadline = match validate::date(
            &self.deadline,
            "A deadline date is required",
            "Deadline must be a valid date",
        ) {
            Ok(d) => Some(d),
            Err(message) => {
                errors.add("deadline", message);
                None
            }
        };

        errors.check("amount", validate::required(&self.amount, "Amount is required"));
        errors.check("application_link", validate::url(&self.application_link));
        errors.check("support_email", validate::email(&self.support_email));

        match (kind, deadline) {
            (Some(kind), Some(deadline)) if errors.is_empty() => Ok(NewScholarship {
                name: self.name.trim().to_string(),
                organization: self.organization.trim().to_string(),
                description: self.description.trim().to_string(),
                kind,
                deadline,
                academic_requirement: self.academic_requirement.trim().to_string(),
                income_limit: optional(&self.income_limit),
                category: optional(&self.category),
                states: self.states.clone(),
                amount: self.amount.trim().to_string(),
                benefits: self.benefits.trim().to_string(),
                instructions: self.instructions.trim().to_string(),
                application_link: self.application_link.trim().to_string(),
                documents: self.documents.clone(),
                support_email: self.support_email.trim().to_string(),
                helpline_number: self.helpline_number.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }

    pub fn type_options(&self) -> Vec<SelectOption> {
        let pairs: Vec<(&str, &str)> = ScholarshipType::ALL.iter().map(|t| (t.value(), t.label())).collect();
        SelectOption::list(&pairs, &self.kind)
    }

    pub fn category_options(&self) -> Vec<SelectOption> {
        SelectOption::list(CATEGORY_OPTIONS, &self.category)
    }

    pub fn state_options(&self) -> Vec<SelectOption> {
        checklist(STATE_OPTIONS, &self.states)
    }

    pub fn document_options(&self) -> Vec<SelectOption> {
        checklist(DOCUMENT_OPTIONS, &self.documents)
    }
}

fn checklist(options: &[&str], chosen: &[String]) -> Vec<SelectOption> {
    options
        .iter()
        .map(|o| SelectOption {
            value: o.to_string(),
            label: o.to_string(),
            selected: chosen.iter().any(|c| c == o),
        })
        .collect()
}

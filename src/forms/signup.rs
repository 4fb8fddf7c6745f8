use serde::Deserialize;

use super::{FieldErrors, SelectOption, is_checked, validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caste {
    General,
    Obc,
    Sc,
    St,
}

impl Caste {
    pub const OPTIONS: &'static [(&'static str, &'static str)] = &[
        ("general", "General"),
        ("obc", "OBC"),
        ("sc", "SC"),
        ("st", "ST"),
    ];

    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim() {
            "general" => Some(Caste::General),
            "obc" => Some(Caste::Obc),
            "sc" => Some(Caste::Sc),
            "st" => Some(Caste::St),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Religion {
    Hindu,
    Muslim,
    Christian,
    Sikh,
    Buddhist,
    Jain,
    Other,
}

impl Religion {
    pub const OPTIONS: &'static [(&'static str, &'static str)] = &[
        ("hindu", "Hindu"),
        ("muslim", "Muslim"),
        ("christian", "Christian"),
        ("sikh", "Sikh"),
        ("buddhist", "Buddhist"),
        ("jain", "Jain"),
        ("other", "Other"),
    ];

    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim() {
            "hindu" => Some(Religion::Hindu),
            "muslim" => Some(Religion::Muslim),
            "christian" => Some(Religion::Christian),
            "sikh" => Some(Religion::Sikh),
            "buddhist" => Some(Religion::Buddhist),
            "jain" => Some(Religion::Jain),
            "other" => Some(Religion::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    School,
    Undergraduate,
    Postgraduate,
}

impl EducationLevel {
    pub const OPTIONS: &'static [(&'static str, &'static str)] = &[
        ("school", "School"),
        ("undergraduate", "Undergraduate"),
        ("postgraduate", "Postgraduate"),
    ];

    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim() {
            "school" => Some(EducationLevel::School),
            "undergraduate" => Some(EducationLevel::Undergraduate),
            "postgraduate" => Some(EducationLevel::Postgraduate),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub caste: String,
    pub religion: String,
    pub education_level: String,
    pub terms: Option<String>,
    pub csrf_token: String,
}

/// A sign-up that passed validation. Passwords are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub full_name: String,
    pub email: String,
    pub caste: Caste,
    pub religion: Religion,
    pub education_level: EducationLevel,
}

impl SignupForm {
    pub fn validate(&self) -> Result<NewAccount, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.check(
            "full_name",
            validate::min_chars(&self.full_name, 2, "Name must be at least 2 characters"),
        );
        errors.check("email", validate::email(&self.email));

        if self.password.chars().count() < 6 {
            errors.add("password", "Password must be at least 6 characters");
        }
        errors.check(
            "password",
            validate::password_complexity(
                &self.password,
                "Password must contain at least one uppercase letter, one lowercase letter, and one number",
            ),
        );
        if self.password != self.confirm_password {
            errors.add("confirm_password", "Passwords don't match");
        }

        let caste = Caste::from_value(&self.caste);
        if caste.is_none() {
            errors.add("caste", "Please select your caste");
        }
        let religion = Religion::from_value(&self.religion);
        if religion.is_none() {
            errors.add("religion", "Please select your religion");
        }
        let education_level = EducationLevel::from_value(&self.education_level);
        if education_level.is_none() {
            errors.add("education_level", "Please select your education level");
        }
        if !is_checked(self.terms.as_deref()) {
            errors.add("terms", "You must accept the terms and conditions");
        }

        match (caste, religion, education_level) {
            (Some(caste), Some(religion), Some(education_level)) if errors.is_empty() => Ok(NewAccount {
                full_name: self.full_name.trim().to_string(),
                email: self.email.trim().to_string(),
                caste,
                religion,
                education_level,
            }),
            _ => Err(errors),
        }
    }

    pub fn terms_accepted(&self) -> bool {
        is_checked(self.terms.as_deref())
    }

    pub fn caste_options(&self) -> Vec<SelectOption> {
        SelectOption::list(Caste::OPTIONS, &self.caste)
    }

    pub fn religion_options(&self) -> Vec<SelectOption> {
        SelectOption::list(Religion::OPTIONS, &self.religion)
    }

    pub fn education_options(&self) -> Vec<SelectOption> {
        SelectOption::list(EducationLevel::OPTIONS, &self.education_level)
    }
}

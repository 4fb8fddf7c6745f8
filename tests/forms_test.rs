//! Form validation tests for login, signup and add-scholarship.

mod common;

use scholarhub::forms::login::LoginForm;
use scholarhub::forms::scholarship::{AddScholarshipForm, Intent};
use scholarhub::forms::signup::{Caste, EducationLevel, Religion, SignupForm};
use scholarhub::forms::{FormData, SubmitError, outcome_notice, submit_stub};
use scholarhub::models::scholarship::ScholarshipType;
use scholarhub::notifications::{Notice, Variant};
use common::*;

// --- Helpers ---

fn complete_signup() -> SignupForm {
    SignupForm {
        full_name: "Jane Roe".into(),
        email: "jane@example.com".into(),
        password: STRONG_PASSWORD.into(),
        confirm_password: STRONG_PASSWORD.into(),
        caste: "obc".into(),
        religion: "sikh".into(),
        education_level: "postgraduate".into(),
        terms: Some("on".into()),
        csrf_token: String::new(),
    }
}

fn complete_scholarship() -> AddScholarshipForm {
    let data = FormData::parse(concat!(
        "name=Merit+Award&organization=ABC+Foundation&description=For+top+performers",
        "&type=merit&deadline=2025-06-30&amount=50000",
        "&states=Kerala&documents=Aadhar+Card&documents=Mark+Sheets",
        "&application_link=https%3A%2F%2Fexample.com%2Fapply",
        "&support_email=help%40example.com&intent=publish"
    ));
    AddScholarshipForm::from_form_data(&data)
}

// --- Login ---

#[test]
fn login_accepts_any_non_empty_password() {
    let form = LoginForm {
        email: STUDENT_EMAIL.into(),
        password: "x".into(),
        csrf_token: String::new(),
    };
    let attempt = form.validate().expect("login should pass");
    assert_eq!(attempt.email, STUDENT_EMAIL);
}

#[test]
fn login_without_at_sign_fails_on_email_only() {
    let form = LoginForm {
        email: "user.example.com".into(),
        password: "x".into(),
        csrf_token: String::new(),
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.fields(), vec!["email"]);
    assert_eq!(errors.message("email"), "Invalid email address");
}

#[test]
fn login_empty_password_is_required() {
    let form = LoginForm {
        email: STUDENT_EMAIL.into(),
        password: String::new(),
        csrf_token: String::new(),
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.message("password"), "Password is required");
}

// --- Signup ---

#[test]
fn complete_signup_passes() {
    let account = complete_signup().validate().expect("signup should pass");
    assert_eq!(account.full_name, "Jane Roe");
    assert_eq!(account.caste, Caste::Obc);
    assert_eq!(account.religion, Religion::Sikh);
    assert_eq!(account.education_level, EducationLevel::Postgraduate);
}

#[test]
fn password_mismatch_flags_confirm_field() {
    for confirm in ["", "Secret124", "secret123", "Secret123 "] {
        let mut form = complete_signup();
        form.confirm_password = confirm.into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.message("confirm_password"), "Passwords don't match", "confirm={confirm:?}");
    }
}

#[test]
fn mismatch_reported_alongside_weak_password() {
    let mut form = complete_signup();
    form.password = "abc".into();
    form.confirm_password = "abd".into();
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.message("password"), "Password must be at least 6 characters");
    assert!(errors.has("confirm_password"));
}

#[test]
fn password_complexity_message() {
    let mut form = complete_signup();
    form.password = "lowercase1".into();
    form.confirm_password = "lowercase1".into();
    let errors = form.validate().unwrap_err();
    assert_eq!(
        errors.message("password"),
        "Password must contain at least one uppercase letter, one lowercase letter, and one number"
    );
}

#[test]
fn each_missing_selection_is_reported_on_its_own_field() {
    let cases: [(&str, fn(&mut SignupForm), &str); 4] = [
        ("caste", |f| f.caste.clear(), "Please select your caste"),
        ("religion", |f| f.religion.clear(), "Please select your religion"),
        ("education_level", |f| f.education_level.clear(), "Please select your education level"),
        ("terms", |f| f.terms = None, "You must accept the terms and conditions"),
    ];
    for (field, clear, message) in cases {
        let mut form = complete_signup();
        clear(&mut form);
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.fields(), vec![field]);
        assert_eq!(errors.message(field), message);
    }
}

#[test]
fn unknown_enum_values_are_rejected() {
    let mut form = complete_signup();
    form.caste = "martian".into();
    form.terms = Some("false".into());
    let errors = form.validate().unwrap_err();
    assert!(errors.has("caste"));
    assert!(errors.has("terms"));
}

#[test]
fn short_name_is_rejected() {
    let mut form = complete_signup();
    form.full_name = "J".into();
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.message("full_name"), "Name must be at least 2 characters");
}

#[test]
fn name_length_counts_the_value_as_typed() {
    let mut form = complete_signup();
    form.full_name = "  J".into();
    let account = form.validate().expect("padded name meets the minimum");
    assert_eq!(account.full_name, "J");
}

// --- Add scholarship ---

#[test]
fn complete_scholarship_passes() {
    let form = complete_scholarship();
    assert_eq!(form.intent(), Intent::Publish);
    let scholarship = form.validate().expect("scholarship should pass");
    assert_eq!(scholarship.kind, ScholarshipType::Merit);
    assert_eq!(scholarship.states, vec!["Kerala"]);
    assert_eq!(scholarship.documents, vec!["Aadhar Card", "Mark Sheets"]);
    assert_eq!(scholarship.income_limit, None);
}

#[test]
fn bad_link_fails_that_field_only() {
    let mut form = complete_scholarship();
    form.application_link = "not-a-url".into();
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.fields(), vec!["application_link"]);
    assert_eq!(errors.message("application_link"), "Invalid URL");
}

#[test]
fn long_description_is_rejected() {
    let mut form = complete_scholarship();
    form.description = "x".repeat(201);
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.message("description"), "Description must be less than 200 characters");

    form.description = "x".repeat(200);
    assert!(form.validate().is_ok());
}

#[test]
fn empty_scholarship_reports_every_required_field() {
    let errors = AddScholarshipForm::default().validate().unwrap_err();
    for field in ["name", "organization", "type", "deadline", "amount", "application_link", "support_email"] {
        assert!(errors.has(field), "{field} should fail");
    }
    assert!(!errors.has("description"));
    assert_eq!(errors.message("deadline"), "A deadline date is required");
}

#[test]
fn draft_intent_has_its_own_notice() {
    let notice = Intent::from_value("draft").notice();
    assert_eq!(notice.title, "Scholarship Saved as Draft");
    assert_eq!(Intent::from_value("anything").notice().title, "Scholarship Published");
}

// --- Submission ---

#[test]
fn stub_submission_always_succeeds() {
    let notice = outcome_notice(
        submit_stub("Test", &"payload"),
        Notice::success("ok", ""),
        Notice::failure("failed", ""),
    );
    assert_eq!(notice.title, "ok");
}

#[test]
fn failed_submission_uses_destructive_notice() {
    let notice = outcome_notice(
        Err(SubmitError("backend down".into())),
        Notice::success("ok", ""),
        Notice::failure("failed", "Please try again later"),
    );
    assert_eq!(notice.variant, Variant::Destructive);
    assert_eq!(notice.title, "failed");
}

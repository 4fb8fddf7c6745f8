use serde::Deserialize;

use super::{FieldErrors, validate};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub csrf_token: String,
}

/// A login attempt that passed validation. The password is not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub email: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginAttempt, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("email", validate::email(&self.email));
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        }
        errors.into_result(|| LoginAttempt { email: self.email.trim().to_string() })
    }
}

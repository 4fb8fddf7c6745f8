use askama::Template;

use super::PageContext;
use crate::forms::FieldErrors;
use crate::forms::login::LoginForm;
use crate::forms::signup::SignupForm;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
    pub form: LoginForm,
    pub errors: FieldErrors,
    pub image: &'static str,
}

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupTemplate {
    pub ctx: PageContext,
    pub form: SignupForm,
    pub errors: FieldErrors,
    pub image: &'static str,
}

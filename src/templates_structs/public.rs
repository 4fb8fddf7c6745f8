use askama::Template;

use super::PageContext;
use crate::models::content::{Feature, Step, TeamMember, Testimonial};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub hero_image: &'static str,
    pub features: Vec<Feature>,
    pub steps: Vec<Step>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub ctx: PageContext,
    pub hero_image: &'static str,
    pub features: Vec<Feature>,
    pub steps: Vec<Step>,
    pub team: Vec<TeamMember>,
    pub testimonials: Vec<Testimonial>,
}

/// Standalone page; rendered from error paths that have no session.
#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate {
    pub path: String,
}

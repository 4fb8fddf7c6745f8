use actix_web::web;

use crate::handlers::admin_handlers::{applications, dashboard, scholarships, settings, users};
use crate::handlers::{auth_handlers, notification_handlers, public_handlers, student_handlers};

/// Every page and form endpoint. Unknown paths fall through to the 404 page.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Public pages
        .route("/", web::get().to(public_handlers::home))
        .route("/about", web::get().to(public_handlers::about))
        .route("/login", web::get().to(auth_handlers::login_page))
        .route("/login", web::post().to(auth_handlers::login_submit))
        .route("/signup", web::get().to(auth_handlers::signup_page))
        .route("/signup", web::post().to(auth_handlers::signup_submit))
        .route("/logout", web::post().to(auth_handlers::logout))
        // Student area
        .route("/dashboard", web::get().to(student_handlers::dashboard))
        .route("/dashboard/saved", web::get().to(student_handlers::saved))
        .route("/dashboard/applications", web::get().to(student_handlers::applications))
        .route("/dashboard/settings", web::get().to(student_handlers::settings_page))
        .route("/dashboard/settings", web::post().to(student_handlers::settings_save))
        .route("/scholarships", web::get().to(student_handlers::scholarships))
        .route("/scholarships/{id}", web::get().to(student_handlers::scholarship_detail))
        .route("/scholarships/{id}/save", web::post().to(student_handlers::save_scholarship))
        .route("/profile", web::get().to(student_handlers::profile_page))
        .route("/profile", web::post().to(student_handlers::profile_save))
        // Notifications
        .route("/notifications", web::get().to(notification_handlers::list))
        .route("/notifications/{id}/dismiss", web::post().to(notification_handlers::dismiss))
        // Admin back-office
        .route("/admin/dashboard", web::get().to(dashboard::index))
        .route("/admin/dashboard/action", web::post().to(dashboard::action))
        .route("/admin/add-scholarship", web::get().to(scholarships::add_page))
        .route("/admin/add-scholarship", web::post().to(scholarships::add_submit))
        .route("/admin/dashboard/scholarships", web::get().to(scholarships::list))
        .route("/admin/dashboard/scholarships/select", web::post().to(scholarships::select))
        .route("/admin/dashboard/scholarships/bulk", web::post().to(scholarships::bulk))
        .route("/admin/dashboard/scholarships/action", web::post().to(scholarships::action))
        .route("/admin/dashboard/scholarships/export", web::post().to(scholarships::export))
        .route("/admin/dashboard/applications", web::get().to(applications::list))
        .route("/admin/dashboard/applications/select", web::post().to(applications::select))
        .route("/admin/dashboard/applications/bulk", web::post().to(applications::bulk))
        .route("/admin/dashboard/applications/action", web::post().to(applications::action))
        .route("/admin/dashboard/applications/view", web::post().to(applications::view))
        .route("/admin/dashboard/applications/close", web::post().to(applications::close))
        .route("/admin/dashboard/users", web::get().to(users::list))
        .route("/admin/dashboard/users/select", web::post().to(users::select))
        .route("/admin/dashboard/users/bulk", web::post().to(users::bulk))
        .route("/admin/dashboard/users/action", web::post().to(users::action))
        .route("/admin/dashboard/users/view", web::post().to(users::view))
        .route("/admin/dashboard/users/close", web::post().to(users::close))
        .route("/admin/dashboard/settings", web::get().to(settings::page))
        .route("/admin/dashboard/settings", web::post().to(settings::save))
        .default_service(web::to(public_handlers::not_found));
}

//! HTTP-level tests: routing, form posts, toasts and page-scoped table state.
//!
//! Each test drives the full app through `actix_web::test` with a cookie
//! session, the way a browser would: load a page, lift its CSRF token,
//! post a form, follow the redirect.

#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::*;

/// Load `path` and return its CSRF token, keeping the session cookie.
macro_rules! open_page {
    ($app:expr, $visitor:expr, $path:expr) => {{
        let resp = test::call_service(&$app, $visitor.get($path).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {}", $path);
        $visitor.remember(&resp);
        let html = body_text(&test::read_body(resp).await);
        csrf_token(&html)
    }};
}

/// GET `path` and return the status and HTML.
macro_rules! fetch {
    ($app:expr, $visitor:expr, $path:expr) => {{
        let resp = test::call_service(&$app, $visitor.get($path).to_request()).await;
        $visitor.remember(&resp);
        let status = resp.status();
        (status, body_text(&test::read_body(resp).await))
    }};
}

/// POST a form and return the response after keeping its cookies.
macro_rules! submit {
    ($app:expr, $visitor:expr, $path:expr, $pairs:expr) => {{
        let resp = test::call_service(&$app, $visitor.post($path, $pairs).to_request()).await;
        $visitor.remember(&resp);
        resp
    }};
}

// --- Routing ---

#[actix_web::test]
async fn unknown_path_renders_not_found() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();

    let (status, html) = fetch!(app, visitor, "/no/such/page");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Oops! Page not found"));
    assert!(html.contains("/no/such/page"));
}

#[actix_web::test]
async fn every_listed_page_renders() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();

    for path in [
        "/",
        "/about",
        "/login",
        "/signup",
        "/dashboard",
        "/scholarships",
        "/dashboard/saved",
        "/dashboard/applications",
        "/dashboard/settings",
        "/profile",
        "/admin/dashboard",
        "/admin/add-scholarship",
        "/admin/dashboard/scholarships",
        "/admin/dashboard/applications",
        "/admin/dashboard/users",
        "/admin/dashboard/settings",
    ] {
        let (status, _) = fetch!(app, visitor, path);
        assert_eq!(status, StatusCode::OK, "GET {path}");
    }
}

#[actix_web::test]
async fn any_scholarship_id_shows_the_same_detail() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();

    let (status, first) = fetch!(app, visitor, "/scholarships/42");
    assert_eq!(status, StatusCode::OK);
    assert!(first.contains("XYZ Merit-Based Scholarship 2025"));

    let (_, second) = fetch!(app, visitor, "/scholarships/not-a-number");
    assert!(second.contains("XYZ Merit-Based Scholarship 2025"));
}

#[actix_web::test]
async fn sidebar_marks_only_the_current_page() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();

    let (_, html) = fetch!(app, visitor, "/dashboard/saved");
    assert!(html.contains(r#"href="/dashboard/saved" class="sidebar-link active""#));
    assert!(html.contains(r#"href="/dashboard" class="sidebar-link""#));
    assert_eq!(html.matches("sidebar-link active").count(), 1);
}

// --- CSRF ---

#[actix_web::test]
async fn post_without_token_is_forbidden() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();

    let resp = submit!(app, visitor, "/login", &[
        ("csrf_token", "forged"),
        ("email", STUDENT_EMAIL),
        ("password", "x"),
    ]);
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

// --- Login ---

#[actix_web::test]
async fn login_with_invalid_email_is_rejected_without_toast() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();
    let token = open_page!(app, visitor, "/login");

    let resp = submit!(app, visitor, "/login", &[
        ("csrf_token", token.as_str()),
        ("email", "not-an-email"),
        ("password", "whatever"),
    ]);
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Invalid email address"));
    assert!(html.contains(r#"value="not-an-email""#));
    assert_eq!(toast_count(&html), 0);
}

#[actix_web::test]
async fn login_with_any_password_welcomes_the_visitor() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();
    let token = open_page!(app, visitor, "/login");

    let resp = submit!(app, visitor, "/login", &[
        ("csrf_token", token.as_str()),
        ("email", STUDENT_EMAIL),
        ("password", "x"),
    ]);
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");

    let (_, html) = fetch!(app, visitor, "/login");
    assert_eq!(toast_count(&html), 1);
    assert!(html.contains("Welcome back!"));
    assert!(html.contains("Successfully logged in to Smart Scholarship Hub"));
}

#[actix_web::test]
async fn toasts_belong_to_one_visitor() {
    let app = test_app!(test_hub());
    let mut alice = Visitor::new();
    let mut bob = Visitor::new();
    let token = open_page!(app, alice, "/login");
    open_page!(app, bob, "/login");

    submit!(app, alice, "/login", &[
        ("csrf_token", token.as_str()),
        ("email", STUDENT_EMAIL),
        ("password", "x"),
    ]);

    let (_, html) = fetch!(app, bob, "/login");
    assert_eq!(toast_count(&html), 0);
}

#[actix_web::test]
async fn dismissed_toast_disappears() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();
    let token = open_page!(app, visitor, "/scholarships/7");

    let resp = submit!(app, visitor, "/scholarships/7/save", &[("csrf_token", token.as_str())]);
    assert_eq!(location(&resp), "/scholarships/7");

    let (_, html) = fetch!(app, visitor, "/scholarships/7");
    assert!(html.contains("Scholarship Saved"));
    let id = regex::Regex::new(r#"data-toast-id="(\d+)""#)
        .unwrap()
        .captures(&html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("toast rendered");

    let resp = submit!(app, visitor, &format!("/notifications/{id}/dismiss"), &[
        ("csrf_token", token.as_str()),
        ("return_to", "/scholarships/7"),
    ]);
    assert_eq!(location(&resp), "/scholarships/7");

    let (_, html) = fetch!(app, visitor, "/scholarships/7");
    assert_eq!(toast_count(&html), 0);
}

// --- Signup ---

#[actix_web::test]
async fn signup_missing_selections_shows_field_errors() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();
    let token = open_page!(app, visitor, "/signup");

    let resp = submit!(app, visitor, "/signup", &[
        ("csrf_token", token.as_str()),
        ("full_name", "Jane Roe"),
        ("email", "jane@example.com"),
        ("password", STRONG_PASSWORD),
        ("confirm_password", STRONG_PASSWORD),
    ]);
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Please select your caste"));
    assert!(html.contains("Please select your religion"));
    assert!(html.contains("Please select your education level"));
    assert!(html.contains("You must accept the terms and conditions"));
    assert_eq!(toast_count(&html), 0);
}

#[actix_web::test]
async fn complete_signup_creates_account_notice() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();
    let token = open_page!(app, visitor, "/signup");

    let resp = submit!(app, visitor, "/signup", &[
        ("csrf_token", token.as_str()),
        ("full_name", "Jane Roe"),
        ("email", "jane@example.com"),
        ("password", STRONG_PASSWORD),
        ("confirm_password", STRONG_PASSWORD),
        ("caste", "general"),
        ("religion", "hindu"),
        ("education_level", "undergraduate"),
        ("terms", "on"),
    ]);
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let (_, html) = fetch!(app, visitor, "/signup");
    assert!(html.contains("Account created successfully!"));
}

// --- Add scholarship ---

#[actix_web::test]
async fn add_scholarship_with_bad_link_is_blocked() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();
    let token = open_page!(app, visitor, "/admin/add-scholarship");

    let resp = submit!(app, visitor, "/admin/add-scholarship", &[
        ("csrf_token", token.as_str()),
        ("name", "Merit Award"),
        ("organization", "ABC Foundation"),
        ("description", "For top performers"),
        ("type", "merit"),
        ("deadline", "2025-06-30"),
        ("amount", "50000"),
        ("states", "Kerala"),
        ("states", "Gujarat"),
        ("application_link", "not-a-url"),
        ("support_email", "help@example.com"),
        ("intent", "publish"),
    ]);
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Invalid URL"));
    assert_eq!(html.matches(r#"class="field-error""#).count(), 1);
    assert_eq!(toast_count(&html), 0);
    // Checked states survive the re-render.
    assert!(html.contains(r#"value="Kerala" checked"#));
}

#[actix_web::test]
async fn add_scholarship_draft_notice() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();
    let token = open_page!(app, visitor, "/admin/add-scholarship");

    let resp = submit!(app, visitor, "/admin/add-scholarship", &[
        ("csrf_token", token.as_str()),
        ("name", "Merit Award"),
        ("organization", "ABC Foundation"),
        ("type", "merit"),
        ("deadline", "2025-06-30"),
        ("amount", "50000"),
        ("application_link", "https://example.com/apply"),
        ("support_email", "help@example.com"),
        ("intent", "draft"),
    ]);
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let (_, html) = fetch!(app, visitor, "/admin/add-scholarship");
    assert!(html.contains("Scholarship Saved as Draft"));
}

// --- Admin tables ---

#[actix_web::test]
async fn bulk_suspend_reports_count_and_clears_selection() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();
    let token = open_page!(app, visitor, "/admin/dashboard/users");

    for id in ["1001", "1002", "1003"] {
        let resp = submit!(app, visitor, "/admin/dashboard/users/select", &[
            ("csrf_token", token.as_str()),
            ("id", id),
        ]);
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    let (_, html) = fetch!(app, visitor, "/admin/dashboard/users");
    assert!(html.contains("3 selected"));

    let resp = submit!(app, visitor, "/admin/dashboard/users/bulk", &[
        ("csrf_token", token.as_str()),
        ("action", "suspend"),
    ]);
    assert_eq!(location(&resp), "/admin/dashboard/users");

    let (_, html) = fetch!(app, visitor, "/admin/dashboard/users");
    assert_eq!(toast_count(&html), 1);
    assert!(html.contains("Bulk suspend"));
    assert!(html.contains("3 users have been suspended."));
    assert!(!html.contains("bulk-bar"));
}

#[actix_web::test]
async fn bulk_with_nothing_selected_is_ignored() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();
    let token = open_page!(app, visitor, "/admin/dashboard/applications");

    submit!(app, visitor, "/admin/dashboard/applications/bulk", &[
        ("csrf_token", token.as_str()),
        ("action", "approve"),
    ]);

    let (_, html) = fetch!(app, visitor, "/admin/dashboard/applications");
    assert_eq!(toast_count(&html), 0);
}

#[actix_web::test]
async fn leaving_a_table_discards_its_selection() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();
    let token = open_page!(app, visitor, "/admin/dashboard/scholarships");

    submit!(app, visitor, "/admin/dashboard/scholarships/select", &[
        ("csrf_token", token.as_str()),
        ("all", "on"),
    ]);
    let (_, html) = fetch!(app, visitor, "/admin/dashboard/scholarships");
    assert!(html.contains("3 selected"));

    fetch!(app, visitor, "/admin/dashboard");
    let (_, html) = fetch!(app, visitor, "/admin/dashboard/scholarships");
    assert!(!html.contains("bulk-bar"));
}

#[actix_web::test]
async fn opening_a_second_detail_replaces_the_first() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();
    let token = open_page!(app, visitor, "/admin/dashboard/applications");

    for id in ["1", "3"] {
        submit!(app, visitor, "/admin/dashboard/applications/view", &[
            ("csrf_token", token.as_str()),
            ("id", id),
        ]);
    }

    let (_, html) = fetch!(app, visitor, "/admin/dashboard/applications");
    assert_eq!(html.matches(r#"role="dialog""#).count(), 1);
    assert!(html.contains("Priya Sharma applied for ABC Need-Based Grant"));
    assert!(!html.contains("John Doe applied for"));

    submit!(app, visitor, "/admin/dashboard/applications/close", &[("csrf_token", token.as_str())]);
    let (_, html) = fetch!(app, visitor, "/admin/dashboard/applications");
    assert!(!html.contains(r#"role="dialog""#));
}

#[actix_web::test]
async fn viewing_unknown_record_is_not_found() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();
    let token = open_page!(app, visitor, "/admin/dashboard/users");

    let resp = submit!(app, visitor, "/admin/dashboard/users/view", &[
        ("csrf_token", token.as_str()),
        ("id", "9999"),
    ]);
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn admin_accounts_cannot_be_deleted() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();
    let token = open_page!(app, visitor, "/admin/dashboard/users");

    submit!(app, visitor, "/admin/dashboard/users/action", &[
        ("csrf_token", token.as_str()),
        ("id", "1005"),
        ("action", "delete"),
    ]);
    let (_, html) = fetch!(app, visitor, "/admin/dashboard/users");
    assert_eq!(toast_count(&html), 0);

    submit!(app, visitor, "/admin/dashboard/users/action", &[
        ("csrf_token", token.as_str()),
        ("id", "1002"),
        ("action", "delete"),
    ]);
    let (_, html) = fetch!(app, visitor, "/admin/dashboard/users");
    assert!(html.contains("User has been deleted successfully."));
}

#[actix_web::test]
async fn bulk_delete_skips_admin_accounts() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();
    let token = open_page!(app, visitor, "/admin/dashboard/users");

    submit!(app, visitor, "/admin/dashboard/users/select", &[
        ("csrf_token", token.as_str()),
        ("all", "on"),
    ]);
    submit!(app, visitor, "/admin/dashboard/users/bulk", &[
        ("csrf_token", token.as_str()),
        ("action", "delete"),
    ]);
    let (_, html) = fetch!(app, visitor, "/admin/dashboard/users");
    assert!(html.contains("4 users have been deleted."));
    assert!(!html.contains("5 users have been deleted."));

    // Only the admin account selected: nothing to delete, no new toast.
    submit!(app, visitor, "/admin/dashboard/users/select", &[
        ("csrf_token", token.as_str()),
        ("id", "1005"),
    ]);
    submit!(app, visitor, "/admin/dashboard/users/bulk", &[
        ("csrf_token", token.as_str()),
        ("action", "delete"),
    ]);
    let (_, html) = fetch!(app, visitor, "/admin/dashboard/users");
    assert_eq!(toast_count(&html), 1);
    assert!(!html.contains("bulk-bar"));
}

#[actix_web::test]
async fn long_search_and_notes_do_not_break_the_session() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();

    let long_search = "a".repeat(5000);
    let (status, html) = fetch!(app, visitor, &format!("/admin/dashboard/users?q={long_search}"));
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(&format!(r#"value="{}""#, "a".repeat(100))));

    let token = open_page!(app, visitor, "/admin/dashboard/applications");
    submit!(app, visitor, "/admin/dashboard/applications/view", &[
        ("csrf_token", token.as_str()),
        ("id", "1"),
    ]);
    let notes = "n".repeat(5000);
    let resp = submit!(app, visitor, "/admin/dashboard/applications/action", &[
        ("csrf_token", token.as_str()),
        ("id", "1"),
        ("action", "approve"),
        ("notes", notes.as_str()),
    ]);
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let (status, html) = fetch!(app, visitor, "/admin/dashboard/applications");
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(&format!(">{}</textarea>", "n".repeat(500))));
    assert!(html.contains("Application Approved"));
}

#[actix_web::test]
async fn dismissing_a_toast_keeps_the_open_tab() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();
    let token = open_page!(app, visitor, "/admin/dashboard/users");

    submit!(app, visitor, "/admin/dashboard/users/action", &[
        ("csrf_token", token.as_str()),
        ("id", "1001"),
        ("action", "suspend"),
    ]);
    let (_, html) = fetch!(app, visitor, "/admin/dashboard/users?tab=activity");
    assert_eq!(toast_count(&html), 1);
    assert!(html.contains(r#"name="return_to" value="/admin/dashboard/users?tab=activity""#));

    let (_, html) = fetch!(app, visitor, "/admin/dashboard/users");
    assert!(html.contains(r#"name="return_to" value="/admin/dashboard/users""#));
}

#[actix_web::test]
async fn filters_are_echoed_but_do_not_narrow_the_table() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();

    let (status, html) = fetch!(app, visitor, "/admin/dashboard/users?q=zzz&status=suspended");
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"value="zzz""#));
    assert!(html.contains(r#"<option value="suspended" selected>"#));
    for name in ["John Doe", "Priya Sharma", "Rahul Gupta", "Akshat Kumar"] {
        assert!(html.contains(name), "{name} should still be listed");
    }
}

#[actix_web::test]
async fn dashboard_quick_action_names_the_item() {
    let app = test_app!(test_hub());
    let mut visitor = Visitor::new();
    let token = open_page!(app, visitor, "/admin/dashboard");

    let resp = submit!(app, visitor, "/admin/dashboard/action", &[
        ("csrf_token", token.as_str()),
        ("action", "approve"),
        ("item", "Akshat Kumar"),
    ]);
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let (_, html) = fetch!(app, visitor, "/admin/dashboard");
    assert!(html.contains("Approve - Akshat Kumar"));
}

//! Mock catalogues and sidebar navigation.

mod common;

use scholarhub::models::nav_item::{SidebarVariant, build_sidebar};
use scholarhub::models::status::{ApplicationStatus, UserStatus};
use scholarhub::models::{application, dashboard, scholarship, user};

// --- Catalogues ---

#[test]
fn catalogue_sizes() {
    assert_eq!(scholarship::find_all().len(), 6);
    assert_eq!(scholarship::find_saved().len(), 4);
    assert_eq!(scholarship::find_managed().len(), 3);
    assert_eq!(application::find_for_student().len(), 3);
    assert_eq!(application::find_all().len(), 3);
    assert_eq!(user::find_all().len(), 5);
    assert_eq!(dashboard::admin_stats().len(), 4);
}

#[test]
fn admin_catalogue_ids_are_unique() {
    for all in [user::all_ids(), application::all_ids(), scholarship::managed_ids()] {
        let mut sorted = all.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), all.len());
    }
}

#[test]
fn lookup_by_id() {
    assert_eq!(user::find_by_id("1001").map(|u| u.full_name), Some("John Doe"));
    assert_eq!(application::find_by_id("3").map(|a| a.status), Some(ApplicationStatus::UnderReview));
    assert!(scholarship::find_managed_by_id("1").is_some());
    assert!(user::find_by_id("nope").is_none());
    assert!(application::find_by_id("").is_none());
}

#[test]
fn only_the_admin_account_is_protected() {
    let protected: Vec<&str> = user::find_all()
        .into_iter()
        .filter(|u| !u.can_delete())
        .map(|u| u.id)
        .collect();
    assert_eq!(protected, vec!["1005"]);
}

#[test]
fn user_statuses_cover_every_kind() {
    let statuses: Vec<UserStatus> = user::find_all().into_iter().map(|u| u.status).collect();
    assert!(statuses.contains(&UserStatus::Active));
    assert!(statuses.contains(&UserStatus::Inactive));
    assert!(statuses.contains(&UserStatus::Suspended));
}

#[test]
fn every_id_shows_the_same_detail() {
    let a = scholarship::find_detail("1");
    let b = scholarship::find_detail("anything");
    assert_eq!(a.title, b.title);
    assert_eq!(a.faqs.len(), 3);
    assert!(!a.related.is_empty());
}

#[test]
fn awaiting_review_excludes_decided_applications() {
    for record in application::find_awaiting_review() {
        assert!(matches!(record.status, ApplicationStatus::Pending | ApplicationStatus::UnderReview));
    }
}

#[test]
fn table_dates_are_formatted() {
    let record = application::find_by_id("1").expect("record 1");
    assert_eq!(record.submitted_display(), "Feb 10, 2025");
    assert_eq!(record.dob_display(), "January 10, 2004");
}

// --- Sidebar ---

#[test]
fn student_sidebar_entries_in_order() {
    let sidebar = build_sidebar(SidebarVariant::Student, "/dashboard");
    let urls: Vec<&str> = sidebar.items.iter().map(|i| i.url).collect();
    assert_eq!(
        urls,
        vec!["/dashboard", "/scholarships", "/dashboard/saved", "/dashboard/applications", "/dashboard/settings"]
    );
    assert_eq!(sidebar.profile.name, "John Doe");
    assert_eq!(sidebar.active_label(), Some("Dashboard"));
}

#[test]
fn admin_sidebar_marks_exact_match_only() {
    let sidebar = build_sidebar(SidebarVariant::Admin, "/admin/dashboard/users");
    let active: Vec<&str> = sidebar.items.iter().filter(|i| i.is_active).map(|i| i.label).collect();
    assert_eq!(active, vec!["Manage Users"]);
    assert_eq!(sidebar.items.len(), 6);
    assert_eq!(sidebar.profile.email, "admin@example.com");
}

#[test]
fn unlisted_path_has_no_active_entry() {
    let sidebar = build_sidebar(SidebarVariant::Student, "/scholarships/42");
    assert_eq!(sidebar.active_label(), None);
}

pub mod application;
pub mod content;
pub mod dashboard;
pub mod nav_item;
pub mod scholarship;
pub mod status;
pub mod user;

pub mod admin_handlers;
pub mod auth_handlers;
pub mod notification_handlers;
pub mod public_handlers;
pub mod student_handlers;

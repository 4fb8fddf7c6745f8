pub mod config;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod notifications;
pub mod routes;
pub mod session;
pub mod templates_structs;
pub mod ui_state;

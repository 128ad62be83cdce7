pub mod analyze;
pub mod delete;
pub mod history;
pub mod show;

pub mod get_overview;
pub mod login;

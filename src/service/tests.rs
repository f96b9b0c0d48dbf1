mod auth;
pub mod utils;

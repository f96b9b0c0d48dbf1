mod integration;
pub mod utils;

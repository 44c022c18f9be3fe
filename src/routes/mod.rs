pub mod auth;
pub mod dashboard;
pub mod members;
pub mod reports;
pub mod tx;
pub mod utils;

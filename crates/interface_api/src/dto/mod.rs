//! Request and response bodies

pub mod dashboard;
pub mod damages;

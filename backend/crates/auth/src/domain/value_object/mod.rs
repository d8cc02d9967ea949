//! Value Object Module

pub mod email;
pub mod patch;
pub mod user_password;
pub mod user_role;

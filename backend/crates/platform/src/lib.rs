//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - Bearer credential parsing
//! - Secure randomness

pub mod crypto;
pub mod header;
pub mod password;

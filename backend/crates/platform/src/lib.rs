//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, memory-hard)
//! - Zeroization of in-memory secrets

pub mod password;

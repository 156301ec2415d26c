// src/infrastructure/security/mod.rs
pub mod access_token;
pub mod session;

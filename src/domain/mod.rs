// src/domain/mod.rs
pub mod errors;
pub mod passion;
pub mod profile;
pub mod search;
pub mod user;

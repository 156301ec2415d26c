// src/presentation/http/controllers/mod.rs
pub mod discovery;
pub mod passions;
pub mod saved_searches;

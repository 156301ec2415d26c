// src/application/ports/mod.rs
pub mod security;
pub mod session;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type AccessTokenVerifierPort = dyn security::AccessTokenVerifier;
pub type SessionProviderPort = dyn session::SessionProvider;

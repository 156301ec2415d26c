pub mod discovery;
pub mod passions;

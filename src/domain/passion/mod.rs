pub mod catalog;
pub mod entity;
pub mod repository;

pub use catalog::PassionCatalog;
pub use entity::{Passion, PassionId};
pub use repository::PassionRepository;

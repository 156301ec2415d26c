mod delete;
mod list;
mod save;
mod service;

pub use delete::DeleteSavedSearchCommand;
pub use save::SaveSearchCommand;
pub use service::SavedSearchCommandService;

mod list;
mod service;

pub use service::PassionQueryService;

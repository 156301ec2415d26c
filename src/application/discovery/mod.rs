//! Page-scoped discovery state: filter criteria, paginated results, saved
//! searches and user-facing notices, plus an event driver that debounces edits.

mod controller;
mod driver;
mod filter_store;
mod notices;

pub use controller::{DiscoveryController, SaveOutcome, SearchOutcome};
pub use driver::{DEFAULT_DEBOUNCE, DiscoveryDriver, DiscoveryEvent, DiscoveryHandle};
pub use filter_store::FilterStore;
pub use notices::{Notice, NoticeLevel};

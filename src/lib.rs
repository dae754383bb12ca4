pub use api::events::get_events_data;
pub use client::ClubClient;
pub use config::ApiConfig;
pub use error::{ClubError, Result};
pub use model::*;
pub use page::{load_events_page, EventsPageData, PageContext};
pub use store::{
    FileStorage, LastTab, MemoryStorage, NavTab, Observable, PreferenceStorage, SubscriptionId,
};

mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod page;
pub mod store;
#[cfg(test)]
pub(crate) mod test_support;

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};
use tracing::{debug, warn};

use crate::store::{Observable, PreferenceStorage, SubscriptionId};

/// Storage key of the last viewed tab.
pub const LAST_TAB_KEY: &str = "lastTab";

pub const DEFAULT_TAB: &str = "home";

/// The portal's navigation tabs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NavTab {
    Home,
    Events,
    Leaderboard,
    Execom,
    Profile,
}

/// The user's last viewed navigation tab.
///
/// With storage the initial value is read from [`LAST_TAB_KEY`] and every
/// change is written back. Without storage (server-side rendering) it starts
/// at `"home"` and nothing is persisted. Storage is never read again after
/// construction.
#[derive(Debug)]
pub struct LastTab {
    cell: Observable<String>,
    persistent: bool,
}

impl LastTab {
    pub fn new(storage: Option<Rc<dyn PreferenceStorage>>) -> Self {
        let initial = storage
            .as_ref()
            .and_then(|s| s.get_item(LAST_TAB_KEY))
            .filter(|tab| !tab.is_empty())
            .unwrap_or_else(|| DEFAULT_TAB.to_string());
        debug!(tab = %initial, persistent = storage.is_some(), "initialized last tab");

        let cell = Observable::new(initial);
        let persistent = storage.is_some();
        if let Some(storage) = storage {
            cell.subscribe(move |tab: &String| {
                if let Err(e) = storage.set_item(LAST_TAB_KEY, tab) {
                    warn!(error = %e, tab = %tab, "failed to persist last tab");
                }
            });
        }

        Self { cell, persistent }
    }

    /// A store for contexts without persistent storage.
    pub fn ephemeral() -> Self {
        Self::new(None)
    }

    pub fn get(&self) -> String {
        self.cell.get()
    }

    /// The current value as a known tab, if it names one.
    pub fn tab(&self) -> Option<NavTab> {
        self.cell.get().parse().ok()
    }

    pub fn set(&self, tab: impl Into<String>) {
        self.cell.set(tab.into());
    }

    pub fn set_tab(&self, tab: NavTab) {
        self.set(tab.as_ref());
    }

    pub fn subscribe(&self, subscriber: impl Fn(&String) + 'static) -> SubscriptionId {
        self.cell.subscribe(subscriber)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.cell.unsubscribe(id)
    }

    pub fn is_persistent(&self) -> bool {
        self.persistent
    }
}

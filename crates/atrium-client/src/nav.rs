//! Dashboard tab navigation.
//!
//! Exactly one named view is active at a time.  Switching publishes the new
//! address fragment so browser-style back/forward navigation can restore a
//! tab by name through [`Portal::restore_tab`].

use serde::{Deserialize, Serialize};

use crate::events::{TabPayload, EVENT_TAB_CHANGED};
use crate::portal::Portal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Community,
    Experiments,
    Homework,
    Resources,
    Doubts,
    Students,
}

impl Tab {
    /// All tabs, in keyboard-shortcut order (keys 1 through 6).
    pub const ALL: [Tab; 6] = [
        Tab::Community,
        Tab::Experiments,
        Tab::Homework,
        Tab::Resources,
        Tab::Doubts,
        Tab::Students,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Community => "community",
            Tab::Experiments => "experiments",
            Tab::Homework => "homework",
            Tab::Resources => "resources",
            Tab::Doubts => "doubts",
            Tab::Students => "students",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Tab bound to a number-key shortcut (1-based).
    pub fn from_shortcut(key: u8) -> Option<Self> {
        match key {
            1..=6 => Some(Self::ALL[(key - 1) as usize]),
            _ => None,
        }
    }
}

impl Portal {
    /// Make `tab` the active view and publish the new address fragment.
    pub fn switch_tab(&self, tab: Tab) {
        self.state().active_tab = tab;
        self.emit(
            EVENT_TAB_CHANGED,
            TabPayload {
                tab: tab.name(),
                fragment: format!("#{}", tab.name()),
            },
        );
    }

    /// Restore the tab named by an address fragment (back/forward
    /// navigation).  Unknown names leave the current tab untouched.
    pub fn restore_tab(&self, fragment: &str) -> bool {
        match Tab::from_name(fragment.trim_start_matches('#')) {
            Some(tab) => {
                self.switch_tab(tab);
                true
            }
            None => false,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.state().active_tab
    }
}

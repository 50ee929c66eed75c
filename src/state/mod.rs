//! State management for the gallery browser.

use crate::config::DEFAULT_IMG_SCALE;
use crate::model::DirContent;
use futures_signals::map_ref;
use futures_signals::signal::{Mutable, Signal};
use once_cell::sync::Lazy;

/// Where the user is: the breadcrumb stack next to the listing it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub stack: Vec<String>,
    pub dir: DirContent,
}

/// UI-facing state of the directory browser.
///
/// Cloning yields handles to the same cells. Signals of a cell always yield
/// its latest value, intermediate writes between two polls are coalesced.
#[derive(Clone)]
pub struct BrowserState {
    /// Latest successfully loaded directory, `None` until the first load.
    pub current_dir: Mutable<Option<DirContent>>,
    /// Names of the directories the user drilled into, root first.
    pub stack: Mutable<Vec<String>>,
    pub lock_scroll: Mutable<bool>,
    pub img_scale: Mutable<u32>,
}

impl BrowserState {
    pub fn new() -> Self {
        Self {
            current_dir: Mutable::new(None),
            stack: Mutable::new(Vec::new()),
            lock_scroll: Mutable::new(false),
            img_scale: Mutable::new(DEFAULT_IMG_SCALE),
        }
    }

    /// Current location, `None` until a directory has been loaded.
    pub fn location_signal(&self) -> impl Signal<Item = Option<Location>> + use<> {
        map_ref! {
            let stack = self.stack.signal_cloned(),
            let current = self.current_dir.signal_cloned() =>
            current.as_ref().map(|dir| Location {
                stack: stack.clone(),
                dir: dir.clone(),
            })
        }
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

static BROWSER_STATE: Lazy<BrowserState> = Lazy::new(BrowserState::new);

/// The process-wide browser state.
pub fn browser_state() -> &'static BrowserState {
    &BROWSER_STATE
}

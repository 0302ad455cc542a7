use std::collections::HashMap;

use log::{debug, trace};
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::stopwatch::{SharedStopwatch, Stopwatch};

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// A name-keyed store of stopwatches with get-or-create semantics.
///
/// Every entry is a [`SharedStopwatch`], so a watch obtained from the
/// registry and the registry's own copy are the same instance. The map lock
/// is held across lookup-or-insert, so concurrent callers asking for the
/// same new name get one watch between them.
pub struct Registry {
    watches: Mutex<HashMap<String, SharedStopwatch>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            watches: Mutex::new(HashMap::new()),
        }
    }

    /// The process-wide default registry.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Get or create a stopwatch.
    ///
    /// With a name, returns the registered watch for that name, creating and
    /// registering one (respecting `autostart`) if absent; on a hit the
    /// existing watch is returned unchanged and `autostart` is ignored.
    /// Without a name, returns a brand-new watch that is not registered
    /// anywhere.
    pub fn stopwatch(&self, name: Option<&str>, autostart: bool) -> SharedStopwatch {
        let fresh = || {
            if autostart {
                Stopwatch::started()
            } else {
                Stopwatch::new()
            }
        };

        let Some(name) = name else {
            return fresh().into();
        };

        let mut watches = self.watches.lock();
        if let Some(sw) = watches.get(name) {
            return sw.clone();
        }
        trace!("creating stopwatch '{}' (autostart: {})", name, autostart);
        let sw: SharedStopwatch = fresh().into();
        watches.insert(name.to_string(), sw.clone());
        sw
    }

    /// The registered stopwatch for `name`, if any. Never creates.
    pub fn get(&self, name: &str) -> Option<SharedStopwatch> {
        self.watches.lock().get(name).cloned()
    }

    /// Register `sw` under `name`, overwriting any existing entry. The
    /// registry shares the watch with the caller; it does not copy it.
    pub fn register(&self, name: impl Into<String>, sw: &SharedStopwatch) {
        let name = name.into();
        trace!("registering stopwatch '{}'", name);
        self.watches.lock().insert(name, sw.clone());
    }

    /// Number of distinct registered names.
    pub fn count(&self) -> usize {
        self.watches.lock().len()
    }

    /// Drop every entry. Handles already handed out keep working; they are
    /// just no longer reachable by name.
    pub fn reset(&self) {
        let mut watches = self.watches.lock();
        debug!("resetting registry, dropping {} entries", watches.len());
        watches.clear();
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

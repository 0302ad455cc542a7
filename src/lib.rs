//! Named, process-wide stopwatches behind a get-or-create registry.
//!
//! ```
//! let sw = swatchman::stopwatch(Some("reindex"), true);
//! // ... do the work ...
//! sw.stop();
//! println!("reindex took {:?}", sw.read().unwrap());
//! ```

mod registry;
mod stopwatch;


// Following is our public interface
pub use crate::registry::Registry;
pub use crate::stopwatch::{SharedStopwatch, Stopwatch};

/// [`Registry::stopwatch`] on the default registry.
pub fn stopwatch(name: Option<&str>, autostart: bool) -> SharedStopwatch {
    Registry::global().stopwatch(name, autostart)
}

/// [`Registry::get`] on the default registry.
pub fn get(name: &str) -> Option<SharedStopwatch> {
    Registry::global().get(name)
}

/// [`Registry::register`] on the default registry.
pub fn register(name: impl Into<String>, sw: &SharedStopwatch) {
    Registry::global().register(name, sw)
}

/// [`Registry::count`] on the default registry.
pub fn count() -> usize {
    Registry::global().count()
}

/// [`Registry::reset`] on the default registry.
pub fn reset() {
    Registry::global().reset()
}

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

#[derive(Clone, Copy, Debug)]
enum State {
    Stopped,
    Running { since: Instant },
}

/// A restartable timer that accumulates elapsed time across start/stop
/// cycles.
///
/// A stopwatch that has never been started reads as `None` ("no measurement
/// yet"). Once started, it reads the accumulated time of all completed run
/// intervals, plus the time since the last `start()` while running. Reading
/// never mutates state; the open interval is only committed by `stop()`.
#[derive(Clone, Debug)]
pub struct Stopwatch {
    state: State,
    accumulated: Duration,
    // set on the first start() and never cleared, so a reset watch
    // still reads Some(0) rather than None
    measured: bool,
}

impl Stopwatch {
    /// A stopped stopwatch with nothing measured yet.
    pub fn new() -> Self {
        Self {
            state: State::Stopped,
            accumulated: Duration::ZERO,
            measured: false,
        }
    }

    /// A stopwatch that is already running, measuring from now.
    pub fn started() -> Self {
        Self {
            state: State::Running {
                since: Instant::now(),
            },
            accumulated: Duration::ZERO,
            measured: true,
        }
    }

    /// Start measuring. No-op if already running: the original mark is
    /// preserved and time keeps accruing from it.
    pub fn start(&mut self) {
        if let State::Stopped = self.state {
            self.state = State::Running {
                since: Instant::now(),
            };
            self.measured = true;
        }
    }

    /// Stop measuring, folding the open interval into the accumulated
    /// total. No-op if already stopped.
    pub fn stop(&mut self) {
        if let State::Running { since } = self.state {
            self.accumulated += since.elapsed();
            self.state = State::Stopped;
        }
    }

    /// Drop the accumulated total. A running watch stays running but
    /// re-marks, so the next read measures only time since the reset.
    /// A watch that was never started still reads `None` afterwards.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        if let State::Running { since } = &mut self.state {
            *since = Instant::now();
        }
    }

    /// Current reading, or `None` if the watch has never been started.
    pub fn read(&self) -> Option<Duration> {
        if !self.measured {
            return None;
        }
        Some(match self.state {
            State::Stopped => self.accumulated,
            State::Running { since } => self.accumulated + since.elapsed(),
        })
    }

    /// `read()` in fractional seconds.
    pub fn read_secs(&self) -> Option<f64> {
        self.read().map(|d| d.as_secs_f64())
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running { .. })
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable handle to a [`Stopwatch`].
///
/// Clones share the underlying watch, so starting or stopping through one
/// handle is visible through every other. This is the currency of the
/// [`Registry`](crate::Registry): registering a watch shares it, it is never
/// copied.
#[derive(Clone, Debug)]
pub struct SharedStopwatch {
    inner: Arc<Mutex<Stopwatch>>,
}

impl SharedStopwatch {
    pub fn new() -> Self {
        Stopwatch::new().into()
    }

    pub fn started() -> Self {
        Stopwatch::started().into()
    }

    pub fn start(&self) {
        self.inner.lock().start();
    }

    pub fn stop(&self) {
        self.inner.lock().stop();
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    pub fn read(&self) -> Option<Duration> {
        self.inner.lock().read()
    }

    pub fn read_secs(&self) -> Option<f64> {
        self.inner.lock().read_secs()
    }

    pub fn is_running(&self) -> bool {
        self.inner.lock().is_running()
    }

    /// Whether two handles refer to the same underlying stopwatch.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for SharedStopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Stopwatch> for SharedStopwatch {
    fn from(sw: Stopwatch) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sw)),
        }
    }
}

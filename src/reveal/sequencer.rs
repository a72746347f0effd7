//! Timer-driven staggered reveal.
//!
//! A [`RevealHandle`] owns one [`LoadingFlags`] set and one timer per
//! [`Region`]. Starting the handle arms the timers; each expiry flips one
//! flag and pushes the new set to every subscriber. Cancelling (or dropping)
//! the handle stops whatever has not fired yet.

use std::sync::Arc;
use std::time::Duration;

use moana_types::{LoadingFlags, Region};
use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, info};

/// Per-region reveal delays, measured from [`RevealHandle::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealDelays {
    map: Duration,
    widgets: Duration,
    charts: Duration,
}

impl RevealDelays {
    pub const DEFAULT_MAP: Duration = Duration::from_millis(1500);
    pub const DEFAULT_WIDGETS: Duration = Duration::from_millis(2200);
    pub const DEFAULT_CHARTS: Duration = Duration::from_millis(3000);

    /// Defaults for every region.
    pub const fn new() -> Self {
        Self {
            map: Self::DEFAULT_MAP,
            widgets: Self::DEFAULT_WIDGETS,
            charts: Self::DEFAULT_CHARTS,
        }
    }

    /// Defaults, replaced by whatever `overrides` names. Later entries win.
    pub fn from_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (Region, Duration)>,
    {
        overrides
            .into_iter()
            .fold(Self::new(), |delays, (region, delay)| delays.with(region, delay))
    }

    /// Replace the delay for one region.
    pub fn with(mut self, region: Region, delay: Duration) -> Self {
        match region {
            Region::Map => self.map = delay,
            Region::Widgets => self.widgets = delay,
            Region::Charts => self.charts = delay,
        }
        self
    }

    pub fn get(&self, region: Region) -> Duration {
        match region {
            Region::Map => self.map,
            Region::Widgets => self.widgets,
            Region::Charts => self.charts,
        }
    }
}

impl Default for RevealDelays {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Idle,
    Armed { started_at: Instant },
    Cancelled,
}

/// State shared between the handle and its timer tasks.
#[derive(Debug)]
struct Shared {
    flags: LoadingFlags,
    lifecycle: Lifecycle,
    subscribers: Vec<mpsc::UnboundedSender<LoadingFlags>>,
}

impl Shared {
    /// Flip `region` and notify. No-op once cancelled or already ready.
    fn complete(&mut self, region: Region) -> bool {
        if self.lifecycle == Lifecycle::Cancelled {
            return false;
        }
        if !self.flags.mark_ready(region) {
            return false;
        }
        let flags = self.flags;
        self.subscribers.retain(|tx| tx.send(flags).is_ok());
        true
    }
}

/// Owner of one reveal sequence.
///
/// Each mounted view gets its own handle; handles never share flags or
/// timers. Dropping the handle cancels it.
///
/// # Example
///
/// ```
/// use moana_insights::reveal::{RevealDelays, RevealHandle};
/// use moana_types::Region;
///
/// # tokio_test::block_on(async {
/// let handle = RevealHandle::new(RevealDelays::default());
/// let mut updates = handle.subscribe();
/// handle.start();
///
/// let first = updates.recv().await.unwrap();
/// assert!(!first.is_loading(Region::Map));
/// assert!(first.is_loading(Region::Charts));
/// # });
/// ```
#[derive(Debug)]
pub struct RevealHandle {
    shared: Arc<Mutex<Shared>>,
    delays: RevealDelays,
    stop_tx: watch::Sender<bool>,
}

/// Create a handle and arm it immediately.
///
/// Must be called from within a Tokio runtime.
pub fn start(delays: RevealDelays) -> RevealHandle {
    let handle = RevealHandle::new(delays);
    handle.start();
    handle
}

impl RevealHandle {
    /// Create an unarmed handle with every region loading.
    ///
    /// Subscribers attached before [`start`](Self::start) see every
    /// transition.
    pub fn new(delays: RevealDelays) -> Self {
        let (stop_tx, _) = watch::channel(false);
        Self {
            shared: Arc::new(Mutex::new(Shared {
                flags: LoadingFlags::new(),
                lifecycle: Lifecycle::Idle,
                subscribers: Vec::new(),
            })),
            delays,
            stop_tx,
        }
    }

    /// Arm one timer per region.
    ///
    /// Only the first call on a handle does anything; later calls (and
    /// calls after [`cancel`](Self::cancel)) neither re-arm timers nor reset
    /// flags. Returns `true` if this call armed the timers.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&self) -> bool {
        let started_at = {
            let mut shared = self.shared.lock();
            if shared.lifecycle != Lifecycle::Idle {
                return false;
            }
            let started_at = Instant::now();
            shared.lifecycle = Lifecycle::Armed { started_at };
            started_at
        };

        debug!(
            map_ms = self.delays.get(Region::Map).as_millis() as u64,
            widgets_ms = self.delays.get(Region::Widgets).as_millis() as u64,
            charts_ms = self.delays.get(Region::Charts).as_millis() as u64,
            "arming reveal timers"
        );

        for region in Region::ALL {
            self.arm(region, started_at);
        }
        true
    }

    fn arm(&self, region: Region, started_at: Instant) {
        let deadline = started_at + self.delays.get(region);
        let shared = Arc::clone(&self.shared);
        let mut stop_rx = self.stop_tx.subscribe();

        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep_until(deadline) => {
                    if shared.lock().complete(region) {
                        info!(
                            region = %region,
                            elapsed_ms = started_at.elapsed().as_millis() as u64,
                            "region revealed"
                        );
                    }
                }
                // Fires on cancel, or with an error once the handle is gone.
                _ = stop_rx.changed() => {}
            }
        });
    }

    /// Current flag values.
    pub fn snapshot(&self) -> LoadingFlags {
        self.shared.lock().flags
    }

    /// Receive every future flag transition.
    ///
    /// Each message carries the full flag set right after one region
    /// became ready, so consecutive messages are strictly more ready.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<LoadingFlags> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.shared.lock().subscribers.push(tx);
        rx
    }

    /// Reveal `region` now instead of waiting for its timer.
    ///
    /// This is the hook for a real readiness signal. The usual rules hold:
    /// a region is revealed at most once, and nothing is revealed after
    /// cancellation. Returns `true` if the flag changed.
    pub fn complete(&self, region: Region) -> bool {
        let changed = self.shared.lock().complete(region);
        if changed {
            info!(region = %region, "region revealed by completion");
        }
        changed
    }

    /// Stop every pending timer. Flags that have not flipped stay loading
    /// forever. Safe to call repeatedly.
    pub fn cancel(&self) {
        {
            let mut shared = self.shared.lock();
            if shared.lifecycle == Lifecycle::Cancelled {
                return;
            }
            shared.lifecycle = Lifecycle::Cancelled;
            debug!(pending = shared.flags.pending().count(), "reveal cancelled");
        }
        self.stop_tx.send_replace(true);
    }

    pub fn is_started(&self) -> bool {
        matches!(self.shared.lock().lifecycle, Lifecycle::Armed { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        self.shared.lock().lifecycle == Lifecycle::Cancelled
    }

    pub fn delays(&self) -> &RevealDelays {
        &self.delays
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

//! Tri-state fetch cell shared by every screen controller.
//!
//! Each screen holds one `Loadable` per backing fetch. The cell tracks the
//! `loading -> (ready | failed)` lifecycle, keeps the last known data visible
//! while a background refetch is in flight, and stamps every fetch with a
//! monotonically increasing epoch so responses from superseded or torn-down
//! fetches are discarded instead of overwriting newer state.

/// Lifecycle phase of a fetch cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing fetched yet and no fetch running.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The most recent fetch succeeded.
    Ready,
    /// The most recent fetch failed; prior data (if any) is still held.
    Failed,
}

#[derive(Debug, Clone)]
pub struct Loadable<T> {
    phase: LoadPhase,
    data: Option<T>,
    error: Option<String>,
    epoch: u64,
    in_flight: bool,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Idle,
            data: None,
            error: None,
            epoch: 0,
            in_flight: false,
        }
    }
}

impl<T> Loadable<T> {
    /// Start a fetch: enter `Loading` and return the epoch the completion
    /// must present. Prior data and any standing error stay untouched until
    /// the outcome arrives.
    pub fn begin(&mut self) -> u64 {
        self.epoch += 1;
        self.in_flight = true;
        self.phase = LoadPhase::Loading;
        self.epoch
    }

    /// Apply a fetch outcome. Returns `false` (and changes nothing) when the
    /// completion is stale: its epoch was superseded by a newer fetch, or the
    /// owning screen was torn down and nothing is in flight anymore.
    pub fn finish(&mut self, epoch: u64, result: Result<T, String>) -> bool {
        if epoch != self.epoch || !self.in_flight {
            tracing::debug!(
                "Discarding stale fetch completion (epoch {}, current {})",
                epoch,
                self.epoch
            );
            return false;
        }
        self.in_flight = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                self.phase = LoadPhase::Ready;
            }
            Err(message) => {
                self.error = Some(message);
                self.phase = LoadPhase::Failed;
            }
        }
        true
    }

    /// Tear down the cell (screen left). Any in-flight completion becomes
    /// stale, and held data is dropped: nothing fetched outlives its screen.
    pub fn invalidate(&mut self) {
        self.epoch += 1;
        self.in_flight = false;
        self.data = None;
        self.error = None;
        self.phase = LoadPhase::Idle;
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// A full-screen loading indicator is only warranted when there is no
    /// prior data to keep showing.
    pub fn show_loading(&self) -> bool {
        self.phase == LoadPhase::Loading && self.data.is_none()
    }
}

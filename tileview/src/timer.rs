/// A single-shot, cancelable deadline driven by adapter-supplied timestamps.
///
/// The engine never reads a clock. Adapters pass `now_ms` on events and poll with
/// [`crate::TileView::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    deadline_ms: Option<u64>,
}

impl Timer {
    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Arms the timer, replacing any pending deadline.
    pub fn restart(&mut self, now_ms: u64, delay_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(delay_ms));
    }

    /// Arms the timer unless it is already pending. Returns `true` if it was armed.
    pub fn start_if_idle(&mut self, now_ms: u64, delay_ms: u64) -> bool {
        if self.is_pending() {
            return false;
        }
        self.restart(now_ms, delay_ms);
        true
    }

    /// Returns `true` if a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline_ms.take().is_some()
    }

    /// Disarms and returns `true` once the deadline has passed.
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

//! Supersede-not-accumulate scheduling.
//!
//! The engine has no clock or event loop of its own. Two small primitives
//! bound the work it does for the host:
//!
//! - [`FrameSlot`] holds at most one pending computation. Scheduling a new one
//!   replaces the old, so rapid input costs one computation per frame.
//! - [`Debounce`] tracks a session that ends once no event refreshed it for a
//!   fixed timeout. Each event replaces the previous deadline.

/// Quiet time after the last wheel event before the wheel session ends.
pub const WHEEL_SESSION_TIMEOUT_MS: f64 = 250.0;

/// Single-slot holder for work waiting on the next display frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSlot<T> {
    pending: Option<T>,
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `value` for the next frame.
    ///
    /// Returns true if a pending value was superseded.
    pub fn schedule(&mut self, value: T) -> bool {
        self.pending.replace(value).is_some()
    }

    /// Take the pending value, leaving the slot empty.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Timer-based session tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debounce {
    timeout_ms: f64,
    deadline_ms: Option<f64>,
}

impl Debounce {
    pub fn new(timeout_ms: f64) -> Self {
        Self {
            timeout_ms,
            deadline_ms: None,
        }
    }

    /// Record an event at `now_ms`, replacing any outstanding deadline.
    ///
    /// Returns true if this event started a new session.
    pub fn refresh(&mut self, now_ms: f64) -> bool {
        let started = self.deadline_ms.is_none();
        self.deadline_ms = Some(now_ms + self.timeout_ms);
        started
    }

    /// End the session if its deadline has passed.
    ///
    /// Returns true if the session ended on this call.
    pub fn expire(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    /// Cancel the outstanding deadline. Returns true if a session was active.
    pub fn cancel(&mut self) -> bool {
        self.deadline_ms.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<f64> {
        self.deadline_ms
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(WHEEL_SESSION_TIMEOUT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_slot_supersedes() {
        let mut slot = FrameSlot::new();
        assert!(!slot.schedule(1));
        assert!(slot.schedule(2));
        assert!(slot.schedule(3));
        assert_eq!(slot.take(), Some(3));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_frame_slot_cancel() {
        let mut slot = FrameSlot::new();
        slot.schedule("move");
        assert!(slot.is_pending());
        slot.cancel();
        assert!(!slot.is_pending());
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_debounce_starts_once() {
        let mut debounce = Debounce::default();
        assert!(debounce.refresh(0.0));
        assert!(!debounce.refresh(100.0));
        assert!(!debounce.refresh(200.0));
        assert_eq!(debounce.deadline_ms(), Some(450.0));
    }

    #[test]
    fn test_debounce_expires_after_quiet_period() {
        let mut debounce = Debounce::default();
        debounce.refresh(0.0);
        debounce.refresh(200.0);
        assert!(!debounce.expire(300.0));
        assert!(debounce.is_active());
        assert!(debounce.expire(450.0));
        assert!(!debounce.is_active());
        // Already ended
        assert!(!debounce.expire(1000.0));
    }

    #[test]
    fn test_debounce_restarts_after_expiry() {
        let mut debounce = Debounce::new(50.0);
        assert!(debounce.refresh(0.0));
        assert!(debounce.expire(50.0));
        assert!(debounce.refresh(60.0));
    }

    #[test]
    fn test_debounce_cancel() {
        let mut debounce = Debounce::default();
        assert!(!debounce.cancel());
        debounce.refresh(0.0);
        assert!(debounce.cancel());
        assert!(!debounce.is_active());
    }
}

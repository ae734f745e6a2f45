//! Cancellable frame scheduling
//!
//! The host owns the actual timer (display refresh, fixed interval, or a test
//! calling frames by hand). The engine only hands out tokens: each request
//! supersedes the previous one and cancelling drops it, so a frame the host
//! queued before a stop can never run.

use serde::{Deserialize, Serialize};

/// Handle for one requested frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameToken(u64);

impl FrameToken {
    /// Monotonic request number
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// At most one outstanding frame request
#[derive(Debug, Default)]
pub struct FrameSchedule {
    next_generation: u64,
    pending: Option<FrameToken>,
}

impl FrameSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the next frame, invalidating any earlier token
    pub fn request(&mut self) -> FrameToken {
        let token = FrameToken(self.next_generation);
        self.next_generation += 1;
        self.pending = Some(token);
        token
    }

    /// Drop the outstanding request, if any
    pub fn cancel(&mut self) -> Option<FrameToken> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Consume `token` if it is the outstanding request
    pub fn claim(&mut self, token: FrameToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_supersedes_previous() {
        let mut schedule = FrameSchedule::new();
        let first = schedule.request();
        let second = schedule.request();
        assert_ne!(first, second);
        assert!(second.generation() > first.generation());
        assert!(!schedule.claim(first));
        assert!(schedule.claim(second));
    }

    #[test]
    fn test_claim_is_one_shot() {
        let mut schedule = FrameSchedule::new();
        let token = schedule.request();
        assert!(schedule.claim(token));
        assert!(!schedule.claim(token));
        assert_eq!(schedule.pending(), None);
    }

    #[test]
    fn test_cancel_invalidates() {
        let mut schedule = FrameSchedule::new();
        let token = schedule.request();
        assert_eq!(schedule.cancel(), Some(token));
        assert_eq!(schedule.cancel(), None);
        assert!(!schedule.claim(token));
    }
}

//! Admission control for catalog loads.
//!
//! DESIGN
//! ======
//! Scheduled cycles are skipped while the page is hidden or while an earlier
//! load is still running. Manual reloads always start. Every started load gets
//! a sequence number. Only successful loads advance the applied watermark, so a
//! slow response can never overwrite a fresher catalog while a fast failure
//! never hides an older success still in flight.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

/// What asked for a load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Startup or the recurring timer.
    Scheduled,
    /// User-requested reload (shortcut or retry control).
    Manual,
}

/// Handle for one started load. Pass it back to [`RefreshGate::complete`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: u64,
    pub trigger: Trigger,
}

/// Decision for a load request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    Start(LoadTicket),
    SkipHidden,
    SkipInFlight,
}

#[derive(Debug, Default)]
pub struct RefreshGate {
    last_seq: u64,
    in_flight: usize,
    newest_success: Option<u64>,
}

impl RefreshGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether a load may start now.
    pub fn admit(&mut self, trigger: Trigger, visible: bool) -> Admission {
        if trigger == Trigger::Scheduled {
            if !visible {
                return Admission::SkipHidden;
            }
            if self.in_flight > 0 {
                return Admission::SkipInFlight;
            }
        }
        self.last_seq += 1;
        self.in_flight += 1;
        Admission::Start(LoadTicket { seq: self.last_seq, trigger })
    }

    /// Record that `ticket` finished. Returns `false` if a newer load has
    /// already succeeded, in which case the result must not be applied.
    pub fn complete(&mut self, ticket: LoadTicket, succeeded: bool) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.newest_success.is_some_and(|newest| ticket.seq <= newest) {
            return false;
        }
        if succeeded {
            self.newest_success = Some(ticket.seq);
        }
        true
    }

    /// Loads started and not yet completed.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

use crate::Seconds;

/// Seconds left for the genie wish, completes once it runs down to zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: Seconds,
    complete: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Decremented, still running with this many seconds left
    Running(Seconds),
    /// Reached zero on this tick
    Completed,
    /// Nothing to count down, no state was touched
    Ignored,
}

impl TickOutcome {
    pub fn has_update(self) -> bool {
        !matches!(self, TickOutcome::Ignored)
    }
}

impl Countdown {
    pub const START: Seconds = 30;
    pub const TICK_MILLIS: u32 = 1000;

    pub const fn new() -> Self {
        Self {
            remaining: Self::START,
            complete: false,
        }
    }

    pub const fn remaining(&self) -> Seconds {
        self.remaining
    }

    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.complete {
            return TickOutcome::Ignored;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.complete = true;
            TickOutcome::Completed
        } else {
            TickOutcome::Running(self.remaining)
        }
    }

    /// "second" or "seconds" depending on what is left.
    pub const fn unit(&self) -> &'static str {
        if self.remaining == 1 {
            "second"
        } else {
            "seconds"
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

//! Per-call lifecycle. One call, one verdict: there is no retry state.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationPhase {
    NotStarted,
    ChecksRunning,
    Aggregated,
    Done,
}

impl ValidationPhase {
    /// The following phase. `Done` is terminal.
    pub fn next(self) -> Self {
        match self {
            Self::NotStarted => Self::ChecksRunning,
            Self::ChecksRunning => Self::Aggregated,
            Self::Aggregated | Self::Done => Self::Done,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::ChecksRunning => "checks_running",
            Self::Aggregated => "aggregated",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for ValidationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks the phase of one call and traces each transition.
#[derive(Debug)]
pub(crate) struct PhaseTracker {
    current: ValidationPhase,
}

impl PhaseTracker {
    pub(crate) fn new() -> Self {
        Self {
            current: ValidationPhase::NotStarted,
        }
    }

    pub(crate) fn advance(&mut self) -> ValidationPhase {
        let from = self.current;
        self.current = from.next();
        tracing::trace!(from = %from, to = %self.current, "validation phase");
        self.current
    }

    pub(crate) fn current(&self) -> ValidationPhase {
        self.current
    }
}

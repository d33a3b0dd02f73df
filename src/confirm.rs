//! Confirm-then-act protection for destructive operations.
//!
//! A first request arms the gate; a second request inside the window
//! confirms. The window is 8 seconds, after which the gate quietly re-arms.
//! The clock is passed in, so the machine is a plain value with no timers
//! of its own.

use std::time::{Duration, Instant};

pub const CONFIRM_WINDOW: Duration = Duration::from_secs(8);

/// The phrase the clear-all gate demands, matched case-insensitively.
pub const CLEAR_PHRASE: &str = "DELETE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Pending { armed_at: Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poke {
    /// First request: armed, waiting for the confirming second request.
    Armed,
    /// Second request inside the window: go ahead.
    Confirmed,
    /// Second request after the window lapsed: re-armed instead.
    Expired,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfirmGate {
    state: State,
    window: Duration,
}

impl Default for ConfirmGate {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmGate {
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            window: CONFIRM_WINDOW,
        }
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            state: State::Idle,
            window,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending { .. })
    }

    pub fn poke(&mut self, now: Instant) -> Poke {
        match self.state {
            State::Idle => {
                self.state = State::Pending { armed_at: now };
                Poke::Armed
            }
            State::Pending { armed_at } => {
                if now.duration_since(armed_at) <= self.window {
                    self.state = State::Idle;
                    Poke::Confirmed
                } else {
                    self.state = State::Pending { armed_at: now };
                    Poke::Expired
                }
            }
        }
    }
}

/// Typed-phrase gate for clear-all.
pub fn phrase_matches(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(CLEAR_PHRASE)
}

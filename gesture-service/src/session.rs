//! Gesture session accumulator

use embassy_time::{Duration, Instant};
use input_services::gesture::MAX_PRESSES;
use input_services::{warn, Channel};

/// Press edges of one gesture, in the order they happened
pub type Presses = heapless::Vec<Channel, MAX_PRESSES>;

/// Press edges collected between idle and quiescence
#[derive(Debug, Clone, Default)]
pub struct GestureSession {
    presses: Presses,
    start_time: Option<Instant>,
    last_activity_time: Option<Instant>,
    active: bool,
}

impl GestureSession {
    /// Creates an inactive, empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a press edge, opening the session if it is not active yet
    pub fn record_press(&mut self, channel: Channel, time: Instant) {
        if self.presses.push(channel).is_err() {
            warn!("Gesture press buffer full, dropping press on channel {}", channel.0);
        }

        if !self.active {
            self.active = true;
            self.start_time = Some(time);
        }

        self.last_activity_time = Some(time);
    }

    /// True once the session is open, nothing is pressed and the multi press window has elapsed
    pub fn is_quiescent(&self, now: Instant, any_pressed: bool, window: Duration) -> bool {
        if !self.active || any_pressed {
            return false;
        }

        match self.last_activity_time {
            Some(last) => now.saturating_duration_since(last) > window,
            None => false,
        }
    }

    /// Time since the first press of the session
    pub fn duration(&self, now: Instant) -> Duration {
        self.start_time
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or(Duration::from_ticks(0))
    }

    /// Closes the session and discards its presses
    pub fn reset(&mut self) {
        self.presses.clear();
        self.start_time = None;
        self.last_activity_time = None;
        self.active = false;
    }

    /// Press edges recorded so far
    pub fn presses(&self) -> &[Channel] {
        &self.presses
    }

    /// Time of the first press edge
    pub fn start_time(&self) -> Option<Instant> {
        self.start_time
    }

    /// Time of the most recent press edge
    pub fn last_activity_time(&self) -> Option<Instant> {
        self.last_activity_time
    }

    /// Whether a session is open
    pub fn is_active(&self) -> bool {
        self.active
    }
}

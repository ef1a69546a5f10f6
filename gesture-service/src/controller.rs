//! Gesture session controller

use embassy_time::Instant;
use embedded_hal::digital::InputPin;
use input_services::{error, info, trace, ClassifiedGesture, Diagnostics, Edge};

use crate::classifier::classify;
use crate::config::{Config, Timing};
use crate::sampler::{Sampler, SwitchState};
use crate::session::GestureSession;
use crate::Error;

/// Controller states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// No gesture in progress
    Idle,
    /// A gesture is open: a channel is pressed or the multi press window has not elapsed yet
    Active,
}

/// Drives the sampler every tick and turns completed sessions into gestures
pub struct Controller<I, const N: usize> {
    sampler: Sampler<I, N>,
    session: GestureSession,
    timing: Timing,
    state: State,
}

impl<I: InputPin, const N: usize> Controller<I, N> {
    /// Create a controller for the configured channels, binding `pins` to them in order
    pub fn new(config: &Config<'_>, pins: impl IntoIterator<Item = I>) -> Result<Self, Error> {
        let sampler = Sampler::new(config, pins).inspect_err(|e| error!("Invalid gesture configuration: {:?}", e))?;
        info!("Gesture controller ready with {} channels", sampler.len());

        Ok(Self {
            sampler,
            session: GestureSession::new(),
            timing: config.timing,
            state: State::Idle,
        })
    }

    /// Tick using the current time
    pub fn poll(&mut self) -> Option<ClassifiedGesture> {
        self.tick(Instant::now())
    }

    /// Sample every switch at `now`, then close the session if it has gone quiet
    pub fn tick(&mut self, now: Instant) -> Option<ClassifiedGesture> {
        self.tick_with(now, &mut ())
    }

    /// Same as [`Self::tick`], reporting edges and classifications to `diagnostics`
    pub fn tick_with<D: Diagnostics>(&mut self, now: Instant, diagnostics: &mut D) -> Option<ClassifiedGesture> {
        let session = &mut self.session;
        let state = &mut self.state;
        self.sampler.update(now, |event| {
            diagnostics.edge(&event);
            if let Edge::Pressed = event.edge {
                session.record_press(event.channel, event.time);
                *state = State::Active;
            }
        });

        // Evaluated after sampling so a press in this tick keeps the session open
        if self.state == State::Active
            && self
                .session
                .is_quiescent(now, self.sampler.any_pressed(), self.timing.multi_press_window)
        {
            return self.complete(now, diagnostics);
        }

        None
    }

    fn complete<D: Diagnostics>(&mut self, now: Instant, diagnostics: &mut D) -> Option<ClassifiedGesture> {
        let duration = self.session.duration(now);
        let gesture = classify(self.session.presses(), duration, &self.timing);

        self.session.reset();
        self.state = State::Idle;

        if !gesture.is_valid {
            return None;
        }

        info!(
            "Gesture {} on channels {:?}, {}ms",
            gesture.category.as_str(),
            gesture.channels,
            duration.as_millis()
        );
        diagnostics.classified(&gesture);

        Some(gesture)
    }

    /// Current controller state
    pub fn state(&self) -> State {
        self.state
    }

    /// Session in progress
    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Timing thresholds in use
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Number of configured channels
    pub fn channel_count(&self) -> usize {
        self.sampler.len()
    }

    /// Per-channel switch snapshots, in configuration order
    pub fn switch_states(&self) -> impl Iterator<Item = SwitchState> + '_ {
        self.sampler.states()
    }

    /// Log the pressed state of every channel
    pub fn log_switch_states(&self) {
        for state in self.sampler.states() {
            trace!("Channel {}: {}", state.id.0, if state.is_pressed { "ON" } else { "OFF" });
        }
    }
}

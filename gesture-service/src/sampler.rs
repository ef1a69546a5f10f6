//! Switch Sampler Definitions

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;
use input_services::{debug, trace, Channel, Edge, EdgeEvent};

use crate::config::Config;
use crate::debounce::{ActiveState, Debouncer};
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Snapshot of a switch's debounce and press state.
pub struct SwitchState {
    /// Channel the switch is bound to.
    pub id: Channel,
    /// Last accepted stable level.
    pub debounced_level: bool,
    /// Last raw sample, before debouncing.
    pub raw_level: bool,
    /// Time of the last raw level change.
    pub last_transition_time: Instant,
    /// Time of the last accepted press edge, if the switch was ever pressed.
    pub press_start_time: Option<Instant>,
    /// Logical pressed state.
    pub is_pressed: bool,
}

#[derive(Debug)]
/// A switch on a generic GPIO pin, bound to one channel.
pub struct Switch<I> {
    gpio: I,
    channel: Channel,
    active_state: ActiveState,
    debouncer: Debouncer,
    press_start_time: Option<Instant>,
    is_pressed: bool,
}

impl<I: InputPin> Switch<I> {
    /// Creates a new released `Switch` on the given GPIO pin.
    pub fn new(channel: Channel, gpio: I, active_state: ActiveState, debounce_time: Duration) -> Self {
        Self {
            gpio,
            channel,
            active_state,
            debouncer: Debouncer::new(debounce_time),
            press_start_time: None,
            is_pressed: false,
        }
    }

    /// Returns the channel this switch is bound to.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Returns the logical pressed state.
    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    /// Reads the raw level, `true` meaning physically pressed.
    ///
    /// A failed read repeats the previous raw level so that it can never produce an edge.
    pub fn sample(&mut self) -> bool {
        match self.active_state.is_pressed(&mut self.gpio) {
            Ok(level) => level,
            Err(_) => {
                trace!("Channel {}: pin read failed", self.channel.0);
                self.debouncer.raw_level()
            }
        }
    }

    /// Samples the pin at `now` and returns the edge accepted by the debouncer, if any.
    pub fn update(&mut self, now: Instant) -> Option<EdgeEvent> {
        let raw = self.sample();
        let was_settling = self.debouncer.is_settling();

        let edge = match self.debouncer.update(raw, now) {
            Some(true) => {
                self.press_start_time = Some(now);
                self.is_pressed = true;
                debug!("Channel {} pressed", self.channel.0);
                Edge::Pressed
            }
            Some(false) => {
                self.is_pressed = false;
                let held = self
                    .press_start_time
                    .map(|start| now.saturating_duration_since(start))
                    .unwrap_or(Duration::from_ticks(0));
                debug!("Channel {} released after {}ms", self.channel.0, held.as_millis());
                Edge::Released { held }
            }
            None => {
                if was_settling && !self.debouncer.is_settling() {
                    trace!("Channel {}: bounce rejected", self.channel.0);
                }
                return None;
            }
        };

        Some(EdgeEvent {
            channel: self.channel,
            edge,
            time: now,
        })
    }

    /// Returns a snapshot of the switch state.
    pub fn state(&self) -> SwitchState {
        SwitchState {
            id: self.channel,
            debounced_level: self.debouncer.level(),
            raw_level: self.debouncer.raw_level(),
            last_transition_time: self.debouncer.last_transition(),
            press_start_time: self.press_start_time,
            is_pressed: self.is_pressed,
        }
    }

    /// Releases the GPIO pin.
    pub fn into_inner(self) -> I {
        self.gpio
    }
}

/// Fixed table of switches, one per configured channel.
pub struct Sampler<I, const N: usize> {
    switches: heapless::Vec<Switch<I>, N>,
}

impl<I: InputPin, const N: usize> Sampler<I, N> {
    /// Binds `pins` to the configured channels, in order.
    pub fn new(config: &Config<'_>, pins: impl IntoIterator<Item = I>) -> Result<Self, Error> {
        config.validate(N)?;

        let mut pins = pins.into_iter();
        let mut switches = heapless::Vec::new();
        for &channel in config.channels {
            let gpio = pins.next().ok_or(Error::PinCountMismatch)?;
            let switch = Switch::new(channel, gpio, config.active_state, config.timing.debounce);
            switches.push(switch).map_err(|_| Error::TooManyChannels)?;
        }

        if pins.next().is_some() {
            return Err(Error::PinCountMismatch);
        }

        Ok(Self { switches })
    }

    /// Updates every switch at `now`, passing accepted edges to `on_edge` in channel order.
    pub fn update(&mut self, now: Instant, mut on_edge: impl FnMut(EdgeEvent)) {
        for switch in self.switches.iter_mut() {
            if let Some(event) = switch.update(now) {
                on_edge(event);
            }
        }
    }

    /// Returns true if any switch is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.switches.iter().any(Switch::is_pressed)
    }

    /// Iterates over switch state snapshots in channel order.
    pub fn states(&self) -> impl Iterator<Item = SwitchState> + '_ {
        self.switches.iter().map(Switch::state)
    }

    /// Number of configured switches.
    pub fn len(&self) -> usize {
        self.switches.len()
    }

    /// Returns true if no switches are configured.
    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }
}

//! Configuration types for the gesture service

use embassy_time::Duration;
use input_services::Channel;

use crate::debounce::ActiveState;
use crate::Error;

/// Switch pins of the reference board, channel id = pin number
pub const DEFAULT_CHANNELS: [Channel; 4] = [Channel(2), Channel(4), Channel(5), Channel(18)];

/// Timing thresholds used by the sampler, session and classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// A raw level must be stable this long before it is accepted
    pub debounce: Duration,
    /// A single-channel gesture lasting longer than this is a long press
    pub long_press: Duration,
    /// Time budget per unique channel for a slide
    pub slide_max_interval: Duration,
    /// Quiet time after the last press before a gesture is considered finished
    pub multi_press_window: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(50),
            long_press: Duration::from_millis(800),
            slide_max_interval: Duration::from_millis(300),
            multi_press_window: Duration::from_millis(500),
        }
    }
}

/// Gesture service configuration
#[derive(Debug, Clone, Copy)]
pub struct Config<'a> {
    /// Ordered channel ids, one per switch
    pub channels: &'a [Channel],
    /// Electrical polarity shared by all switches
    pub active_state: ActiveState,
    /// Timing thresholds
    pub timing: Timing,
}

impl<'a> Config<'a> {
    /// Creates a configuration for `channels` with default polarity and timing
    pub fn new(channels: &'a [Channel]) -> Self {
        Self {
            channels,
            active_state: ActiveState::ActiveLow,
            timing: Timing::default(),
        }
    }

    /// Checks the channel list against a service that can hold `capacity` switches
    pub fn validate(&self, capacity: usize) -> Result<(), Error> {
        if self.channels.is_empty() {
            return Err(Error::NoChannels);
        }

        if self.channels.len() > capacity {
            return Err(Error::TooManyChannels);
        }

        for (i, channel) in self.channels.iter().enumerate() {
            if self.channels[..i].contains(channel) {
                return Err(Error::DuplicateChannel(*channel));
            }
        }

        Ok(())
    }
}

impl Default for Config<'static> {
    fn default() -> Self {
        Self {
            channels: &DEFAULT_CHANNELS,
            active_state: ActiveState::ActiveLow,
            timing: Timing::default(),
        }
    }
}

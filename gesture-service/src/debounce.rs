//! Debounce Module

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Enum representing if the switch is active low or active high.
pub enum ActiveState {
    /// Switch is active low, idling high through a pull-up.
    #[default]
    ActiveLow,
    /// Switch is active high.
    ActiveHigh,
}

impl ActiveState {
    /// Reads the pin and returns `true` if the switch is physically pressed.
    pub fn is_pressed<I: InputPin>(&self, gpio: &mut I) -> Result<bool, I::Error> {
        match self {
            ActiveState::ActiveLow => gpio.is_low(),
            ActiveState::ActiveHigh => gpio.is_high(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// Time-based debouncer for a single switch.
///
/// A new level is accepted once the raw level has stayed unchanged for at least
/// the debounce time since its last transition.
pub struct Debouncer {
    debounce_time: Duration,
    raw_level: bool,
    level: bool,
    last_transition: Instant,
}

impl Debouncer {
    /// Creates a new Debouncer, starting released at time zero.
    pub fn new(debounce_time: Duration) -> Self {
        Self {
            debounce_time,
            raw_level: false,
            level: false,
            last_transition: Instant::from_ticks(0),
        }
    }

    /// Feeds a raw sample taken at `now`, returning the new level if a level change was accepted.
    pub fn update(&mut self, raw: bool, now: Instant) -> Option<bool> {
        if raw != self.raw_level {
            self.raw_level = raw;
            self.last_transition = now;
        }

        if raw != self.level && now.saturating_duration_since(self.last_transition) >= self.debounce_time {
            self.level = raw;
            return Some(raw);
        }

        None
    }

    /// Last accepted stable level.
    pub fn level(&self) -> bool {
        self.level
    }

    /// Last raw sample.
    pub fn raw_level(&self) -> bool {
        self.raw_level
    }

    /// Time of the last raw level change.
    pub fn last_transition(&self) -> Instant {
        self.last_transition
    }

    /// Returns true if the raw level differs from the accepted level.
    pub fn is_settling(&self) -> bool {
        self.raw_level != self.level
    }
}

/// Default Debouncer with a debounce time of 50ms.
impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(50))
    }
}

#[cfg(test)]
mod test {
    use embedded_hal_mock::eh1::digital::{Mock, State, Transaction};

    use super::*;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_accepts_stable_level() {
        let mut debouncer = Debouncer::default();

        assert_eq!(debouncer.update(true, at(100)), None);
        assert!(debouncer.is_settling());
        assert_eq!(debouncer.update(true, at(120)), None);
        assert_eq!(debouncer.update(true, at(150)), Some(true));
        assert!(debouncer.level());
        assert!(!debouncer.is_settling());

        // Already accepted, no repeated edge
        assert_eq!(debouncer.update(true, at(400)), None);

        assert_eq!(debouncer.update(false, at(500)), None);
        assert_eq!(debouncer.update(false, at(549)), None);
        assert_eq!(debouncer.update(false, at(550)), Some(false));
        assert!(!debouncer.level());
    }

    // Flips closer together than the debounce time never change the level
    #[test]
    fn test_rejects_bounce() {
        let mut debouncer = Debouncer::default();

        for (i, raw) in [true, false, true, false, true, false].into_iter().enumerate() {
            assert_eq!(debouncer.update(raw, at(100 + 10 * i as u64)), None);
            assert!(!debouncer.level());
        }

        assert_eq!(debouncer.update(false, at(1000)), None);
        assert!(!debouncer.level());
        assert!(!debouncer.is_settling());
    }

    // Every raw flip restarts the stability timer
    #[test]
    fn test_flip_restarts_timer() {
        let mut debouncer = Debouncer::default();

        assert_eq!(debouncer.update(true, at(0)), None);
        assert_eq!(debouncer.update(false, at(40)), None);
        assert_eq!(debouncer.update(true, at(60)), None);
        assert_eq!(debouncer.last_transition(), at(60));
        assert_eq!(debouncer.update(true, at(100)), None);
        assert_eq!(debouncer.update(true, at(110)), Some(true));
    }

    #[test]
    fn test_clock_behind_transition() {
        let mut debouncer = Debouncer::default();

        assert_eq!(debouncer.update(true, at(100)), None);
        assert_eq!(debouncer.update(true, at(90)), None);
        assert!(debouncer.raw_level());
        assert!(!debouncer.level());
    }

    #[test]
    fn test_polarity() {
        let expectations = [
            Transaction::get(State::Low),
            Transaction::get(State::High),
            Transaction::get(State::High),
            Transaction::get(State::Low),
        ];
        let mut pin = Mock::new(&expectations);

        assert!(ActiveState::ActiveLow.is_pressed(&mut pin).unwrap());
        assert!(!ActiveState::ActiveLow.is_pressed(&mut pin).unwrap());
        assert!(ActiveState::ActiveHigh.is_pressed(&mut pin).unwrap());
        assert!(!ActiveState::ActiveHigh.is_pressed(&mut pin).unwrap());

        pin.done();
    }
}

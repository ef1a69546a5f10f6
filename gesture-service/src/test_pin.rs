//! Scriptable input pins for exercising the sampler and controller

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin};

/// Read failure reported by a faulted pin
#[derive(Debug, Clone, Copy)]
pub struct ReadFault;

impl digital::Error for ReadFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Active-low pin backed by a shared cell: `Some(pressed)` or `None` for a read fault
pub struct TestPin<'a>(&'a Cell<Option<bool>>);

impl ErrorType for TestPin<'_> {
    type Error = ReadFault;
}

impl InputPin for TestPin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.0.get().map(|pressed| !pressed).ok_or(ReadFault)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.0.get().ok_or(ReadFault)
    }
}

/// Physical switch levels for a bench of `N` switches
pub struct Bench<const N: usize>([Cell<Option<bool>>; N]);

impl<const N: usize> Bench<N> {
    pub fn new() -> Self {
        Self(core::array::from_fn(|_| Cell::new(Some(false))))
    }

    pub fn pins(&self) -> [TestPin<'_>; N] {
        core::array::from_fn(|i| TestPin(&self.0[i]))
    }

    pub fn press(&self, index: usize) {
        self.0[index].set(Some(true));
    }

    pub fn release(&self, index: usize) {
        self.0[index].set(Some(false));
    }

    pub fn fault(&self, index: usize) {
        self.0[index].set(None);
    }
}

/// Pin that is always released and never fails
pub struct IdlePin;

impl ErrorType for IdlePin {
    type Error = Infallible;
}

impl InputPin for IdlePin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }
}

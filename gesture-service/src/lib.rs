//! Switch sampling and gesture recognition service
//!
//! Switches are sampled once per tick, debounced, and their press edges are collected into a
//! session. Once nothing is pressed and the multi press window has passed, the session is
//! classified into a single [`ClassifiedGesture`](input_services::ClassifiedGesture).

#![no_std]
#![warn(missing_docs)]

use input_services::Channel;

pub mod classifier;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod sampler;
pub mod session;
pub mod task;

#[cfg(test)]
mod test_pin;

pub use config::{Config, Timing};
pub use controller::{Controller, State};

/// Gesture service errors, raised only while constructing the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// No channels configured
    NoChannels,
    /// The same channel id was configured more than once
    DuplicateChannel(Channel),
    /// More channels configured than the service can hold
    TooManyChannels,
    /// Number of pins differs from the number of configured channels
    PinCountMismatch,
}

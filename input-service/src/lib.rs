//! Input Services Interface Exports

#![no_std]
#![warn(missing_docs)]

pub mod fmt;
pub mod gesture;

pub use gesture::{Category, Channel, ClassifiedGesture, Diagnostics, Edge, EdgeEvent, GestureSink};

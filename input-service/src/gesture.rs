//! Gesture event data types and sink interfaces
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Instant};

/// Maximum number of press edges a single gesture can hold
pub const MAX_PRESSES: usize = 32;

/// Logical input channel, identified by the id it was configured with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Channel(pub u8);

impl Channel {
    /// Returns true if `other` sits directly next to this channel in the physical layout
    pub fn is_adjacent(self, other: Channel) -> bool {
        self.0.abs_diff(other.0) == 1
    }
}

/// Debounced level change on a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Channel became pressed
    Pressed,
    /// Channel became released, `held` is the time since its press edge
    Released {
        /// How long the channel was held
        held: Duration,
    },
}

/// Edge observed on a channel at a given time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeEvent {
    /// Channel the edge occurred on
    pub channel: Channel,
    /// Edge direction
    pub edge: Edge,
    /// Time the edge was accepted
    pub time: Instant,
}

/// Gesture taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Category {
    /// One short press on one channel
    SingleClick,
    /// One channel held past the long press threshold
    LongPress,
    /// Repeated presses, or presses on several channels that do not form a slide
    MultiPress,
    /// Quick presses sweeping across adjacent channels
    Slide,
    /// Nothing to classify
    Unknown,
}

impl Category {
    /// Name used when the gesture is forwarded to a remote consumer
    pub fn as_str(self) -> &'static str {
        match self {
            Category::SingleClick => "single_click",
            Category::LongPress => "long_press",
            Category::MultiPress => "multi_press",
            Category::Slide => "slide",
            Category::Unknown => "unknown",
        }
    }
}

/// Deduplicated, ascending set of channels
pub type ChannelSet = heapless::Vec<Channel, MAX_PRESSES>;

/// Result of classifying one gesture session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassifiedGesture {
    /// False when the session held nothing to classify
    pub is_valid: bool,
    /// Gesture category
    pub category: Category,
    /// Channels involved, deduplicated and ascending
    pub channels: ChannelSet,
    /// Time from the first press to the moment the session was closed
    pub duration_seconds: f32,
}

impl ClassifiedGesture {
    /// An empty, unclassifiable result
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            category: Category::Unknown,
            channels: ChannelSet::new(),
            duration_seconds: 0.0,
        }
    }
}

impl Default for ClassifiedGesture {
    fn default() -> Self {
        Self::invalid()
    }
}

/// Consumer of completed gestures.
///
/// Delivery is fire-and-forget: a sink that cannot accept a gesture drops it.
pub trait GestureSink {
    /// Hand over one completed gesture
    fn send(&mut self, gesture: ClassifiedGesture);
}

impl<F: FnMut(ClassifiedGesture)> GestureSink for F {
    fn send(&mut self, gesture: ClassifiedGesture) {
        self(gesture)
    }
}

impl<M: RawMutex, const N: usize> GestureSink for Sender<'_, M, ClassifiedGesture, N> {
    fn send(&mut self, gesture: ClassifiedGesture) {
        let category = gesture.category;
        if self.try_send(gesture).is_err() {
            crate::warn!("Gesture queue full, dropping {}", category.as_str());
        }
    }
}

/// Observer of raw edges and completed classifications, for logging and tooling
pub trait Diagnostics {
    /// Called for every accepted press or release edge
    fn edge(&mut self, _event: &EdgeEvent) {}

    /// Called for every completed classification, before it reaches the sink
    fn classified(&mut self, _gesture: &ClassifiedGesture) {}
}

impl Diagnostics for () {}

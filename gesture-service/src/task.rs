//! Polling driver for the gesture controller

use embassy_time::{Duration, Instant, Ticker};
use embedded_hal::digital::InputPin;
use input_services::{info, Diagnostics, GestureSink};

use crate::controller::Controller;

/// Default interval between controller ticks
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Tick the controller once at `now`, forwarding a completed gesture to `sink`.
///
/// Returns true if a gesture was forwarded.
pub fn process<I: InputPin, const N: usize>(
    controller: &mut Controller<I, N>,
    sink: &mut impl GestureSink,
    diagnostics: &mut impl Diagnostics,
    now: Instant,
) -> bool {
    match controller.tick_with(now, diagnostics) {
        Some(gesture) => {
            sink.send(gesture);
            true
        }
        None => false,
    }
}

/// Tick the controller forever, every `interval`
pub async fn run<I: InputPin, const N: usize>(
    controller: &mut Controller<I, N>,
    sink: &mut impl GestureSink,
    diagnostics: &mut impl Diagnostics,
    interval: Duration,
) {
    info!(
        "Starting gesture task, {} channels every {}ms",
        controller.channel_count(),
        interval.as_millis()
    );

    let mut ticker = Ticker::every(interval);
    loop {
        process(controller, sink, diagnostics, Instant::now());
        ticker.next().await;
    }
}

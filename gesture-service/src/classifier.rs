//! Gesture Classifier Module

use embassy_time::Duration;
use input_services::gesture::ChannelSet;
use input_services::{Category, Channel, ClassifiedGesture};

use crate::config::Timing;

/// Classifies a press sequence that lasted `duration`.
///
/// Pure function of its inputs: the same presses, duration and timing always give the same result.
pub fn classify(presses: &[Channel], duration: Duration, timing: &Timing) -> ClassifiedGesture {
    if presses.is_empty() {
        return ClassifiedGesture::invalid();
    }

    let channels = unique_channels(presses);
    let category = categorize(presses, channels.len(), duration, timing);

    ClassifiedGesture {
        is_valid: true,
        category,
        channels,
        duration_seconds: duration.as_millis() as f32 / 1000.0,
    }
}

fn categorize(presses: &[Channel], unique_count: usize, duration: Duration, timing: &Timing) -> Category {
    if unique_count == 1 {
        // Long press wins regardless of how many times the channel was pressed
        if duration > timing.long_press {
            Category::LongPress
        } else if presses.len() > 1 {
            Category::MultiPress
        } else {
            Category::SingleClick
        }
    } else {
        // Adjacency uses the raw order, so a repeated channel breaks the slide
        let adjacent = presses.windows(2).all(|pair| pair[0].is_adjacent(pair[1]));
        // An interval too large to scale leaves the slide unbounded in time
        let within_budget = u32::try_from(unique_count)
            .ok()
            .and_then(|count| timing.slide_max_interval.checked_mul(count))
            .map_or(true, |budget| duration < budget);

        if adjacent && within_budget {
            Category::Slide
        } else {
            Category::MultiPress
        }
    }
}

/// Deduplicated presses in ascending order.
fn unique_channels(presses: &[Channel]) -> ChannelSet {
    let mut channels = ChannelSet::new();
    for &channel in presses {
        if !channels.contains(&channel) && channels.push(channel).is_err() {
            break;
        }
    }
    channels.sort_unstable();
    channels
}

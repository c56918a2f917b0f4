use rand::Rng;

use super::{is_marked, Channels};
use crate::constants::HIGH_HALF;

/// Breaks an accidental marker by moving one randomly chosen channel one step
/// towards the middle of the range. Unmarked triples are returned unchanged.
///
/// A marked channel is always in `1..=249`, so the step never leaves `0..=255`.
pub fn normalize_channels<R: Rng>(channels: Channels, rng: &mut R) -> Channels {
    if !is_marked(&channels) {
        return channels;
    }

    let mut normalized = channels;
    let index = rng.gen_range(0..normalized.len());
    normalized[index] = nudge(normalized[index]);
    normalized
}

fn nudge(value: u8) -> u8 {
    if value >= HIGH_HALF {
        value - 1
    } else {
        value + 1
    }
}

use log::error;
use thiserror::Error;

use super::Channels;
use crate::constants::{DIST, HIGH_HALF, MARKER_RESIDUE};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChannelEncodingError {
    #[error("no value within 8 steps of {value} has residue 1")]
    RangeExhausted { value: u8 },
}

/// Forces every channel onto the marker residue, moving each one in a single
/// direction: down for values in the upper half, up otherwise.
///
/// The returned triple always satisfies [`super::is_marked`].
pub fn encode_channels(channels: Channels) -> Result<Channels, ChannelEncodingError> {
    let [r, g, b] = channels;
    Ok([encode_value(r)?, encode_value(g)?, encode_value(b)?])
}

fn encode_value(value: u8) -> Result<u8, ChannelEncodingError> {
    let residue = value % DIST;

    let encoded = if value >= HIGH_HALF {
        let steps = (residue + DIST - MARKER_RESIDUE) % DIST;
        value.checked_sub(steps)
    } else {
        let steps = (MARKER_RESIDUE + DIST - residue) % DIST;
        value.checked_add(steps)
    };

    match encoded {
        Some(encoded) if encoded % DIST == MARKER_RESIDUE => Ok(encoded),
        _ => {
            error!("Channel value {} cannot reach the marker residue", value);
            Err(ChannelEncodingError::RangeExhausted { value })
        }
    }
}

use crate::constants::{TERMINATOR, TERMINATOR_NIBBLES};

/// Zero nibbles at block offset 0 that must precede the closing nibble.
const ZERO_RUN: usize = TERMINATOR_NIBBLES - 1;

/// Block offset (and nibble value) that closes the terminator.
const CLOSING_OFFSET: usize = TERMINATOR[TERMINATOR.len() - 1] as usize;

/// Payload bytes for partial normalization: the text followed by [`TERMINATOR`].
pub fn terminated_payload(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len() + TERMINATOR.len());
    bytes.extend_from_slice(text.as_bytes());
    bytes.extend_from_slice(&TERMINATOR);
    bytes
}

/// Drops the terminator nibbles from the end of a decoded stream.
pub fn strip_terminator(nibbles: &mut Vec<u8>) {
    let keep = nibbles.len().saturating_sub(TERMINATOR_NIBBLES);
    nibbles.truncate(keep);
}

/// Watches the block offsets of recorded markers for the terminator tail.
///
/// A marker at offset 0 extends the zero run, a marker at the closing offset
/// after a long enough run ends the scan, anything else resets the run.
#[derive(Debug, Default)]
pub struct TerminatorDetector {
    zero_run: usize,
}

impl TerminatorDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the block offset of a recorded marker. Returns true once the
    /// terminator has been seen in full.
    pub fn observe(&mut self, offset: usize) -> bool {
        if offset == 0 {
            self.zero_run += 1;
        } else if offset == CLOSING_OFFSET && self.zero_run >= ZERO_RUN {
            return true;
        } else {
            self.zero_run = 0;
        }
        false
    }
}

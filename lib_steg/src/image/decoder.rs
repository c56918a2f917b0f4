use log::{debug, error, info, warn};
use thiserror::Error;

use super::format::Image;
use crate::channel::is_marked;
use crate::constants::BLOCK_SIZE;
use crate::mode::Normalization;
use crate::payload::{nibbles_to_text, strip_terminator, PayloadDecodeError, TerminatorDetector};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("reached the end of the image without finding the terminator")]
    MissingTerminator,
    #[error("payload decoding failed")]
    PayloadDecodeFailed(#[from] PayloadDecodeError),
}

/// Nibbles recovered by a decode scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub nibbles: Vec<u8>,
    pub pixels_visited: usize,
    pub terminated: bool,
}

/// When a decode scan is allowed to stop.
enum StopRule {
    EndOfImage,
    Terminator(TerminatorDetector),
}

impl From<Normalization> for StopRule {
    fn from(mode: Normalization) -> Self {
        match mode {
            Normalization::Full => StopRule::EndOfImage,
            Normalization::Partial => StopRule::Terminator(TerminatorDetector::new()),
        }
    }
}

/// Records the block offset of every marked pixel, in raster order.
pub fn read_nibbles(image: &Image, mode: Normalization) -> ScanReport {
    let mut stop_rule = StopRule::from(mode);
    let mut report = ScanReport::default();
    let mut offset = 0usize;

    'scan: for y in 0..image.height() {
        for x in 0..image.width() {
            report.pixels_visited += 1;

            let [r, g, b, _] = image.get_pixel(x, y);
            if is_marked(&[r, g, b]) {
                report.nibbles.push(offset as u8);

                if let StopRule::Terminator(detector) = &mut stop_rule {
                    if detector.observe(offset) {
                        report.terminated = true;
                        break 'scan;
                    }
                }
            }

            offset = (offset + 1) % BLOCK_SIZE;
        }
    }

    debug!(
        "Scanned {} pixels, recorded {} nibbles",
        report.pixels_visited,
        report.nibbles.len()
    );
    report
}

/// Recovers the text hidden in `image`.
pub fn read_text(image: &Image, mode: Normalization) -> Result<String, DecodeError> {
    info!("Starting decoding in {} mode", mode);

    let mut report = read_nibbles(image, mode);
    if mode.uses_terminator() {
        if !report.terminated {
            error!(
                "No terminator found after {} pixels",
                report.pixels_visited
            );
            return Err(DecodeError::MissingTerminator);
        }
        strip_terminator(&mut report.nibbles);
    }

    let text = nibbles_to_text(&report.nibbles).map_err(|e| {
        warn!("Recovered nibbles do not form a payload: {}", e);
        e
    })?;
    info!("Decoding completed: {} bytes recovered", text.len());
    Ok(text)
}

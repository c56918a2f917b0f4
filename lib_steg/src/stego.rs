//! File-level operations: open an image, run the codec, save or return the result.

use std::path::Path;

use log::info;
use thiserror::Error;

use crate::channel::ChannelEncodingError;
use crate::image::io::{self, ImageIoError};
use crate::image::{hide_text, read_text, DecodeError, EncodeReport, EncodingError};
use crate::mode::Normalization;
use crate::payload::PayloadDecodeError;

#[derive(Error, Debug)]
pub enum StegError {
    #[error(transparent)]
    Image(#[from] ImageIoError),
    #[error("encoding failed")]
    Encoding(#[from] EncodingError),
    #[error("decoding failed")]
    Decoding(#[from] DecodeError),
}

impl StegError {
    /// The image most likely carries no text, or was encoded in the other mode.
    pub fn is_no_payload(&self) -> bool {
        matches!(
            self,
            StegError::Decoding(
                DecodeError::MissingTerminator
                    | DecodeError::PayloadDecodeFailed(
                        PayloadDecodeError::OddNibbleCount(_)
                            | PayloadDecodeError::InvalidEncoding(_)
                            | PayloadDecodeError::InvalidNibble(_)
                            | PayloadDecodeError::MalformedHex(_)
                    )
            )
        )
    }

    /// A broken codec invariant rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            StegError::Encoding(EncodingError::ChannelEncodingFailed(
                ChannelEncodingError::RangeExhausted { .. }
            ))
        )
    }
}

/// Hides `text` in the image at `input` and writes the result to `output` as PNG.
pub fn encode_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    text: &str,
    mode: Normalization,
) -> Result<EncodeReport, StegError> {
    let mut image = io::open(input)?;
    let report = hide_text(&mut image, text, mode, &mut rand::thread_rng())?;
    io::save(image, output)?;
    Ok(report)
}

/// Reads the text hidden in the image at `path`.
pub fn decode_file(path: impl AsRef<Path>, mode: Normalization) -> Result<String, StegError> {
    let image = io::open(path)?;
    let text = read_text(&image, mode)?;
    info!("Recovered {} characters", text.chars().count());
    Ok(text)
}

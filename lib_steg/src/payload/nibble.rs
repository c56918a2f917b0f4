use log::{debug, error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayloadDecodeError {
    #[error("odd number of nibbles collected: {0}")]
    OddNibbleCount(usize),
    #[error("nibble value {0} is out of range")]
    InvalidNibble(u8),
    #[error("malformed hex intermediate")]
    MalformedHex(#[from] hex::FromHexError),
    #[error("recovered bytes are not valid UTF-8")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),
}

/// Expands bytes into nibbles through their hex representation, high nibble first.
pub fn bytes_to_nibbles(bytes: &[u8]) -> Vec<u8> {
    hex::encode(bytes)
        .chars()
        .filter_map(|digit| digit.to_digit(16))
        .map(|nibble| nibble as u8)
        .collect()
}

pub fn text_to_nibbles(text: &str) -> Vec<u8> {
    bytes_to_nibbles(text.as_bytes())
}

/// Joins nibbles back into hex digits, decodes them to bytes and then to UTF-8.
pub fn nibbles_to_text(nibbles: &[u8]) -> Result<String, PayloadDecodeError> {
    if nibbles.len() % 2 != 0 {
        error!("Collected {} nibbles, expected an even count", nibbles.len());
        return Err(PayloadDecodeError::OddNibbleCount(nibbles.len()));
    }

    let hex_string = nibbles
        .iter()
        .map(|&nibble| {
            char::from_digit(u32::from(nibble), 16).ok_or(PayloadDecodeError::InvalidNibble(nibble))
        })
        .collect::<Result<String, _>>()?;
    debug!("Hex intermediate: {}", hex_string);

    let bytes = hex::decode(&hex_string)?;
    Ok(String::from_utf8(bytes)?)
}

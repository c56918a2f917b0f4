pub mod nibble;
pub mod terminator;

pub use nibble::{bytes_to_nibbles, nibbles_to_text, text_to_nibbles, PayloadDecodeError};
pub use terminator::{strip_terminator, terminated_payload, TerminatorDetector};

pub mod decoder;
pub mod encoder;
pub mod format;
pub mod io;

pub use decoder::{read_nibbles, read_text, DecodeError, ScanReport};
pub use encoder::{hide_nibbles, hide_text, write_positions, EncodeReport, EncodingError};
pub use format::{Image, Pixel};

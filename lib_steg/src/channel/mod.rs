pub mod encoder;
pub mod marker;
pub mod normalizer;

pub use encoder::{encode_channels, ChannelEncodingError};
pub use marker::is_marked;
pub use normalizer::normalize_channels;

/// The red, green and blue values of a pixel. Alpha never takes part in marking.
pub type Channels = [u8; 3];

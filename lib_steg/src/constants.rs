/// Modulus applied to every colour channel by the marker predicate.
pub const DIST: u8 = 8;

/// Residue a channel must have, modulo [`DIST`], to count as marked.
pub const MARKER_RESIDUE: u8 = 1;

/// Channels at or above this value are nudged downwards, the rest upwards.
pub const HIGH_HALF: u8 = 128;

/// Pixels per block. One block carries one nibble.
pub const BLOCK_SIZE: usize = 16;

/// Suffix appended to the payload in partial normalization mode.
pub const TERMINATOR: [u8; 6] = [0, 0, 0, 0, 0, 1];

/// Number of nibbles [`TERMINATOR`] expands to.
pub const TERMINATOR_NIBBLES: usize = TERMINATOR.len() * 2;

pub const FORMAT_NAME: &str = "PNG";
pub const FILE_EXT: &str = "png";

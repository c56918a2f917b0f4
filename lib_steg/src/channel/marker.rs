use super::Channels;
use crate::constants::{DIST, MARKER_RESIDUE};

/// Returns true when every channel is congruent to [`MARKER_RESIDUE`] modulo [`DIST`].
///
/// This is the only signal the decoder ever observes.
#[inline]
pub fn is_marked(channels: &Channels) -> bool {
    channels.iter().all(|&value| value % DIST == MARKER_RESIDUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marked_triples() {
        assert!(is_marked(&[1, 1, 1]));
        assert!(is_marked(&[9, 17, 249]));
        assert!(is_marked(&[129, 65, 201]));
    }

    #[test]
    fn test_unmarked_triples() {
        assert!(!is_marked(&[0, 0, 0]));
        assert!(!is_marked(&[255, 255, 255]));
        assert!(!is_marked(&[1, 1, 2]));
        assert!(!is_marked(&[2, 1, 1]));
        assert!(!is_marked(&[9, 10, 17]));
    }

    #[test]
    fn test_every_marked_value_is_interior() {
        // 0 and 255 can never satisfy the residue, so +-1 on a marked channel stays in range
        let marked: Vec<u8> = (0..=255u8).filter(|v| v % DIST == MARKER_RESIDUE).collect();
        assert_eq!(marked.len(), 32);
        assert_eq!(marked.first(), Some(&1));
        assert_eq!(marked.last(), Some(&249));
    }
}

use log::{debug, error, info};
use rand::Rng;
use thiserror::Error;

use super::format::Image;
use crate::channel::{encode_channels, normalize_channels, ChannelEncodingError};
use crate::constants::BLOCK_SIZE;
use crate::mode::Normalization;
use crate::payload::{bytes_to_nibbles, terminated_payload};

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("payload needs {required} pixels but the image has {available}")]
    CapacityExceeded { required: usize, available: usize },
    #[error("nibble #{index} has value {value}, expected 0..=15")]
    InvalidNibble { index: usize, value: u8 },
    #[error("failed to plant a payload marker")]
    ChannelEncodingFailed(#[from] ChannelEncodingError),
}

/// What an encode pass did to the image.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EncodeReport {
    pub nibbles_written: usize,
    pub pixels_normalized: usize,
    pub pixels_visited: usize,
}

/// Raster index of the marker for every nibble: block `i`, offset `nibble_i`.
///
/// One index per block, strictly increasing.
pub fn write_positions(nibbles: &[u8]) -> Vec<usize> {
    nibbles
        .iter()
        .enumerate()
        .map(|(block, &nibble)| block * BLOCK_SIZE + nibble as usize)
        .collect()
}

/// Hides `text` in the pixels of `image`. In partial mode the terminator is
/// appended first.
pub fn hide_text<R: Rng>(
    image: &mut Image,
    text: &str,
    mode: Normalization,
    rng: &mut R,
) -> Result<EncodeReport, EncodingError> {
    let payload = if mode.uses_terminator() {
        terminated_payload(text)
    } else {
        text.as_bytes().to_vec()
    };
    debug!("Payload is {} bytes in {} mode", payload.len(), mode);

    hide_nibbles(image, &bytes_to_nibbles(&payload), mode, rng)
}

/// Plants one marker per nibble and, in full mode, scrubs every other pixel.
///
/// Fails without touching the image when a nibble is out of range or the last
/// marker would fall outside it.
pub fn hide_nibbles<R: Rng>(
    image: &mut Image,
    nibbles: &[u8],
    mode: Normalization,
    rng: &mut R,
) -> Result<EncodeReport, EncodingError> {
    info!("Starting encoding of {} nibbles", nibbles.len());

    if let Some((index, &value)) = nibbles
        .iter()
        .enumerate()
        .find(|&(_, &nibble)| usize::from(nibble) >= BLOCK_SIZE)
    {
        error!("Nibble #{} has value {}", index, value);
        return Err(EncodingError::InvalidNibble { index, value });
    }

    let positions = write_positions(nibbles);
    let available = image.pixel_count();
    if let Some(&last) = positions.last() {
        if last >= available {
            error!(
                "Marker for nibble #{} lands on pixel {} of {}",
                positions.len() - 1,
                last,
                available
            );
            return Err(EncodingError::CapacityExceeded {
                required: last + 1,
                available,
            });
        }
    }

    let mut pending = positions.iter().copied().peekable();
    let mut writes_to_go = positions.len();
    let mut report = EncodeReport::default();
    let mut counter = 0usize;

    'scan: for y in 0..image.height() {
        for x in 0..image.width() {
            report.pixels_visited += 1;

            if pending.peek() == Some(&counter) {
                pending.next();
                let [r, g, b, a] = image.get_pixel(x, y);
                let normalized = normalize_channels([r, g, b], rng);
                let [r, g, b] = encode_channels(normalized)?;
                image.set_pixel(x, y, [r, g, b, a]);

                report.nibbles_written += 1;
                writes_to_go -= 1;
                if writes_to_go == 0 && mode == Normalization::Partial {
                    break 'scan;
                }
            } else if mode == Normalization::Full {
                let [r, g, b, a] = image.get_pixel(x, y);
                let normalized = normalize_channels([r, g, b], rng);
                if normalized != [r, g, b] {
                    let [r, g, b] = normalized;
                    image.set_pixel(x, y, [r, g, b, a]);
                    report.pixels_normalized += 1;
                }
            }

            counter += 1;
        }
    }

    debug!(
        "Visited {} pixels, normalized {}",
        report.pixels_visited, report.pixels_normalized
    );
    info!("Encoding completed: {} markers planted", report.nibbles_written);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::is_marked;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BLACK: [u8; 4] = [0, 0, 0, 255];

    fn marked_indices(image: &Image) -> Vec<usize> {
        (0..image.pixel_count())
            .filter(|&i| {
                let [r, g, b, _] = image.pixel_at(i).unwrap();
                is_marked(&[r, g, b])
            })
            .collect()
    }

    #[test]
    fn test_write_positions_one_per_block() {
        assert_eq!(write_positions(&[4, 1]), vec![4, 17]);
        assert_eq!(write_positions(&[15, 0, 0, 7]), vec![15, 16, 32, 55]);
        assert!(write_positions(&[]).is_empty());
    }

    #[test]
    fn test_single_character_full_mode() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut image = Image::filled(32, 1, BLACK);

        let report = hide_text(&mut image, "A", Normalization::Full, &mut rng).unwrap();

        assert_eq!(report.nibbles_written, 2);
        assert_eq!(report.pixels_visited, 32);
        assert_eq!(marked_indices(&image), vec![4, 17]);
        assert_eq!(image.pixel_at(4), Some([1, 1, 1, 255]));
        assert_eq!(image.pixel_at(17), Some([1, 1, 1, 255]));
    }

    #[test]
    fn test_full_mode_scrubs_accidental_markers() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut image = Image::filled(16, 4, [9, 17, 129, 200]);

        let report = hide_text(&mut image, "A", Normalization::Full, &mut rng).unwrap();

        assert_eq!(report.pixels_normalized, 62);
        assert_eq!(marked_indices(&image), vec![4, 17]);
        // alpha is never touched
        assert!(image.rgba_data().chunks(4).all(|pixel| pixel[3] == 200));
    }

    #[test]
    fn test_partial_mode_stops_after_last_marker() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut image = Image::filled(64, 4, [9, 17, 129, 255]);

        let report = hide_text(&mut image, "A", Normalization::Partial, &mut rng).unwrap();

        // "A" then the terminator: 14 nibbles, the last one is a 1
        assert_eq!(report.nibbles_written, 14);
        assert_eq!(report.pixels_visited, 13 * BLOCK_SIZE + 2);
        assert_eq!(report.pixels_normalized, 0);

        // accidental markers outside the payload pixels survive
        let untouched = image.pixel_at(5).unwrap();
        assert_eq!(untouched, [9, 17, 129, 255]);
        let past_end = image.pixel_at(255).unwrap();
        assert_eq!(past_end, [9, 17, 129, 255]);
    }

    #[test]
    fn test_capacity_exceeded_leaves_image_untouched() {
        let mut rng = StdRng::seed_from_u64(4);
        let original = Image::filled(16, 1, [9, 17, 129, 255]);
        let mut image = original.clone();

        let result = hide_text(&mut image, "A", Normalization::Full, &mut rng);

        assert!(matches!(
            result,
            Err(EncodingError::CapacityExceeded {
                required: 18,
                available: 16
            })
        ));
        assert_eq!(image, original);
    }

    #[test]
    fn test_out_of_range_nibble_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        let original = Image::filled(64, 1, [9, 17, 129, 255]);
        let mut image = original.clone();

        let result = hide_nibbles(&mut image, &[20, 0], Normalization::Partial, &mut rng);

        assert!(matches!(
            result,
            Err(EncodingError::InvalidNibble {
                index: 0,
                value: 20
            })
        ));
        assert_eq!(image, original);

        let result = hide_nibbles(&mut image, &[4, 1, 16], Normalization::Full, &mut rng);
        assert!(matches!(
            result,
            Err(EncodingError::InvalidNibble {
                index: 2,
                value: 16
            })
        ));
        assert_eq!(image, original);
    }

    #[test]
    fn test_every_nibble_is_written() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut image = Image::filled(64, 1, BLACK);

        let report = hide_nibbles(&mut image, &[15, 0, 7], Normalization::Partial, &mut rng).unwrap();

        assert_eq!(report.nibbles_written, 3);
        assert_eq!(marked_indices(&image), vec![15, 16, 39]);
    }

    #[test]
    fn test_capacity_boundary_is_last_marker() {
        let mut rng = StdRng::seed_from_u64(5);

        // "A" marks pixels 4 and 17, so 18 pixels are exactly enough
        let mut image = Image::filled(18, 1, BLACK);
        assert!(hide_text(&mut image, "A", Normalization::Full, &mut rng).is_ok());

        let mut image = Image::filled(17, 1, BLACK);
        assert!(hide_text(&mut image, "A", Normalization::Full, &mut rng).is_err());
    }

    #[test]
    fn test_empty_text_full_mode_only_normalizes() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut image = Image::filled(8, 8, [1, 1, 1, 255]);

        let report = hide_text(&mut image, "", Normalization::Full, &mut rng).unwrap();

        assert_eq!(report.nibbles_written, 0);
        assert_eq!(report.pixels_normalized, 64);
        assert!(marked_indices(&image).is_empty());
    }
}

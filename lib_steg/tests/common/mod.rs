#![allow(dead_code)]

use lib_steg::channel::{is_marked, normalize_channels};
use lib_steg::Image;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Random colours and alpha, including plenty of accidental markers.
pub fn noise_image(width: u32, height: u32, seed: u64) -> Image {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; width as usize * height as usize * 4];
    rng.fill(data.as_mut_slice());
    Image::new(width, height, data).unwrap()
}

/// Noise with every accidental marker already broken, a fair cover for
/// partial normalization.
pub fn marker_free_noise(width: u32, height: u32, seed: u64) -> Image {
    let mut image = noise_image(width, height, seed);
    let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
    for y in 0..height {
        for x in 0..width {
            let [r, g, b, a] = image.get_pixel(x, y);
            let [r, g, b] = normalize_channels([r, g, b], &mut rng);
            image.set_pixel(x, y, [r, g, b, a]);
        }
    }
    image
}

pub fn gradient_image(width: u32, height: u32) -> Image {
    let mut image = Image::filled(width, height, BLACK);
    for y in 0..height {
        for x in 0..width {
            image.set_pixel(x, y, [x as u8, y as u8, (x + y) as u8, 255]);
        }
    }
    image
}

pub fn marked_indices(image: &Image) -> Vec<usize> {
    (0..image.pixel_count())
        .filter(|&i| {
            let [r, g, b, _] = image.pixel_at(i).unwrap();
            is_marked(&[r, g, b])
        })
        .collect()
}

#![allow(dead_code)]

use std::sync::OnceLock;

use iif::{Image, Palette};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro128PlusPlus;

pub fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoroshiro128PlusPlus::seed_from_u64(seed);
    (0..len).map(|_| rng.gen()).collect()
}

/// A smooth gradient with some noise, closer to a photo than uniform noise.
pub fn gradient_image(width: u32, height: u32, channels: u8) -> Image {
    let noise = random_bytes(width as usize * height as usize, 1);
    let mut data = Vec::with_capacity(noise.len() * usize::from(channels));

    for y in 0..height {
        for x in 0..width {
            let n = noise[(y * width + x) as usize] / 8;
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            let b = r / 2 + g / 2;
            data.extend([r.saturating_add(n), g.saturating_add(n), b.saturating_add(n)]);
            data.extend(std::iter::repeat(u8::MAX).take(usize::from(channels) - 3));
        }
    }

    Image::new(width, height, channels, data).unwrap()
}

pub fn random_palette(k: usize) -> Palette {
    Palette::from_bytes(&random_bytes(k * 3, 2)).unwrap()
}

pub const SIZES: [(u32, u32); 2] = [(640, 480), (1920, 1080)];

static IMAGES: OnceLock<Vec<(String, Image)>> = OnceLock::new();

pub fn test_images() -> &'static [(String, Image)] {
    IMAGES.get_or_init(|| {
        SIZES
            .iter()
            .flat_map(|&(width, height)| {
                [3, 4].map(|channels| {
                    (
                        format!("{width}x{height}x{channels}"),
                        gradient_image(width, height, channels),
                    )
                })
            })
            .collect()
    })
}

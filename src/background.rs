//! Decorative brochure backgrounds.
//!
//! A light vertical gradient per audience, a few faint white sparkles and a
//! small brightness lift, saved as JPEG. Purely cosmetic: the profile content
//! does not influence the image, only the audience does.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use rand::Rng;

use crate::error::Result;
use crate::result::Audience;

/// Web-sized A4 proportions.
pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 1697;

const SPARKLE_COUNT: usize = 30;
const SPARKLE_ALPHA: f32 = 20.0 / 255.0;
const BRIGHTNESS: f32 = 1.1;
const JPEG_QUALITY: u8 = 85;

/// Top and bottom gradient colors for an audience.
#[must_use]
pub fn color_scheme(audience: Audience) -> ([u8; 3], [u8; 3]) {
    match audience {
        // very light blue to soft blue
        Audience::Customers => ([250, 252, 255], [200, 230, 255]),
        // light cream to soft peach
        Audience::Investors => ([255, 252, 245], [255, 240, 220]),
        // light green to soft green
        Audience::Partners => ([245, 255, 245], [220, 255, 220]),
    }
}

/// Vertical linear gradient from `top` to `bottom`.
#[must_use]
pub fn gradient(width: u32, height: u32, top: [u8; 3], bottom: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(width, height, |_, y| {
        let ratio = y as f32 / height as f32;
        let mix = |c: usize| (f32::from(top[c]) * (1.0 - ratio) + f32::from(bottom[c]) * ratio) as u8;
        Rgb([mix(0), mix(1), mix(2)])
    })
}

/// Blend faint white discs onto the image at random positions.
///
/// Overlapping discs do not stack: each covered pixel is lightened once.
pub fn add_sparkles<R: Rng + ?Sized>(img: &mut RgbImage, rng: &mut R) {
    let (width, height) = img.dimensions();
    let mut covered = vec![false; width as usize * height as usize];

    for _ in 0..SPARKLE_COUNT {
        let cx = i64::from(rng.gen_range(0..=width));
        let cy = i64::from(rng.gen_range(0..=height));
        let r = i64::from(rng.gen_range(2u32..=4));

        for y in (cy - r).max(0)..=(cy + r).min(i64::from(height) - 1) {
            for x in (cx - r).max(0)..=(cx + r).min(i64::from(width) - 1) {
                if (x - cx).pow(2) + (y - cy).pow(2) <= r * r {
                    covered[y as usize * width as usize + x as usize] = true;
                }
            }
        }
    }

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if covered[y as usize * width as usize + x as usize] {
            for channel in &mut pixel.0 {
                let v = f32::from(*channel);
                *channel = (v + (255.0 - v) * SPARKLE_ALPHA).round() as u8;
            }
        }
    }
}

/// Scale every channel by `factor`, clamped to 255.
pub fn brighten(img: &mut RgbImage, factor: f32) {
    for pixel in img.pixels_mut() {
        for channel in &mut pixel.0 {
            *channel = (f32::from(*channel) * factor).round().min(255.0) as u8;
        }
    }
}

/// Render a background for `audience` with the given random source.
#[must_use]
pub fn render_background<R: Rng + ?Sized>(audience: Audience, rng: &mut R) -> RgbImage {
    let (top, bottom) = color_scheme(audience);
    let mut img = gradient(WIDTH, HEIGHT, top, bottom);
    add_sparkles(&mut img, rng);
    brighten(&mut img, BRIGHTNESS);
    img
}

/// Render a background for `audience` and save it as
/// `brochure_bg_{audience}.jpg` in `dir`, creating `dir` if needed.
///
/// Returns the path of the written file.
pub fn write_background(audience: Audience, dir: &Path) -> Result<PathBuf> {
    let img = render_background(audience, &mut rand::thread_rng());

    fs::create_dir_all(dir)?;
    let path = dir.join(format!("brochure_bg_{audience}.jpg"));

    let mut writer = BufWriter::new(File::create(&path)?);
    JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY).encode_image(&img)?;
    writer.flush()?;

    tracing::debug!(path = %path.display(), "background written");
    Ok(path)
}

//! Whole-image kernel passes.
//!
//! Each pass views the image's bytes as [`Pixel`]s in place and runs one
//! kernel per pixel. Rows go to the rayon pool when the config allows it;
//! sparkle passes only do so with the hashed source, since the xorshift
//! stream must be consumed row-major on a single thread.

use dial_core::{
    generate_transform, generate_transform_and_sparkle, map_bitmap, sparkle, CoordinateHash,
    Pixel, SparkleSource, XorShiftStream,
};
use image::RgbaImage;
use rayon::prelude::*;

use crate::config::{RasterConfig, SourceKind};
use crate::context::KernelContext;
use crate::error::RasterError;

/// View a `width`×`height` RGBA byte buffer as pixels.
pub fn pixels_mut(
    bytes: &mut [u8],
    width: u32,
    height: u32,
) -> Result<&mut [Pixel], RasterError> {
    let len = bytes.len();
    if len != width as usize * height as usize * 4 {
        return Err(RasterError::BufferSize { width, height, len });
    }
    bytemuck::try_cast_slice_mut(bytes)
        .map_err(|_| RasterError::BufferSize { width, height, len })
}

fn image_pixels(image: &mut RgbaImage) -> Result<(&mut [Pixel], u32), RasterError> {
    let (width, height) = image.dimensions();
    Ok((pixels_mut(&mut **image, width, height)?, width))
}

/// Run `kernel` over every pixel with its coordinates.
fn for_each_pixel<F>(pixels: &mut [Pixel], width: u32, parallel: bool, kernel: F)
where
    F: Fn(Pixel, u32, u32) -> Pixel + Sync,
{
    if width == 0 {
        return;
    }
    let row = |(y, row): (usize, &mut [Pixel])| {
        for (x, px) in row.iter_mut().enumerate() {
            *px = kernel(*px, x as u32, y as u32);
        }
    };
    if parallel {
        pixels.par_chunks_mut(width as usize).enumerate().for_each(row);
    } else {
        pixels.chunks_mut(width as usize).enumerate().for_each(row);
    }
}

/// Drive a sparkle-consuming kernel with the configured source.
fn for_each_sparkled<F>(config: &RasterConfig, pixels: &mut [Pixel], width: u32, kernel: F)
where
    F: Fn(Pixel, &mut dyn SparkleSource, u32, u32) -> Pixel + Sync,
{
    match config.source {
        SourceKind::Hashed => {
            let hash = CoordinateHash::new(config.sparkle_seed);
            for_each_pixel(pixels, width, config.sparkle_parallel(), |px, x, y| {
                let mut source = hash;
                kernel(px, &mut source, x, y)
            });
        }
        SourceKind::Sequential => {
            if config.parallel {
                tracing::warn!("sequential sparkle source, dispatching on one thread");
            }
            if width == 0 {
                return;
            }
            let mut stream = XorShiftStream::seeded(config.sparkle_seed);
            for (y, row) in pixels.chunks_mut(width as usize).enumerate() {
                for (x, px) in row.iter_mut().enumerate() {
                    *px = kernel(*px, &mut stream, x as u32, y as u32);
                }
            }
        }
    }
}

/// Recolor by blue-channel index.
pub fn map_image(
    context: &KernelContext,
    config: &RasterConfig,
    image: &mut RgbaImage,
) -> Result<(), RasterError> {
    let (pixels, width) = image_pixels(image)?;
    if config.parallel {
        for_each_pixel(pixels, width, true, |px, _, _| map_bitmap(&context.index, px));
    } else {
        context.index.map_in_place(pixels);
    }
    Ok(())
}

/// Replace every pixel with its palette sample.
pub fn transform_image(
    context: &KernelContext,
    config: &RasterConfig,
    image: &mut RgbaImage,
) -> Result<(), RasterError> {
    let transform = context.transform()?;
    let (pixels, width) = image_pixels(image)?;
    for_each_pixel(pixels, width, config.parallel, |px, _, _| {
        generate_transform(transform, px)
    });
    Ok(())
}

/// Sparkle every pixel in place.
pub fn sparkle_image(
    context: &KernelContext,
    config: &RasterConfig,
    image: &mut RgbaImage,
) -> Result<(), RasterError> {
    let (pixels, width) = image_pixels(image)?;
    for_each_sparkled(config, pixels, width, |px, source, x, y| {
        sparkle(&context.sparkle, source, px, x, y)
    });
    Ok(())
}

/// Mid-row palette sample followed by sparkle.
pub fn transform_and_sparkle_image(
    context: &KernelContext,
    config: &RasterConfig,
    image: &mut RgbaImage,
) -> Result<(), RasterError> {
    let transform = context.transform()?;
    let (pixels, width) = image_pixels(image)?;
    for_each_sparkled(config, pixels, width, |px, source, x, y| {
        generate_transform_and_sparkle(transform, &context.sparkle, source, px, x, y)
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use dial_core::{IndexTable, SparkleTables};

    use super::*;

    fn config(parallel: bool, source: SourceKind) -> RasterConfig {
        RasterConfig {
            sparkle_seed: 99,
            source,
            parallel,
        }
    }

    #[test]
    fn test_pixels_mut_checks_dimensions() {
        let mut bytes = vec![0u8; 4 * 6];
        assert_eq!(pixels_mut(&mut bytes, 3, 2).unwrap().len(), 6);
        assert!(matches!(
            pixels_mut(&mut bytes, 4, 2),
            Err(RasterError::BufferSize { len: 24, .. })
        ));
    }

    #[test]
    fn test_pixels_mut_writes_through() {
        let mut bytes = vec![0u8; 8];
        pixels_mut(&mut bytes, 2, 1).unwrap()[1] = Pixel::new(1, 2, 3, 4);
        assert_eq!(bytes, [0, 0, 0, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_map_image_parallel_matches_in_place() {
        let mut packed = [0u32; 256];
        for (i, p) in packed.iter_mut().enumerate() {
            *p = 0x8000_0000 | (i as u32 * 0x0001_0101);
        }
        let context = KernelContext {
            index: IndexTable::from_packed(&packed),
            ..KernelContext::default()
        };
        let src = RgbaImage::from_fn(17, 9, |x, y| {
            image::Rgba([x as u8, y as u8, (x * y) as u8, 7])
        });

        let mut a = src.clone();
        let mut b = src;
        map_image(&context, &config(true, SourceKind::Hashed), &mut a).unwrap();
        map_image(&context, &config(false, SourceKind::Hashed), &mut b).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.get_pixel(4, 3).0, [12, 12, 12, 0x80]);
    }

    #[test]
    fn test_transform_without_palette_errors() {
        let mut img = RgbaImage::new(4, 4);
        let cfg = config(false, SourceKind::Hashed);
        let err = transform_image(&KernelContext::default(), &cfg, &mut img).unwrap_err();
        assert!(matches!(err, RasterError::MissingPalette));
    }

    #[test]
    fn test_sequential_sparkle_is_reproducible() {
        let context = KernelContext {
            sparkle: SparkleTables::from_magnitudes(90, 45, 20),
            ..KernelContext::default()
        };
        let cfg = config(true, SourceKind::Sequential);
        let src = RgbaImage::from_pixel(32, 8, image::Rgba([128, 128, 128, 200]));
        let mut a = src.clone();
        let mut b = src.clone();
        sparkle_image(&context, &cfg, &mut a).unwrap();
        sparkle_image(&context, &cfg, &mut b).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, src);
        assert!(a.pixels().all(|p| p.0[3] == 200));
    }

    #[test]
    fn test_empty_image_is_a_no_op() {
        let mut img = RgbaImage::new(0, 0);
        let context = KernelContext::default();
        sparkle_image(&context, &config(true, SourceKind::Hashed), &mut img).unwrap();
        sparkle_image(&context, &config(false, SourceKind::Sequential), &mut img).unwrap();
        map_image(&context, &config(true, SourceKind::Hashed), &mut img).unwrap();
    }
}

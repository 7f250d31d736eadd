//! Picture command implementation.

use anyhow::{Context, Result};
use cpc_lib::prelude::*;
use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

/// Download a portrait and write it as PNG.
pub(crate) async fn picture(
    api: &CpcApi,
    slug: &str,
    pixels: u32,
    output: Option<PathBuf>,
) -> Result<()> {
    let picture = api
        .picture(slug, pixels)
        .await
        .with_context(|| format!("Failed to fetch the portrait of '{slug}'"))?;

    let output = output.unwrap_or_else(|| PathBuf::from(format!("{slug}.png")));
    write_png(picture, &output)?;

    println!("Saved {pixels}x{pixels} portrait to {}", output.display());
    Ok(())
}

fn write_png(picture: Picture, path: &Path) -> Result<()> {
    let (width, height) = (picture.width(), picture.height());
    let image = RgbaImage::from_raw(width, height, picture.into_pixels())
        .context("Pixel buffer does not match the picture size")?;
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))
}

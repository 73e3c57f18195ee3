use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};

/// Write `image` to `path` as PNG, whatever the extension says.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    if path.extension().map_or(true, |ext| !ext.eq_ignore_ascii_case("png")) {
        log::warn!("{} does not end in .png, writing PNG anyway", path.display());
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Saved {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}
